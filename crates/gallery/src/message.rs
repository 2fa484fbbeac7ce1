/// A command read from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Page number as the paginator labels it, starting at 1.
    Page(usize),
    Next,
    Prev,
    First,
    Last,
    /// Re-read the props file. The grid keeps showing the old page until the
    /// page changes.
    Reload,
    Refresh,
    Quit,
}

impl Message {
    pub fn parse(line: &str) -> Option<Self> {
        let command = line.trim();
        if let Ok(page) = command.parse::<usize>() {
            return Some(Message::Page(page));
        }

        match command.to_lowercase().as_str() {
            "n" | "next" => Some(Message::Next),
            "p" | "prev" | "previous" => Some(Message::Prev),
            "first" => Some(Message::First),
            "last" => Some(Message::Last),
            "reload" => Some(Message::Reload),
            "refresh" => Some(Message::Refresh),
            "q" | "quit" | "exit" => Some(Message::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Message::parse("3"), Some(Message::Page(3)));
        assert_eq!(Message::parse("  next "), Some(Message::Next));
        assert_eq!(Message::parse("PREV"), Some(Message::Prev));
        assert_eq!(Message::parse("first"), Some(Message::First));
        assert_eq!(Message::parse("last"), Some(Message::Last));
        assert_eq!(Message::parse("reload"), Some(Message::Reload));
        assert_eq!(Message::parse("q"), Some(Message::Quit));
        assert_eq!(Message::parse("sideways"), None);
        assert_eq!(Message::parse("-1"), None);
    }
}
