use gallery_types::Tag;
use shared::Row;

/// One tag per configured column, in column order. A column the row lacks
/// (or a missing row) still yields a tag, with no value.
pub fn extract_tags(row: Option<&Row>, columns: &[String]) -> Vec<Tag> {
    columns
        .iter()
        .map(|column| Tag::new(column.clone(), row.and_then(|row| row.get(column)).cloned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CellValue;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_tags_follow_column_order() {
        let row = Row::new().with("a", "1").with("b", "2").with("c", "3");
        let tags = extract_tags(Some(&row), &columns(&["c", "a"]));

        assert_eq!(
            tags,
            vec![
                Tag::new("c", Some(CellValue::from("3"))),
                Tag::new("a", Some(CellValue::from("1"))),
            ]
        );
    }

    #[test]
    fn test_missing_column_still_yields_tag() {
        let row = Row::new().with("a", 1.0);
        let tags = extract_tags(Some(&row), &columns(&["a", "missing"]));

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1], Tag::new("missing", None));
    }

    #[test]
    fn test_missing_row() {
        let tags = extract_tags(None, &columns(&["a", "b"]));
        assert_eq!(tags, vec![Tag::new("a", None), Tag::new("b", None)]);
    }

    #[test]
    fn test_no_tag_columns() {
        let row = Row::new().with("a", "1");
        assert!(extract_tags(Some(&row), &[]).is_empty());
    }
}
