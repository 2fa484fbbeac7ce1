/// Single-entry memo: holds the last rendered value and the key it was
/// rendered for. A lookup with a different key re-renders and replaces it.
#[derive(Debug, Clone)]
pub struct RenderCache<K, V> {
    entry: Option<(K, V)>,
    misses: u64,
}

impl<K: PartialEq + std::fmt::Debug, V> RenderCache<K, V> {
    pub fn new() -> Self {
        Self {
            entry: None,
            misses: 0,
        }
    }

    pub fn get_or_render<F>(&mut self, key: K, render: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let entry = match self.entry.take() {
            Some((cached, value)) if cached == key => {
                tracing::debug!("Reusing render for {key:?}");
                (cached, value)
            }
            _ => {
                self.misses += 1;
                tracing::debug!("Rendering {key:?}");
                let value = render();
                (key, value)
            }
        };

        &self.entry.insert(entry).1
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K: PartialEq + std::fmt::Debug, V> Default for RenderCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_reuses_value() {
        let mut cache = RenderCache::new();
        let mut renders = 0;

        assert_eq!(*cache.get_or_render(1, || { renders += 1; "one" }), "one");
        assert_eq!(*cache.get_or_render(1, || { renders += 1; "other" }), "one");

        assert_eq!(renders, 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_new_key_replaces_value() {
        let mut cache = RenderCache::new();
        cache.get_or_render(1, || "one");
        assert_eq!(*cache.get_or_render(2, || "two"), "two");

        assert_eq!(cache.misses(), 2);
        assert_eq!(*cache.get_or_render(2, || "stale"), "two");
        assert_eq!(*cache.get_or_render(1, || "one again"), "one again");
        assert_eq!(cache.misses(), 3);
    }

    #[test]
    fn test_invalidate() {
        let mut cache = RenderCache::new();
        cache.get_or_render(1, || "one");
        cache.invalidate();

        assert_eq!(*cache.get_or_render(1, || "again"), "again");
    }
}
