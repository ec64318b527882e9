use std::sync::{Arc, RwLock};

/// Process-wide slot for the published context blob.
///
/// Exactly one writer (the refresher) and any number of readers. Updates
/// replace the whole value, so a reader can observe a stale snapshot but
/// never a torn one.
#[derive(Clone, Debug)]
pub struct ContextStore {
    inner: Arc<RwLock<Arc<str>>>,
}

impl ContextStore {
    /// A new store holding the empty string until the first publish.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::from(""))),
        }
    }

    /// Replace the published context.
    pub fn publish(&self, context: String) {
        let mut slot = self.inner.write().expect("context lock poisoned");
        *slot = context.into();
    }

    /// Immutable snapshot of the last published context.
    pub fn snapshot(&self) -> Arc<str> {
        self.inner.read().expect("context lock poisoned").clone()
    }
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = ContextStore::new();
        assert_eq!(&*store.snapshot(), "");
    }

    #[test]
    fn test_publish_replaces_whole_value() {
        let store = ContextStore::new();
        store.publish("first".to_string());

        let before = store.snapshot();
        store.publish("second".to_string());

        // Old snapshots stay valid; new readers see the replacement.
        assert_eq!(&*before, "first");
        assert_eq!(&*store.snapshot(), "second");
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = ContextStore::new();
        let reader = store.clone();
        store.publish("shared".to_string());
        assert_eq!(&*reader.snapshot(), "shared");
    }
}
