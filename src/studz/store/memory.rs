use super::SavedStore;
use crate::error::Result;
use crate::model::SavedItem;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: Vec<SavedItem>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SavedStore for InMemoryStore {
    fn load(&self) -> Result<Vec<SavedItem>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[SavedItem]) -> Result<()> {
        self.items = items.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_saved(mut self, titles: &[&str]) -> Self {
            let items: Vec<SavedItem> = titles
                .iter()
                .map(|t| {
                    SavedItem::new(
                        t.to_string(),
                        format!("Description for {}", t),
                        "book".to_string(),
                    )
                })
                .collect();
            self.store.save(&items).unwrap();
            self
        }
    }
}
