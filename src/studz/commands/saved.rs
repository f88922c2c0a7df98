//! Saved-items toggling and listing.
//!
//! Membership is decided by title equality alone. Persistence is lenient
//! in both directions: a store that cannot be read behaves as empty, a
//! write that fails is logged and dropped. The user never sees a storage
//! error; at worst a bookmark does not survive the session.

use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SavedItem;
use crate::store::SavedStore;
use tracing::warn;

/// Reads the saved list, degrading a failed read to the empty list.
pub fn load<S: SavedStore>(store: &S) -> Vec<SavedItem> {
    match store.load() {
        Ok(items) => items,
        Err(e) => {
            warn!("Error loading saved items: {}", e);
            Vec::new()
        }
    }
}

/// Pure membership check by title.
pub fn is_saved(items: &[SavedItem], title: &str) -> bool {
    items.iter().any(|item| item.title == title)
}

fn persist<S: SavedStore>(store: &mut S, items: &[SavedItem]) {
    if let Err(e) = store.save(items) {
        warn!("Error saving items: {}", e);
    }
}

/// Adds the entry if its title is absent, removes it otherwise, then
/// persists the whole list. Toggling twice restores the original set.
pub fn toggle<S: SavedStore>(
    store: &mut S,
    title: &str,
    description: &str,
    icon: &str,
) -> Result<CmdResult> {
    let mut items = load(store);
    let mut result = CmdResult::default();

    if is_saved(&items, title) {
        items.retain(|item| item.title != title);
        result.add_message(CmdMessage::info(format!(
            "{} removed from saved items",
            title
        )));
    } else {
        items.push(SavedItem::new(
            title.to_string(),
            description.to_string(),
            icon.to_string(),
        ));
        result.add_message(CmdMessage::success(format!("{} saved successfully", title)));
    }

    persist(store, &items);
    Ok(result.with_saved_items(items))
}

/// Removes the entry with the given title, if present.
pub fn remove<S: SavedStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let mut items = load(store);
    let mut result = CmdResult::default();

    if is_saved(&items, title) {
        items.retain(|item| item.title != title);
        persist(store, &items);
        result.add_message(CmdMessage::info(format!(
            "{} removed from saved items",
            title
        )));
    } else {
        result.add_message(CmdMessage::warning(format!("{} is not saved", title)));
    }

    Ok(result.with_saved_items(items))
}

pub fn list<S: SavedStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_saved_items(load(store)))
}

/// Looks a bare title up across the catalog (quiz sections, the popular
/// strip, events) so the CLI can toggle with just a name. Comparison is
/// case-insensitive; the stored title is the catalog's.
pub fn resolve_catalog_entry(title: &str) -> Option<(String, String, String)> {
    let wanted = title.to_lowercase();

    for section in catalog::quiz_sections() {
        for topic in &section.topics {
            if topic.title.to_lowercase() == wanted {
                return Some((
                    topic.title.clone(),
                    topic.description.clone(),
                    topic.icon.clone(),
                ));
            }
        }
    }

    for topic in catalog::popular_topics() {
        if topic.title.to_lowercase() == wanted {
            return Some((
                topic.title.clone(),
                topic.description.clone(),
                topic.icon.clone(),
            ));
        }
    }

    for event in catalog::events() {
        if event.title.to_lowercase() == wanted {
            return Some((
                event.title.clone(),
                event.description.clone(),
                event.kind.icon().to_string(),
            ));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudzError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    struct BrokenStore;

    impl SavedStore for BrokenStore {
        fn load(&self) -> Result<Vec<SavedItem>> {
            Err(StudzError::Store("backend unavailable".to_string()))
        }

        fn save(&mut self, _items: &[SavedItem]) -> Result<()> {
            Err(StudzError::Store("backend unavailable".to_string()))
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = InMemoryStore::new();

        let result = toggle(&mut store, "X", "d", "i").unwrap();
        assert_eq!(result.saved_items.len(), 1);
        assert!(is_saved(&result.saved_items, "X"));

        let result = toggle(&mut store, "X", "d", "i").unwrap();
        assert!(result.saved_items.is_empty());
    }

    #[test]
    fn double_toggle_restores_the_original_set() {
        let mut store = StoreFixture::new().with_saved(&["Databases"]).store;
        let before = load(&store);

        toggle(&mut store, "HTML/CSS", "d", "i").unwrap();
        toggle(&mut store, "HTML/CSS", "d", "i").unwrap();

        assert_eq!(load(&store), before);
    }

    #[test]
    fn membership_is_by_title_only() {
        let store = StoreFixture::new().with_saved(&["Databases"]).store;
        let items = load(&store);
        assert!(is_saved(&items, "Databases"));
        assert!(!is_saved(&items, "databases"));
    }

    #[test]
    fn remove_is_a_noop_for_unknown_titles() {
        let mut store = StoreFixture::new().with_saved(&["Databases"]).store;

        let result = remove(&mut store, "Nope").unwrap();
        assert_eq!(result.saved_items.len(), 1);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn unreadable_store_behaves_as_empty() {
        assert!(load(&BrokenStore).is_empty());
    }

    #[test]
    fn failed_write_still_reports_the_toggle() {
        let mut store = BrokenStore;
        let result = toggle(&mut store, "X", "d", "i").unwrap();
        assert_eq!(result.saved_items.len(), 1);
    }

    #[test]
    fn resolves_titles_across_the_catalog() {
        let (title, _, icon) = resolve_catalog_entry("databases").unwrap();
        assert_eq!(title, "Databases");
        assert_eq!(icon, "database");

        let (title, _, _) = resolve_catalog_entry("ai hackathon 2025").unwrap();
        assert_eq!(title, "AI Hackathon 2025");

        assert!(resolve_catalog_entry("Basket Weaving").is_none());
    }
}
