use crate::catalog;
use crate::commands::{saved, CmdResult};
use crate::error::Result;
use crate::filter::{filter_records, filter_sections, Filter};
use crate::model::Section;
use crate::store::SavedStore;

/// The quiz-browser listing: sectioned topics (or the flat popular strip)
/// narrowed by the query and active filters, with the current saved items
/// attached so the renderer can mark bookmarks.
pub fn run<S: SavedStore>(
    store: &S,
    query: &str,
    filters: &[Filter],
    popular: bool,
) -> Result<CmdResult> {
    let sections = if popular {
        let topics = filter_records(catalog::popular_topics(), query, filters);
        if topics.is_empty() {
            Vec::new()
        } else {
            vec![Section {
                name: "Popular".to_string(),
                topics,
            }]
        }
    } else {
        filter_sections(catalog::quiz_sections(), query, filters)
    };

    Ok(CmdResult::default()
        .with_sections(sections)
        .with_saved_items(saved::load(store)))
}
