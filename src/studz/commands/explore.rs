use crate::catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter_subjects, normalize_query};

/// The home-overlay search: categories by title substring plus the
/// school's subjects narrowed to matching documents.
pub fn run(school: &str, query: &str) -> Result<CmdResult> {
    let normalized = normalize_query(query);

    let categories: Vec<_> = catalog::categories()
        .iter()
        .filter(|c| normalized.is_empty() || c.title.to_lowercase().contains(&normalized))
        .cloned()
        .collect();

    let subjects = filter_subjects(&catalog::subjects_for_school(school), query);

    Ok(CmdResult::default()
        .with_categories(categories)
        .with_subjects(subjects))
}
