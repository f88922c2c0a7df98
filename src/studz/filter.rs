//! Catalog filtering.
//!
//! The home search, the quiz browser, and the events browser all narrow a
//! record list the same way: normalize a free-text query, test each record
//! for substring containment, then apply the active structured filters
//! conjunctively. This module is the single implementation all three share,
//! expressed as pure functions over a [`Filterable`] record.
//!
//! Output always preserves the input ordering; there is no relevance
//! ranking. Results are recomputed in full on every call.

use crate::model::{Difficulty, Event, Section, Subject, Topic};

/// Anything the catalog filter can match against.
///
/// `difficulty` and `kind` default to `None` for record types that don't
/// carry them; see [`Filter::matches`] for how absent attributes behave.
pub trait Filterable {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn tags(&self) -> &[String];

    fn difficulty(&self) -> Option<Difficulty> {
        None
    }

    fn kind(&self) -> Option<&str> {
        None
    }
}

impl Filterable for Topic {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }
}

impl Filterable for Event {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind.label())
    }
}

/// A structured predicate narrowing a record set.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Record's tag list contains this tag, compared as stored.
    Tag(String),
    /// Record's difficulty equals this tier exactly.
    Level(Difficulty),
    /// Record's kind label equals this value. Records without a kind
    /// (topics, subjects) pass unconditionally: a filter a record type
    /// does not understand never excludes it.
    Kind(String),
}

impl Filter {
    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        match self {
            Filter::Tag(tag) => record.tags().iter().any(|t| t == tag),
            Filter::Level(level) => record.difficulty() == Some(*level),
            Filter::Kind(kind) => match record.kind() {
                Some(k) => k == kind,
                None => true,
            },
        }
    }
}

/// The active filters, ordered, with set semantics: toggling an active
/// filter removes it, toggling an inactive one appends it.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, filter: Filter) {
        match self.filters.iter().position(|f| *f == filter) {
            Some(pos) => {
                self.filters.remove(pos);
            }
            None => self.filters.push(filter),
        }
    }

    pub fn is_active(&self, filter: &Filter) -> bool {
        self.filters.contains(filter)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn as_slice(&self) -> &[Filter] {
        &self.filters
    }
}

/// Trims and lower-cases a raw query. An empty result matches everything.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when the (already normalized) query is a substring of the record's
/// lower-cased title, description, or any lower-cased tag.
fn matches_query<R: Filterable>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.title().to_lowercase().contains(query)
        || record.description().to_lowercase().contains(query)
        || record.tags().iter().any(|t| t.to_lowercase().contains(query))
}

fn record_matches<R: Filterable>(record: &R, query: &str, filters: &[Filter]) -> bool {
    matches_query(record, query) && filters.iter().all(|f| f.matches(record))
}

/// Returns the records matching the query and every active filter, in
/// their original order. An empty query and empty filter set is the
/// identity.
pub fn filter_records<R: Filterable + Clone>(
    records: &[R],
    query: &str,
    filters: &[Filter],
) -> Vec<R> {
    let query = normalize_query(query);
    records
        .iter()
        .filter(|r| record_matches(*r, &query, filters))
        .cloned()
        .collect()
}

/// Grouped variant: filters each section's topics independently and drops
/// sections left with no matches.
pub fn filter_sections(sections: &[Section], query: &str, filters: &[Filter]) -> Vec<Section> {
    let query = normalize_query(query);
    sections
        .iter()
        .filter_map(|section| {
            let topics: Vec<_> = section
                .topics
                .iter()
                .filter(|t| record_matches(*t, &query, filters))
                .cloned()
                .collect();
            if topics.is_empty() {
                None
            } else {
                Some(Section {
                    name: section.name.clone(),
                    topics,
                })
            }
        })
        .collect()
}

/// Subject/document variant used by the home search and the subject
/// browser: a subject whose title matches keeps its full document list;
/// otherwise it is kept only if some document matches, narrowed to the
/// matching documents.
pub fn filter_subjects(subjects: &[Subject], query: &str) -> Vec<Subject> {
    let query = normalize_query(query);
    if query.is_empty() {
        return subjects.to_vec();
    }
    subjects
        .iter()
        .filter_map(|subject| {
            let title_match = subject.title.to_lowercase().contains(&query);
            let documents: Vec<_> = subject
                .documents
                .iter()
                .filter(|d| d.to_lowercase().contains(&query))
                .cloned()
                .collect();
            if title_match {
                Some(subject.clone())
            } else if !documents.is_empty() {
                Some(Subject {
                    title: subject.title.clone(),
                    documents,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(title: &str, tags: &[&str], difficulty: Option<Difficulty>) -> Topic {
        Topic {
            title: title.to_string(),
            description: format!("About {}.", title),
            icon: "book".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            difficulty,
            quiz_count: None,
            featured: false,
            is_new: false,
        }
    }

    fn sample() -> Vec<Topic> {
        vec![
            topic("Databases", &["data", "sql"], Some(Difficulty::Advanced)),
            topic("HTML/CSS", &["web"], Some(Difficulty::Beginner)),
        ]
    }

    #[test]
    fn empty_query_and_filters_is_identity() {
        let records = sample();
        assert_eq!(filter_records(&records, "", &[]), records);
        assert_eq!(filter_records(&records, "   ", &[]), records);
    }

    #[test]
    fn query_matches_title() {
        let result = filter_records(&sample(), "data", &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Databases");
    }

    #[test]
    fn query_matches_description_and_tags() {
        let records = vec![
            topic("Frontend", &[], None),
            topic("Backend", &["sql"], None),
        ];
        // "frontend" hits the first description, "sql" the second's tag.
        assert_eq!(filter_records(&records, "About Frontend", &[]).len(), 1);
        assert_eq!(filter_records(&records, "SQL", &[])[0].title, "Backend");
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let result = filter_records(&sample(), "  DataBases  ", &[]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn tag_filter_requires_exact_stored_tag() {
        let filters = vec![Filter::Tag("web".to_string())];
        let result = filter_records(&sample(), "", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "HTML/CSS");

        // Tags compare as stored: no case folding, no substrings.
        assert!(filter_records(&sample(), "", &[Filter::Tag("Web".into())]).is_empty());
        assert!(filter_records(&sample(), "", &[Filter::Tag("we".into())]).is_empty());
    }

    #[test]
    fn level_filter_is_exact_and_fails_without_difficulty() {
        let mut records = sample();
        records.push(topic("Untiered", &[], None));

        let filters = vec![Filter::Level(Difficulty::Advanced)];
        let result = filter_records(&records, "", &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Databases");
    }

    #[test]
    fn kind_filter_passes_records_without_a_kind() {
        // Topics carry no kind, so a kind filter never excludes them.
        let filters = vec![Filter::Kind("Hackathon".to_string())];
        assert_eq!(filter_records(&sample(), "", &filters), sample());
    }

    #[test]
    fn filters_apply_conjunctively() {
        let filters = vec![
            Filter::Tag("data".to_string()),
            Filter::Level(Difficulty::Beginner),
        ];
        assert!(filter_records(&sample(), "", &filters).is_empty());
    }

    #[test]
    fn query_only_narrows() {
        let records = sample();
        let filters = vec![Filter::Tag("data".to_string())];
        let wide = filter_records(&records, "", &filters);
        let narrow = filter_records(&records, "sql", &filters);
        assert!(narrow.iter().all(|r| wide.contains(r)));
    }

    #[test]
    fn order_is_preserved() {
        let records = vec![
            topic("C data", &[], None),
            topic("A data", &[], None),
            topic("B data", &[], None),
        ];
        let titles: Vec<_> = filter_records(&records, "data", &[])
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["C data", "A data", "B data"]);
    }

    #[test]
    fn empty_records_yield_empty_result() {
        let records: Vec<Topic> = Vec::new();
        assert!(filter_records(&records, "anything", &[]).is_empty());
    }

    #[test]
    fn sections_with_no_matches_are_dropped() {
        let sections = vec![
            Section {
                name: "Computer Science".to_string(),
                topics: vec![topic("Databases", &["data"], None)],
            },
            Section {
                name: "Web Development".to_string(),
                topics: vec![topic("HTML/CSS", &["web"], None)],
            },
        ];

        let result = filter_sections(&sections, "data", &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Computer Science");
        assert_eq!(result[0].topics.len(), 1);
    }

    #[test]
    fn sections_pass_through_unfiltered() {
        let sections = vec![Section {
            name: "Computer Science".to_string(),
            topics: vec![topic("Databases", &[], None), topic("Algorithms", &[], None)],
        }];
        assert_eq!(filter_sections(&sections, "", &[]), sections);
    }

    #[test]
    fn subject_title_match_keeps_all_documents() {
        let subjects = vec![Subject {
            title: "Databases".to_string(),
            documents: vec!["SQL Basics.pdf".to_string(), "ER Diagrams.pptx".to_string()],
        }];
        let result = filter_subjects(&subjects, "datab");
        assert_eq!(result[0].documents.len(), 2);
    }

    #[test]
    fn subject_document_match_narrows_documents() {
        let subjects = vec![
            Subject {
                title: "Databases".to_string(),
                documents: vec!["SQL Basics.pdf".to_string(), "ER Diagrams.pptx".to_string()],
            },
            Subject {
                title: "Networking".to_string(),
                documents: vec!["TCP/IP.pptx".to_string()],
            },
        ];
        let result = filter_subjects(&subjects, "sql");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].documents, vec!["SQL Basics.pdf".to_string()]);
    }

    #[test]
    fn filter_set_toggles_with_set_semantics() {
        let mut set = FilterSet::new();
        let web = Filter::Tag("web".to_string());

        set.toggle(web.clone());
        assert!(set.is_active(&web));

        set.toggle(Filter::Level(Difficulty::Beginner));
        assert_eq!(set.as_slice().len(), 2);

        // Toggling again removes, preserving the rest.
        set.toggle(web.clone());
        assert!(!set.is_active(&web));
        assert_eq!(set.as_slice(), &[Filter::Level(Difficulty::Beginner)]);
    }
}
