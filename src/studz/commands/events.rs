use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{filter_records, Filter};
use chrono::NaiveDate;

/// The events-browser listing. The optional exact-date filter runs first
/// (the calendar selection), then query and structured filters as usual.
pub fn run(query: &str, filters: &[Filter], date: Option<NaiveDate>) -> Result<CmdResult> {
    let events: Vec<_> = match date {
        Some(day) => catalog::events()
            .iter()
            .filter(|e| e.date == day)
            .cloned()
            .collect(),
        None => catalog::events().to_vec(),
    };

    let events = filter_records(&events, query, filters);

    let mut result = CmdResult::default();
    if events.is_empty() {
        result.add_message(CmdMessage::info(
            "No events found. Try different search terms or filters.",
        ));
    }
    Ok(result.with_events(events))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_events_by_default() {
        let result = run("", &[], None).unwrap();
        assert_eq!(result.events.len(), 7);
    }

    #[test]
    fn kind_filter_selects_matching_events() {
        let filters = vec![Filter::Kind("Training".to_string())];
        let result = run("", &filters, None).unwrap();
        assert_eq!(result.events.len(), 2);
        assert!(result.events.iter().all(|e| e.kind.label() == "Training"));
    }

    #[test]
    fn query_and_kind_apply_conjunctively() {
        let filters = vec![Filter::Kind("Training".to_string())];
        let result = run("mobile", &filters, None).unwrap();
        assert_eq!(result.events.len(), 1);
        assert_eq!(result.events[0].title, "Mobile App Development Seminar");
    }

    #[test]
    fn date_filter_is_exact() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let result = run("", &[], Some(day)).unwrap();
        assert_eq!(result.events.len(), 1);
        assert_eq!(result.events[0].title, "AI Hackathon 2025");
    }

    #[test]
    fn empty_outcome_carries_the_no_results_message() {
        let result = run("zzz", &[], None).unwrap();
        assert!(result.events.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn tag_filter_matches_stored_tags() {
        let filters = vec![Filter::Tag("career".to_string())];
        let result = run("", &filters, None).unwrap();
        assert_eq!(result.events.len(), 2);
    }
}
