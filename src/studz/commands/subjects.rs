use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::filter_subjects;

/// The subject/document browser for a school. An unknown or missing
/// school code degrades to an empty listing with an informational
/// message, mirroring how screens tolerate absent navigation params.
pub fn run(school: &str, query: &str) -> Result<CmdResult> {
    let all = catalog::subjects_for_school(school);

    let mut result = CmdResult::default();
    if all.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No subjects available for school '{}'. Sign in or pass --school.",
            school
        )));
        return Ok(result);
    }

    let subjects = filter_subjects(&all, query);
    if subjects.is_empty() {
        result.add_message(CmdMessage::info("No documents found."));
    }
    Ok(result.with_subjects(subjects))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_a_schools_subjects() {
        let result = run("school_b", "").unwrap();
        assert_eq!(result.subjects.len(), 2);
    }

    #[test]
    fn query_narrows_documents_within_subjects() {
        let result = run("school_a", "tcp").unwrap();
        assert_eq!(result.subjects.len(), 1);
        assert_eq!(result.subjects[0].title, "Networking");
        assert_eq!(result.subjects[0].documents, vec!["TCP/IP.pptx"]);
    }

    #[test]
    fn unknown_school_degrades_to_empty_with_a_hint() {
        let result = run("school_z", "").unwrap();
        assert!(result.subjects.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn unmatched_query_reports_no_documents() {
        let result = run("school_a", "zzz").unwrap();
        assert!(result.subjects.is_empty());
        assert_eq!(result.messages[0].content, "No documents found.");
    }
}
