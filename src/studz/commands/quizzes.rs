use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Quizzes for a single topic. Unknown topics are not an error: the
/// listing is empty and carries the empty-state message.
pub fn run(topic: &str) -> Result<CmdResult> {
    let quizzes = catalog::quizzes_for_topic(topic);

    let mut result = CmdResult::default();
    if quizzes.is_empty() {
        result.add_message(CmdMessage::info(
            "No quizzes available for this topic yet",
        ));
    }
    Ok(result.with_quizzes(quizzes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn lists_quizzes_for_a_known_topic() {
        let result = run("Programming").unwrap();
        assert_eq!(result.quizzes.len(), 3);
        assert_eq!(result.quizzes[0].title, "JavaScript Fundamentals");
        assert_eq!(result.quizzes[0].difficulty, Difficulty::Beginner);
    }

    #[test]
    fn unknown_topic_yields_the_empty_state() {
        let result = run("Basket Weaving").unwrap();
        assert!(result.quizzes.is_empty());
        assert_eq!(
            result.messages[0].content,
            "No quizzes available for this topic yet"
        );
    }
}
