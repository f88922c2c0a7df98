use crate::backend::Profile;
use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Overall progress shown on the home overview.
pub const OVERALL_PROGRESS: f32 = 0.76;

/// The home overview: greeting, class line, and the category tiles with
/// their progress. Works without a session; the greeting just stays
/// generic.
pub fn run(profile: Option<&Profile>) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match profile {
        Some(p) => {
            result.add_message(CmdMessage::info(format!(
                "Hello {} {}",
                p.first_name, p.last_name
            )));
            if !p.class_name.is_empty() {
                result.add_message(CmdMessage::info(p.class_name.clone()));
            }
        }
        None => result.add_message(CmdMessage::info("Hello User")),
    }

    Ok(result.with_categories(catalog::categories().to_vec()))
}
