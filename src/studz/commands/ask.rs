use crate::assistant::{CompletionApi, SYSTEM_PROMPT};
use crate::commands::CmdResult;
use crate::error::Result;
use tracing::warn;

/// Reply shown whenever the assistant call fails, whatever the cause.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong!";

/// One-shot assistant question. Transport and API failures are logged and
/// turned into the fixed fallback reply; they never abort the command.
/// Blank input is a no-op.
pub fn run<C: CompletionApi>(client: &C, message: &str) -> Result<CmdResult> {
    let message = message.trim();
    if message.is_empty() {
        return Ok(CmdResult::default());
    }

    let reply = match client.complete(SYSTEM_PROMPT, message) {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Error: {}", e);
            FALLBACK_REPLY.to_string()
        }
    };

    Ok(CmdResult::default().with_reply(reply))
}
