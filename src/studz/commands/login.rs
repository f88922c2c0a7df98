use crate::backend::{AuthApi, Registration};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::path::Path;
use tracing::error;

const LOGIN_FAILED: &str = "Login failed. Please check your credentials and try again.";
const SIGNUP_FAILED: &str = "Sign up failed. Please try again.";

/// Credential sign-in. On success the session is persisted to the config
/// dir; on failure the underlying error is logged and the user sees only
/// a generic message.
pub fn run<A: AuthApi>(
    client: &A,
    config_dir: &Path,
    email: &str,
    password: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match client.login(email, password) {
        Ok(session) => {
            session.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "Signed in as {} {}",
                session.user.first_name, session.user.last_name
            )));
            Ok(result.with_session(session))
        }
        Err(e) => {
            error!("Login error: {}", e);
            result.add_message(CmdMessage::error(LOGIN_FAILED));
            Ok(result)
        }
    }
}

/// Account registration, same persistence and failure shape as login.
pub fn signup<A: AuthApi>(
    client: &A,
    config_dir: &Path,
    registration: &Registration,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match client.register(registration) {
        Ok(session) => {
            session.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "Welcome, {}! Your account is ready.",
                session.user.first_name
            )));
            Ok(result.with_session(session))
        }
        Err(e) => {
            error!("Registration error: {}", e);
            result.add_message(CmdMessage::error(SIGNUP_FAILED));
            Ok(result)
        }
    }
}
