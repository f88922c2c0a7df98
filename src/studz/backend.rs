//! Course-backend client and local session.
//!
//! Covers the two auth routes the app uses (`/auth/login`,
//! `/auth/register`) plus load/save of the resulting session in the config
//! dir. The wire format is camelCase to match the backend's JSON. The HTTP
//! side sits behind [`AuthApi`] so the login/signup commands are testable
//! offline.

use crate::config::StudzConfig;
use crate::error::{Result, StudzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const SESSION_FILENAME: &str = "session.json";
const REQUEST_TIMEOUT_SECONDS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub school: String,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Profile,
}

impl Session {
    /// Load the persisted session, if any.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Option<Session>> {
        let path = config_dir.as_ref().join(SESSION_FILENAME);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(StudzError::Io)?;
        let session = serde_json::from_str(&content).map_err(StudzError::Serialization)?;
        Ok(Some(session))
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StudzError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(StudzError::Serialization)?;
        fs::write(config_dir.join(SESSION_FILENAME), content).map_err(StudzError::Io)?;
        Ok(())
    }

    pub fn clear<P: AsRef<Path>>(config_dir: P) -> Result<()> {
        let path = config_dir.as_ref().join(SESSION_FILENAME);
        if path.exists() {
            fs::remove_file(path).map_err(StudzError::Io)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub school: String,
    pub class_name: String,
}

pub trait AuthApi {
    fn login(&self, email: &str, password: &str) -> Result<Session>;
    fn register(&self, registration: &Registration) -> Result<Session>;
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client for the course backend.
pub struct BackendClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl BackendClient {
    pub fn from_config(config: &StudzConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .map_err(StudzError::Http)?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }
}

impl AuthApi for BackendClient {
    fn login(&self, email: &str, password: &str) -> Result<Session> {
        let session = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&LoginRequest { email, password })
            .send()?
            .error_for_status()?
            .json()?;
        Ok(session)
    }

    fn register(&self, registration: &Registration) -> Result<Session> {
        let session = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(registration)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            school: "school_a".to_string(),
            class_name: "CS-101".to_string(),
        }
    }

    #[test]
    fn profile_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(profile()).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn session_roundtrips_through_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session {
            token: "tok-123".to_string(),
            user: profile(),
        };

        session.save(dir.path()).unwrap();
        let loaded = Session::load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded, session);

        Session::clear(dir.path()).unwrap();
        assert!(Session::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn missing_session_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Session::load(dir.path()).unwrap().is_none());
    }
}
