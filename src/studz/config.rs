use crate::error::{Result, StudzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_ASSISTANT_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_ASSISTANT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_ASSISTANT_KEY_ENV: &str = "STUDZ_ASSISTANT_KEY";

/// Configuration for studz, stored in the config dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudzConfig {
    /// Base URL of the course backend (auth routes live under /auth)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Chat-completions endpoint for the assistant
    #[serde(default = "default_assistant_url")]
    pub assistant_url: String,

    /// Model requested from the assistant endpoint
    #[serde(default = "default_assistant_model")]
    pub assistant_model: String,

    /// Name of the environment variable holding the assistant API key
    #[serde(default = "default_assistant_key_env")]
    pub assistant_key_env: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_assistant_url() -> String {
    DEFAULT_ASSISTANT_URL.to_string()
}

fn default_assistant_model() -> String {
    DEFAULT_ASSISTANT_MODEL.to_string()
}

fn default_assistant_key_env() -> String {
    DEFAULT_ASSISTANT_KEY_ENV.to_string()
}

impl Default for StudzConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            assistant_url: default_assistant_url(),
            assistant_model: default_assistant_model(),
            assistant_key_env: default_assistant_key_env(),
        }
    }
}

impl StudzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StudzError::Io)?;
        let config: StudzConfig =
            serde_json::from_str(&content).map_err(StudzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StudzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StudzError::Serialization)?;
        fs::write(config_path, content).map_err(StudzError::Io)?;
        Ok(())
    }

    /// Get a config value by key name, as displayed by the config command
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-url" => Some(self.api_url.clone()),
            "assistant-url" => Some(self.assistant_url.clone()),
            "assistant-model" => Some(self.assistant_model.clone()),
            "assistant-key-env" => Some(self.assistant_key_env.clone()),
            _ => None,
        }
    }

    /// Set a config value by key name
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "api-url" => self.api_url = value.to_string(),
            "assistant-url" => self.assistant_url = value.to_string(),
            "assistant-model" => self.assistant_model = value.to_string(),
            "assistant-key-env" => self.assistant_key_env = value.to_string(),
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    /// All keys in display order, for the show-all listing
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api-url", self.api_url.clone()),
            ("assistant-url", self.assistant_url.clone()),
            ("assistant-model", self.assistant_model.clone()),
            ("assistant-key-env", self.assistant_key_env.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudzConfig::default();
        assert_eq!(config.assistant_model, "gpt-4o-mini");
        assert_eq!(config.api_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = StudzConfig::default();
        config.set("assistant-model", "gpt-4o").unwrap();
        assert_eq!(config.get("assistant-model").unwrap(), "gpt-4o");

        assert!(config.set("not-a-key", "x").is_err());
        assert!(config.get("not-a-key").is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = StudzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, StudzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = StudzConfig::default();
        config.set("api-url", "https://example.edu/api").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = StudzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.api_url, "https://example.edu/api");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = StudzConfig {
            assistant_model: "gpt-4.1".to_string(),
            ..StudzConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: StudzConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
