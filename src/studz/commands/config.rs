use crate::commands::{CmdMessage, CmdResult, StudzPaths};
use crate::config::StudzConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StudzPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config;
    match action {
        ConfigAction::ShowAll => {
            let config = StudzConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StudzConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = StudzConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let mut result = CmdResult::default().with_config(config.clone());
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths(dir: &std::path::Path) -> StudzPaths {
        StudzPaths {
            config: dir.to_path_buf(),
            data: PathBuf::from("/unused"),
            cache: PathBuf::from("/unused"),
        }
    }

    #[test]
    fn set_then_show_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());

        run(
            &paths,
            ConfigAction::Set("assistant-model".into(), "gpt-4o".into()),
        )
        .unwrap();

        let result = run(&paths, ConfigAction::ShowKey("assistant-model".into())).unwrap();
        assert_eq!(result.messages[0].content, "gpt-4o");
    }

    #[test]
    fn unknown_keys_are_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());

        let result = run(&paths, ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));

        let result = run(&paths, ConfigAction::Set("nope".into(), "x".into())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }

    #[test]
    fn show_all_returns_the_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(dir.path()), ConfigAction::ShowAll).unwrap();
        assert!(result.config.is_some());
    }
}
