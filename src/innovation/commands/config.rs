use crate::commands::{CmdMessage, CmdResult};
use crate::config::InnovationConfig;
use crate::error::{InnovationError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Show or change settings in `<config_dir>/config.json`.
///
/// Unknown keys and unacceptable values are `Validation` errors; nothing is
/// written in that case.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = InnovationConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            result.add_message(CmdMessage::info(value));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value).map_err(InnovationError::Validation)?;
            config.save(config_dir)?;
            let stored = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
        }
    }

    Ok(result.with_config(config))
}

fn unknown_key(key: &str) -> InnovationError {
    InnovationError::Validation(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        InnovationConfig::KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_show_key() {
        let temp = tempfile::tempdir().unwrap();
        run(
            temp.path(),
            ConfigAction::Set("recent-limit".into(), "4".into()),
        )
        .unwrap();

        let result = run(temp.path(), ConfigAction::ShowKey("recent-limit".into())).unwrap();
        assert_eq!(result.messages[0].content, "4");
    }

    #[test]
    fn show_all_carries_config() {
        let temp = tempfile::tempdir().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(result.config, Some(InnovationConfig::default()));
    }

    #[test]
    fn invalid_value_is_an_error_and_keeps_file() {
        let temp = tempfile::tempdir().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("recent-limit".into(), "lots".into()),
        );

        assert!(matches!(result, Err(InnovationError::Validation(_))));
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let shown = run(temp.path(), ConfigAction::ShowKey("colour".into()));
        assert!(matches!(shown, Err(InnovationError::Validation(_))));

        let set = run(
            temp.path(),
            ConfigAction::Set("colour".into(), "blue".into()),
        );
        assert!(matches!(set, Err(InnovationError::Validation(_))));
    }
}
