use crate::error::{InnovationError, Result};
use crate::store::idea_store::DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECENT_LIMIT: usize = 6;

/// Configuration for the idea tracker, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct InnovationConfig {
    /// Blob store key the idea collection is kept under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// How many ideas the stats view lists as recent
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for InnovationConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl InnovationConfig {
    pub const KEYS: [&'static str; 2] = ["storage-key", "recent-limit"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(InnovationError::Io)?;
        let config: InnovationConfig =
            serde_json::from_str(&content).map_err(InnovationError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(InnovationError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(InnovationError::Serialization)?;
        fs::write(config_path, content).map_err(InnovationError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "recent-limit" => Some(self.recent_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty()
                    || !value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                {
                    return Err(format!(
                        "storage-key must be non-empty and use only letters, digits, '-' or '_': {}",
                        value
                    ));
                }
                if value == "config" {
                    return Err("storage-key 'config' is taken by the config file".to_string());
                }
                self.storage_key = value.to_string();
                Ok(())
            }
            "recent-limit" => {
                self.recent_limit = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("recent-limit must be a whole number: {}", value))?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InnovationConfig::default();
        assert_eq!(config.storage_key, "ideas");
        assert_eq!(config.recent_limit, 6);
    }

    #[test]
    fn test_set_recent_limit() {
        let mut config = InnovationConfig::default();
        config.set("recent-limit", "3").unwrap();
        assert_eq!(config.get("recent-limit").as_deref(), Some("3"));
        assert!(config.set("recent-limit", "many").is_err());
    }

    #[test]
    fn test_set_storage_key_rejects_paths() {
        let mut config = InnovationConfig::default();
        assert!(config.set("storage-key", "../escape").is_err());
        assert!(config.set("storage-key", "config").is_err());
        config.set("storage-key", "work_ideas").unwrap();
        assert_eq!(config.storage_key, "work_ideas");
    }

    #[test]
    fn test_unknown_key() {
        let mut config = InnovationConfig::default();
        assert!(config.get("colour").is_none());
        assert!(config.set("colour", "blue").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = tempfile::tempdir().unwrap();
        let config = InnovationConfig::load(temp.path()).unwrap();
        assert_eq!(config, InnovationConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("inno");

        let mut config = InnovationConfig::default();
        config.set("recent-limit", "10").unwrap();
        config.save(&dir).unwrap();

        let loaded = InnovationConfig::load(&dir).unwrap();
        assert_eq!(loaded.recent_limit, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"recent-limit": 2}"#).unwrap();

        let loaded = InnovationConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.recent_limit, 2);
        assert_eq!(loaded.storage_key, "ideas");
    }
}
