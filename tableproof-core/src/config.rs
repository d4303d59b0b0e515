//! Configuration types
//!
//! Labels and prefixes the helpers look for in fetched UI data. The standard
//! values match what the front end renders; a TOML file can replace them all.
//! When loaded from a file every field is required.

use crate::ConfigError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a TOML file to load instead of the standard labels.
pub const CONFIG_ENV: &str = "TABLEPROOF_CONFIG";

static STANDARD: Lazy<VerifyConfig> = Lazy::new(|| VerifyConfig {
    session_prefix: "session:".to_string(),
    type_label: "Type".to_string(),
    key_size_label: "Size".to_string(),
    size_labels: vec!["Total Size".to_string(), "Data Size".to_string()],
    count_labels: vec![
        "Total Count:".to_string(),
        "Total Count".to_string(),
        "Count".to_string(),
    ],
    scratchpad_action_columns: 1,
});

/// Labels and layout knobs used by the verification helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyConfig {
    /// Keys starting with this prefix are dropped by the session key filter.
    pub session_prefix: String,
    /// Field name holding the key or table type.
    pub type_label: String,
    /// Field name holding a key's size in the key-value metadata panel.
    pub key_size_label: String,
    /// Any of these field names proves a table size is shown.
    pub size_labels: Vec<String>,
    /// Any of these field names proves a row count is shown.
    pub count_labels: Vec<String>,
    /// Trailing UI-action cells on every scratchpad row.
    pub scratchpad_action_columns: usize,
}

impl VerifyConfig {
    /// The labels the front end renders out of the box.
    pub fn standard() -> &'static VerifyConfig {
        &STANDARD
    }

    /// Load from `TABLEPROOF_CONFIG` if set, otherwise clone the standard config.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path_from_env() {
            Some(path) => {
                let config = Self::from_path(&path)?;
                tracing::info!(path = %path.display(), "loaded verification config");
                Ok(config)
            }
            None => Ok(Self::standard().clone()),
        }
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML config text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: VerifyConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session_prefix",
                reason: "must not be empty".to_string(),
            });
        }
        if self.type_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "type_label",
                reason: "must not be empty".to_string(),
            });
        }
        if self.key_size_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "key_size_label",
                reason: "must not be empty".to_string(),
            });
        }
        if self.size_labels.is_empty() || self.size_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "size_labels",
                reason: "must list at least one non-empty label".to_string(),
            });
        }
        if self.count_labels.is_empty() || self.count_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "count_labels",
                reason: "must list at least one non-empty label".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV).ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_TOML: &str = r#"
session_prefix = "sess/"
type_label = "Kind"
key_size_label = "Bytes"
size_labels = ["Size"]
count_labels = ["Rows"]
scratchpad_action_columns = 2
"#;

    #[test]
    fn test_standard_config_is_valid() {
        VerifyConfig::standard().validate().unwrap();
        assert_eq!(VerifyConfig::standard().session_prefix, "session:");
        assert_eq!(VerifyConfig::standard().scratchpad_action_columns, 1);
    }

    #[test]
    fn test_from_toml_str() {
        let config = VerifyConfig::from_toml_str(FULL_TOML).unwrap();
        assert_eq!(config.session_prefix, "sess/");
        assert_eq!(config.count_labels, vec!["Rows".to_string()]);
        assert_eq!(config.scratchpad_action_columns, 2);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = VerifyConfig::from_toml_str("session_prefix = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let toml = format!("{FULL_TOML}\nextra = true\n");
        let err = VerifyConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let mut config = VerifyConfig::standard().clone();
        config.session_prefix.clear();
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "session_prefix"),
            other => panic!("Expected InvalidValue, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_label_list_rejected() {
        let mut config = VerifyConfig::standard().clone();
        config.count_labels.clear();
        match config.validate() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "count_labels"),
            other => panic!("Expected InvalidValue, got: {:?}", other),
        }
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_TOML.as_bytes()).unwrap();
        let config = VerifyConfig::from_path(file.path()).unwrap();
        assert_eq!(config.type_label, "Kind");
    }

    // Only test touching TABLEPROOF_CONFIG; keeps env mutation in one place.
    #[test]
    fn test_load_reads_env_path_or_falls_back() {
        std::env::remove_var(CONFIG_ENV);
        assert_eq!(&VerifyConfig::load().unwrap(), VerifyConfig::standard());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_TOML.as_bytes()).unwrap();
        std::env::set_var(CONFIG_ENV, file.path());
        let loaded = VerifyConfig::load();

        let dir = tempfile::tempdir().unwrap();
        std::env::set_var(CONFIG_ENV, dir.path().join("absent.toml"));
        let missing = VerifyConfig::load();
        std::env::remove_var(CONFIG_ENV);

        let loaded = loaded.unwrap();
        assert_eq!(loaded.session_prefix, "sess/");
        assert_eq!(loaded.key_size_label, "Bytes");
        assert_eq!(loaded.scratchpad_action_columns, 2);
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = VerifyConfig::from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
