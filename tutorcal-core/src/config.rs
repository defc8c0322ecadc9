//! Global tutorcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{TutorCalError, TutorCalResult};
use crate::filter::CategoryFilter;

static DEFAULT_RECORDS_PATH: &str = "~/tutorcal/records.json";

fn default_records_path() -> PathBuf {
    PathBuf::from(DEFAULT_RECORDS_PATH)
}

fn is_default_records_path(p: &PathBuf) -> bool {
    *p == default_records_path()
}

/// Global configuration at ~/.config/tutorcal/config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorCalConfig {
    /// JSON export of the record store
    #[serde(default = "default_records_path", skip_serializing_if = "is_default_records_path")]
    pub records_path: PathBuf,

    /// Categories shown when no flag overrides them
    #[serde(default)]
    pub filters: CategoryFilter,
}

impl Default for TutorCalConfig {
    fn default() -> Self {
        TutorCalConfig {
            records_path: default_records_path(),
            filters: CategoryFilter::default(),
        }
    }
}

impl TutorCalConfig {
    pub fn config_path() -> TutorCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TutorCalError::Config("Could not determine config directory".into()))?
            .join("tutorcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> TutorCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> TutorCalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| TutorCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TutorCalError::Config(e.to_string()))
    }

    /// Records path with `~` expanded.
    pub fn records_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.records_path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TutorCalResult<()> {
        let contents = format!(
            "\
# tutorcal configuration

# JSON export of sessions, students and enrollments:
# records_path = \"{}\"

# Categories shown by default:
# [filters]
# sessions = true
# birthdays = true
",
            DEFAULT_RECORDS_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TutorCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| TutorCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_default_config_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tutorcal").join("config.toml");

        TutorCalConfig::create_default_config(&path).unwrap();
        let config = TutorCalConfig::load_from(&path).unwrap();

        assert_eq!(config, TutorCalConfig::default());
    }

    #[test]
    fn test_partial_filter_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "records_path = \"/srv/records.json\"\n\n[filters]\nbirthdays = false\n",
        )
        .unwrap();

        let config = TutorCalConfig::load_from(&path).unwrap();

        assert_eq!(config.records_path(), PathBuf::from("/srv/records.json"));
        assert!(config.filters.sessions);
        assert!(!config.filters.birthdays);
    }

    #[test]
    fn test_default_path_is_not_serialized() {
        let content = toml::to_string_pretty(&TutorCalConfig::default()).unwrap();
        assert!(!content.contains("records_path"));
        assert!(content.contains("[filters]"));
    }
}
