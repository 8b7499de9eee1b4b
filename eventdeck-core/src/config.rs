//! eventdeck configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventDeckError, EventDeckResult};
use crate::store::CapacityPolicy;

static DEFAULT_DATA_DIR: &str = "~/.local/share/eventdeck";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_interactive() -> bool {
    true
}

/// Configuration at ~/.config/eventdeck/config.toml
///
/// Any key can be overridden with an `EVENTDECK_` environment variable,
/// e.g. `EVENTDECK_NOTIFY_COMMAND=my-bus-bridge`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeckConfig {
    /// Where the event snapshot is stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Executable that forwards RSVP notifications to the host bus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_command: Option<String>,

    #[serde(default)]
    pub capacity_policy: CapacityPolicy,

    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Prompt for choices that were not given on the command line
    #[serde(default = "default_interactive")]
    pub interactive: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            data_dir: default_data_dir(),
            notify_command: None,
            capacity_policy: CapacityPolicy::default(),
            log_level: default_log_level(),
            interactive: default_interactive(),
        }
    }
}

impl DeckConfig {
    pub fn config_path() -> EventDeckResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDeckError::Config("Could not determine config directory".into()))?
            .join("eventdeck");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (creating a commented-out one on first run)
    /// and apply environment overrides.
    pub fn load() -> EventDeckResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EventDeckResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("EVENTDECK").try_parsing(true))
            .build()
            .map_err(|e| EventDeckError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDeckError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The effective configuration, as TOML.
    pub fn to_toml(&self) -> EventDeckResult<String> {
        toml::to_string_pretty(self).map_err(|e| EventDeckError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventDeckResult<()> {
        let contents = format!(
            "\
# eventdeck configuration

# Where the event snapshot is stored:
# data_dir = \"{}\"

# Executable that receives RSVP notifications as JSON on stdin:
# notify_command = \"host-bus-bridge\"

# Refuse new sign-ups for full events (\"enforce\") or only
# keep attendee counts from going negative (\"floor_only\"):
# capacity_policy = \"enforce\"

# Log level used when RUST_LOG is not set:
# log_level = \"{}\"

# Ask interactively for missing choices:
# interactive = true
",
            DEFAULT_DATA_DIR, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventDeckError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventDeckError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_default_config_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        DeckConfig::create_default_config(&path).unwrap();

        let config = DeckConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.capacity_policy, CapacityPolicy::Enforce);
        assert_eq!(config.log_level, "warn");
        assert!(config.notify_command.is_none());
        assert!(config.interactive);
    }

    #[test]
    fn reads_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/deck\"\ncapacity_policy = \"floor_only\"\nnotify_command = \"bus-bridge\"\n",
        )
        .unwrap();

        let config = DeckConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/deck"));
        assert_eq!(config.capacity_policy, CapacityPolicy::FloorOnly);
        assert_eq!(config.notify_command.as_deref(), Some("bus-bridge"));

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("capacity_policy = \"floor_only\""));
    }
}
