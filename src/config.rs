//! Configuration file support for regionmark.
//!
//! Editor preferences and keybindings are stored as versioned JSON. Every
//! field has a default so older or partial files still load.

use std::path::Path;

use regionmark_ui::{Key, Point, Rectangle, Size};
use serde::{Deserialize, Serialize};

use crate::constants::{
    BACKGROUND_ORIGIN, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FRAME_RATE,
    DUPLICATE_OFFSET, NUDGE_STEP,
};
use crate::keybindings::{EditorAction, KeyBindings};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Editor configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: EditorPreferences,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    /// Log verbosity level
    pub log_level: LogLevel,

    /// Distance moved by one nudge key press
    pub nudge_step: f32,

    /// Offset applied to duplicated regions
    pub duplicate_offset: [f32; 2],

    /// Canvas size cleared each frame
    pub canvas_size: Size,

    /// Top-left corner of the background image
    pub background_origin: Point,

    /// Target render rate in frames per second
    pub frame_rate: u32,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            nudge_step: NUDGE_STEP,
            duplicate_offset: [DUPLICATE_OFFSET.0, DUPLICATE_OFFSET.1],
            canvas_size: Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            background_origin: Point::new(BACKGROUND_ORIGIN.0, BACKGROUND_ORIGIN.1),
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl EditorPreferences {
    /// The canvas area cleared at the start of every frame.
    pub fn canvas_rect(&self) -> Rectangle {
        Rectangle::from_size(self.canvas_size)
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: EditorPreferences::default(),
            keybindings: KeyBindings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        if let Some((key, first, second)) = config.keybindings.find_conflict() {
            return Err(ConfigError::DuplicateBinding {
                key,
                first,
                second,
            });
        }

        Ok(config)
    }

    /// Get the default filename for config files.
    pub fn default_filename() -> &'static str {
        "regionmark-config.json"
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Two actions share one key
    #[error("Key '{}' is bound to both '{}' and '{}'", .key.name(), .first.name(), .second.name())]
    DuplicateBinding {
        key: Key,
        first: EditorAction,
        second: EditorAction,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrip() {
        let config = EditorConfig::new();
        let json = config.to_json().expect("serialize");
        let parsed = EditorConfig::from_json(&json).expect("parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed =
            EditorConfig::from_json(r#"{"version": 1, "preferences": {"nudge_step": 5.0}}"#)
                .expect("parse");
        assert_eq!(parsed.preferences.nudge_step, 5.0);
        assert_eq!(parsed.preferences.duplicate_offset, [20.0, 20.0]);
        assert_eq!(parsed.preferences.log_level, LogLevel::Info);
        assert_eq!(parsed.keybindings, KeyBindings::default());
    }

    #[test]
    fn test_rejects_newer_version() {
        let err = EditorConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_overlapping_bindings() {
        let json = r#"{"version": 1, "keybindings": {"duplicate": {"char": "x"}}}"#;
        let err = EditorConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateBinding { .. }));
        assert!(err.to_string().contains("Delete region"));
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
        let level: LogLevel = serde_json::from_str("\"trace\"").expect("parse");
        assert_eq!(level, LogLevel::Trace);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("regionmark-config-{}", std::process::id()));
        let path = dir.join(EditorConfig::default_filename());

        let mut config = EditorConfig::new();
        config.preferences.log_level = LogLevel::Debug;
        config.save(&path).expect("save");

        let loaded = EditorConfig::load(&path).expect("load");
        assert_eq!(loaded.preferences.log_level, LogLevel::Debug);

        std::fs::remove_dir_all(&dir).ok();
    }
}
