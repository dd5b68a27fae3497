// TabJump Settings Engine
// Loads, saves and updates tracker settings.
// Settings are stored as a JSON file at the platform-specific config path.
// Writes go through a sibling `.tmp` file and a rename, so readers never see
// a half-written file. Reset deletes the file instead of writing defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::TrackerSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<TrackerSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &TrackerSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: TrackerSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: TrackerSettings::default(),
        }
    }
}

/// `settings.json` -> `settings.json.tmp`, in the same directory so the
/// rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing or blank file yields defaults. A malformed file is a
    /// serialization error; out-of-range values are an invalid-value error.
    fn load(&mut self) -> Result<TrackerSettings, SettingsError> {
        let content = match fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(SettingsError::IoError(format!(
                    "Failed to read config file: {}",
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            debug!(path = %self.config_path, "no settings file, using defaults");
            self.settings = TrackerSettings::default();
            return Ok(self.settings.clone());
        }

        let settings: TrackerSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        settings.validate()?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings atomically, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        let tmp_path = temp_path_for(path);
        fs::write(&tmp_path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;
        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            SettingsError::IoError(format!("Failed to replace config file: {}", e))
        })?;

        Ok(())
    }

    fn get_settings(&self) -> &TrackerSettings {
        &self.settings
    }

    /// Updates a single top-level setting and saves to disk.
    ///
    /// The value is type-checked by deserializing the updated settings, then
    /// range-checked; a rejected value leaves the current settings untouched.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        match json_value.as_object_mut() {
            Some(map) if map.contains_key(key) => {
                map.insert(key.to_string(), value);
            }
            _ => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    key
                )));
            }
        }

        let new_settings: TrackerSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        new_settings.validate()?;

        self.settings = new_settings;
        self.save()?;
        debug!(key, "updated setting");

        Ok(())
    }

    /// Restores defaults by deleting the config file; a later `load` then
    /// picks up whatever the defaults are at that time.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = TrackerSettings::default();
        match fs::remove_file(&self.config_path) {
            Ok(()) => {
                info!(path = %self.config_path, "settings reset to defaults");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SettingsError::IoError(format!(
                "Failed to remove config file: {}",
                e
            ))),
        }
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
