use std::fmt;

// === SettingsError ===

/// Errors related to loading, saving and updating tracker settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Reading or writing the config file failed.
    IoError(String),
    /// The config file could not be parsed or serialized.
    SerializationError(String),
    /// The requested settings key does not exist.
    InvalidKey(String),
    /// The value does not fit the type of the targeted key.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}
