use std::fmt;

// === TabError ===

/// Errors related to tab host operations.
#[derive(Debug, PartialEq)]
pub enum TabError {
    /// The provided tab index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
        }
    }
}

impl std::error::Error for TabError {}

// === SettingsError ===

/// Errors related to loading and saving shell settings.
#[derive(Debug)]
pub enum SettingsError {
    /// File system I/O error.
    IoError(String),
    /// Settings could not be serialized or parsed.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
