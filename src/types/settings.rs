use serde::{Deserialize, Serialize};

use crate::services::address::DEFAULT_ADDRESS;

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    pub window: WindowSettings,
    /// Address opened when a tab is created without one.
    pub default_address: String,
    /// Placeholder label given to every new tab.
    pub tab_label: String,
    pub input_placeholder: String,
    pub bookmark_label: String,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            default_address: DEFAULT_ADDRESS.to_string(),
            tab_label: "New Tab".to_string(),
            input_placeholder: "Enter URL or Search".to_string(),
            bookmark_label: "Bookmark".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

/// Main window title and geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Styled Browser".to_string(),
            x: 200,
            y: 200,
            width: 1200,
            height: 800,
        }
    }
}
