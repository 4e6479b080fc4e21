// tabshell platform paths
// Only the settings file lives on disk; bookmarks and tabs are never persisted.

use std::env;
use std::path::PathBuf;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/tabshell`, else `~/.config/tabshell`
/// - **macOS**: `~/Library/Application Support/TabShell`
/// - **Windows**: `%APPDATA%/TabShell`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("TabShell")
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join("TabShell")
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        const APP_DIR: &str = "tabshell";
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
            _ => home_dir().join(".config").join(APP_DIR),
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}
