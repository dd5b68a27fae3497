// TabJump platform abstraction
// Resolves the per-OS directory that holds the tracker's settings file.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for TabJump.
///
/// - **Linux**: `~/.config/tabjump` (or `$XDG_CONFIG_HOME/tabjump`)
/// - **macOS**: `~/Library/Application Support/TabJump`
/// - **Windows**: `%APPDATA%/TabJump`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
