//! Where the highlighter keeps its settings and log files
//!
//! One per-user directory holds `config.yaml` and a `logs/` subdirectory.
//! Directories are created lazily, by the logger or by a config save; a
//! missing config file just means defaults.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "arabic-rtl";

/// Per-user directory, or `None` when the platform exposes no home
///
/// `$XDG_CONFIG_HOME/arabic-rtl` wins over `~/.config/arabic-rtl` on
/// Unix-likes; Windows uses `%APPDATA%\arabic-rtl`.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// YAML settings read by `HighlightConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Daily rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the log directory on first use
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}
