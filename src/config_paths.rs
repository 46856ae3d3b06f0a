//! Centralized configuration paths for the VoltLine hub
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/voltline-hub/`
//! - Windows: `%APPDATA%\voltline-hub\`
//!
//! A file of the same name in the working directory takes precedence over
//! the config dir copy, so a hub launched from a build folder picks up the
//! settings shipped next to it.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "voltline-hub";

pub const SETTINGS_FILE_NAME: &str = "hub_settings.json";
pub const PROJECTS_FILE_NAME: &str = "projects.json";
pub const LOG_FILE_NAME: &str = "voltline-hub.log";
pub const ICON_FILE_NAME: &str = "logo.png";

/// Folder under the user's documents dir that holds new projects
pub const PROJECTS_FOLDER: &str = "VoltLine Projects";

/// Base config directory for the hub
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/voltline-hub`
///   - Else: `~/.config/voltline-hub`
///
/// Windows:
///   - `%APPDATA%\voltline-hub`
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

/// `~/.config/voltline-hub/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// `<Documents>/VoltLine Projects/`
pub fn projects_root() -> Option<PathBuf> {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
        .map(|docs| docs.join(PROJECTS_FOLDER))
}

/// Pick the file to read for `file_name`
///
/// Order: `explicit` (even if missing, so the caller reports it), then
/// `./<file_name>`, then the config dir copy. The config dir path is
/// returned even when it does not exist yet so saves have a target.
pub fn locate(explicit: Option<&Path>, file_name: &str) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(file_name);
    if local.is_file() {
        return Some(local);
    }

    config_dir().map(|dir| dir.join(file_name))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure `dir` (or the default logs dir when None) exists, returning it
pub fn ensure_logs_dir(dir: Option<&Path>) -> Result<PathBuf, String> {
    let logs = match dir {
        Some(dir) => dir.to_path_buf(),
        None => logs_dir().ok_or_else(|| "No config directory available".to_string())?,
    };
    ensure_dir(&logs)?;
    Ok(logs)
}
