//! Hub settings persistence
//!
//! Stores engine, debugging, render, plugin and keybind settings in
//! `hub_settings.json`. Maps keep the order they have in the file, which
//! is also the order keybind combos are evaluated in.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config_paths;
use crate::keymap::{Action, BindingRegistry, TriggerMode};

/// Settings shipped with the binary, used when no file can be read
const DEFAULT_SETTINGS_JSON: &str = include_str!("../hub_settings.json");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: top level is not a JSON object", .path.display())]
    NotAnObject { path: PathBuf },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top level of `hub_settings.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubSettings {
    /// Named combos; the `"Escape"` entry closes the hub
    #[serde(default)]
    pub keybinds: IndexMap<String, String>,
    #[serde(default)]
    pub keybind_trigger: TriggerMode,
    #[serde(default)]
    pub debugging: DebugSettings,
    #[serde(default)]
    pub engine_settings: EngineSettings,
    #[serde(default)]
    pub render_settings: RenderSettings,
    #[serde(default)]
    pub plugins: IndexMap<String, PluginEntry>,
    #[serde(default)]
    pub window: WindowSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugSettings {
    #[serde(default)]
    pub logging: bool,
    #[serde(default)]
    pub enable_debug_mode: bool,
    #[serde(default)]
    pub show_fps: bool,
}

/// Which debugging toggle a settings message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugFlag {
    Logging,
    DebugMode,
    ShowFps,
}

impl DebugSettings {
    pub fn get(&self, flag: DebugFlag) -> bool {
        match flag {
            DebugFlag::Logging => self.logging,
            DebugFlag::DebugMode => self.enable_debug_mode,
            DebugFlag::ShowFps => self.show_fps,
        }
    }

    /// Returns true if the value changed
    pub fn set(&mut self, flag: DebugFlag, value: bool) -> bool {
        let slot = match flag {
            DebugFlag::Logging => &mut self.logging,
            DebugFlag::DebugMode => &mut self.enable_debug_mode,
            DebugFlag::ShowFps => &mut self.show_fps,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub engine_version: String,
    /// Directory for the hub log file; the config `logs/` dir when unset
    #[serde(default)]
    pub engine_log_file_dir: Option<PathBuf>,
    #[serde(default)]
    pub preferred_editor_win: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default = "default_max_fps")]
    pub max_fps: u32,
    #[serde(default)]
    pub renderers: Vec<String>,
}

fn default_max_fps() -> u32 {
    60
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_fps: default_max_fps(),
            renderers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    #[serde(default)]
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: PluginKind,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "primaryFile", default)]
    pub primary_file: String,
}

/// Plugin flavour; the file may spell it lower, title or upper case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum PluginKind {
    Core,
    External,
}

impl FromStr for PluginKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" | "Core" | "CORE" => Ok(PluginKind::Core),
            "external" | "External" | "EXTERNAL" => Ok(PluginKind::External),
            other => Err(format!(
                "invalid plugin type: {}. Acceptable types include: core (core, Core, or CORE) \
                 and external (external, External or EXTERNAL)",
                other
            )),
        }
    }
}

impl TryFrom<String> for PluginKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginKind::Core => write!(f, "core"),
            PluginKind::External => write!(f, "external"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_title() -> String {
    "VoltLine Engine Hub".to_string()
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for HubSettings {
    fn default() -> Self {
        Self::embedded_default()
    }
}

impl HubSettings {
    /// Settings compiled into the binary
    pub fn embedded_default() -> Self {
        match serde_json::from_str(DEFAULT_SETTINGS_JSON) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Embedded hub settings are invalid: {}", e);
                Self {
                    keybinds: IndexMap::new(),
                    keybind_trigger: TriggerMode::default(),
                    debugging: DebugSettings::default(),
                    engine_settings: EngineSettings::default(),
                    render_settings: RenderSettings::default(),
                    plugins: IndexMap::new(),
                    window: WindowSettings::default(),
                }
            }
        }
    }

    pub fn from_json(json: &str, path: &Path) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, path)
    }

    /// Find and read the settings file without falling back on errors
    ///
    /// Does not log, so it can run before tracing is set up. A missing file
    /// is not an error and yields the embedded defaults. Returns the path
    /// settings are saved to alongside the result.
    pub fn read(explicit: Option<&Path>) -> (Result<Self, SettingsError>, Option<PathBuf>) {
        let Some(path) = config_paths::locate(explicit, config_paths::SETTINGS_FILE_NAME) else {
            return (Ok(Self::embedded_default()), None);
        };

        if !path.exists() {
            return (Ok(Self::embedded_default()), Some(path));
        }

        (Self::load_from(&path), Some(path))
    }

    /// Load settings, or return the embedded defaults if none can be read
    pub fn load(explicit: Option<&Path>) -> (Self, Option<PathBuf>) {
        let (result, path) = Self::read(explicit);
        log_source(&result, path.as_deref());
        match result {
            Ok(settings) => (settings, path),
            Err(_) => (Self::embedded_default(), path),
        }
    }

    /// Save settings as pretty JSON, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved hub settings to {}", path.display());
        Ok(())
    }

    /// Combo text reserved for closing the hub
    pub fn close_combo(&self) -> Option<&str> {
        self.keybinds
            .get(Action::CloseApp.settings_key())
            .map(String::as_str)
    }

    /// Every configured combo text, in file order
    pub fn combo_texts(&self) -> Vec<String> {
        self.keybinds.values().cloned().collect()
    }

    /// Build a registry binding each keybind whose name belongs to an action
    ///
    /// Entries with other names stay in [`HubSettings::combo_texts`] but are
    /// not bound, so they never fire.
    pub fn binding_registry(&self) -> BindingRegistry {
        let mut registry = BindingRegistry::with_trigger_mode(self.keybind_trigger);
        for (name, combo) in &self.keybinds {
            match Action::from_settings_key(name) {
                Some(action) => {
                    registry.register_binding(combo.clone(), action);
                }
                None => tracing::debug!(name, combo, "Keybind has no action, not binding"),
            }
        }
        if self.close_combo().is_none() {
            tracing::warn!("No \"Escape\" keybind configured; the hub has no close combo");
        }
        registry
    }
}

/// Write `debugging` into the settings file at `path`, leaving the rest as is
///
/// Only the `debugging` section is replaced; keybinds, trigger mode and
/// everything else keep what the file says, whatever the hub holds in
/// memory. A file that does not parse is left untouched and reported. With
/// no file yet, the embedded defaults are written with `debugging` applied.
pub fn save_debugging(path: &Path, debugging: &DebugSettings) -> Result<(), SettingsError> {
    if !path.exists() {
        let mut settings = HubSettings::embedded_default();
        settings.debugging = debugging.clone();
        return settings.save_to(path);
    }

    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut document: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let Some(root) = document.as_object_mut() else {
        return Err(SettingsError::NotAnObject {
            path: path.to_path_buf(),
        });
    };
    root.insert("debugging".to_string(), serde_json::to_value(debugging)?);

    let content = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, content).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved debugging settings to {}", path.display());
    Ok(())
}

/// Log where settings came from, for a result of [`HubSettings::read`]
pub fn log_source(result: &Result<HubSettings, SettingsError>, path: Option<&Path>) {
    match (result, path) {
        (Err(e), _) => tracing::warn!("{}, using defaults", e),
        (Ok(_), Some(path)) if path.exists() => {
            tracing::info!("Loaded hub settings from {}", path.display())
        }
        (Ok(_), Some(path)) => tracing::debug!(
            "Settings file not found at {}, using defaults",
            path.display()
        ),
        (Ok(_), None) => {
            tracing::debug!("No config directory available, using default settings")
        }
    }
}
