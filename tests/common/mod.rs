//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::Path;

use voltline_hub::keymap::{KeyEvent, KeyId};
use voltline_hub::messages::HubMsg;
use voltline_hub::model::HubModel;
use voltline_hub::projects::Projects;
use voltline_hub::settings::HubSettings;
use voltline_hub::update::update;
use voltline_hub::Cmd;

/// Settings JSON shaped like a shipped `hub_settings.json`
pub const SAMPLE_SETTINGS: &str = r#"{
    "keybinds": { "Escape": "CTRL+SHIFT+ESC" },
    "debugging": { "logging": true, "enable_debug_mode": false, "show_fps": false },
    "engine_settings": {
        "engine_version": "0.1.0",
        "engine_log_file_dir": null,
        "preferred_editor_win": "code"
    },
    "render_settings": { "max_fps": 144, "renderers": ["OpenGL", "Vulkan"] },
    "plugins": {
        "Physics": {
            "enabled": true,
            "type": "Core",
            "location": "plugins/physics",
            "primaryFile": "physics.dll"
        }
    }
}"#;

/// Hub model built from the embedded default settings
pub fn test_model() -> HubModel {
    let settings = HubSettings::embedded_default();
    model_with_settings(settings)
}

pub fn model_with_settings(settings: HubSettings) -> HubModel {
    let bindings = settings.binding_registry();
    HubModel::new(settings, Projects::default(), bindings)
}

/// Write `content` to `name` inside `dir`, returning the full path
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn press(model: &mut HubModel, key: KeyId) -> Option<Cmd> {
    update(model, HubMsg::Key(KeyEvent::press(key)))
}

pub fn release(model: &mut HubModel, key: KeyId) -> Option<Cmd> {
    update(model, HubMsg::Key(KeyEvent::release(key)))
}

/// Press every key in order, returning how many presses produced an exit
pub fn press_all(model: &mut HubModel, keys: &[KeyId]) -> usize {
    keys.iter()
        .filter_map(|&key| press(model, key))
        .filter(Cmd::is_exit)
        .count()
}
