//! Key binding tests driven through the hub update loop
//!
//! Combos come from settings, keys arrive as `HubMsg::Key`, and a fired
//! close binding shows up as `Cmd::Exit`.

mod common;

use common::{model_with_settings, press, press_all, release, test_model};
use voltline_hub::keymap::{Action, KeyId, TriggerMode};
use voltline_hub::messages::HubMsg;
use voltline_hub::settings::HubSettings;
use voltline_hub::update::update;

const CTRL: KeyId = KeyId::LEFT_CONTROL;
const SHIFT: KeyId = KeyId::LEFT_SHIFT;
const ESC: KeyId = KeyId::ESCAPE;

fn settings_with_close(combo: &str) -> HubSettings {
    let mut settings = HubSettings::embedded_default();
    settings
        .keybinds
        .insert(Action::CloseApp.settings_key().to_string(), combo.to_string());
    settings
}

// ========================================================================
// Default close combo
// ========================================================================

#[test]
fn test_close_combo_in_order() {
    let mut model = test_model();
    assert_eq!(press_all(&mut model, &[CTRL, SHIFT, ESC]), 1);
}

#[test]
fn test_close_combo_any_order() {
    let mut model = test_model();
    assert_eq!(press_all(&mut model, &[ESC, SHIFT, CTRL]), 1);
}

#[test]
fn test_partial_combo_does_not_exit() {
    let mut model = test_model();
    assert_eq!(press_all(&mut model, &[CTRL, ESC]), 0);
    assert_eq!(press_all(&mut model, &[KeyId::LEFT_ALT]), 0);
}

#[test]
fn test_released_key_breaks_combo() {
    let mut model = test_model();
    press_all(&mut model, &[CTRL, SHIFT]);
    release(&mut model, SHIFT);
    assert_eq!(press_all(&mut model, &[ESC]), 0);

    // Pressing SHIFT again completes it
    assert_eq!(press_all(&mut model, &[SHIFT]), 1);
}

#[test]
fn test_right_hand_modifiers_do_not_count() {
    let mut model = test_model();
    assert_eq!(
        press_all(&mut model, &[KeyId::RIGHT_CONTROL, KeyId::RIGHT_SHIFT, ESC]),
        0
    );
}

#[test]
fn test_extra_held_keys_do_not_block() {
    let mut model = test_model();
    let a = KeyId::letter('A').unwrap();
    assert_eq!(press_all(&mut model, &[a, CTRL, SHIFT, ESC]), 1);
}

// ========================================================================
// Trigger modes
// ========================================================================

#[test]
fn test_repeat_mode_fires_on_each_further_press() {
    let mut model = test_model();
    assert_eq!(model.bindings.trigger_mode(), TriggerMode::Repeat);
    press_all(&mut model, &[CTRL, SHIFT, ESC]);

    // Any further press while the combo is held satisfies it again
    let f1 = KeyId::F1;
    assert_eq!(press_all(&mut model, &[f1]), 1);
}

#[test]
fn test_edge_mode_fires_once_per_hold() {
    let mut settings = HubSettings::embedded_default();
    settings.keybind_trigger = TriggerMode::Edge;
    let mut model = model_with_settings(settings);

    assert_eq!(press_all(&mut model, &[CTRL, SHIFT, ESC]), 1);
    assert_eq!(press_all(&mut model, &[KeyId::F1]), 0);

    release(&mut model, ESC);
    assert_eq!(press_all(&mut model, &[ESC]), 1);
}

// ========================================================================
// Combo text from settings
// ========================================================================

#[test]
fn test_lowercase_combo_never_fires() {
    let mut model = model_with_settings(settings_with_close("ctrl+shift+esc"));
    assert_eq!(press_all(&mut model, &[CTRL, SHIFT, ESC]), 0);
}

#[test]
fn test_unknown_tokens_are_ignored() {
    let mut model = model_with_settings(settings_with_close("CTRL+HYPER+ESC"));
    assert_eq!(press_all(&mut model, &[CTRL, ESC]), 1);
}

#[test]
fn test_only_unknown_tokens_never_fires() {
    let mut model = model_with_settings(settings_with_close("HYPER+META"));
    assert_eq!(press_all(&mut model, &[CTRL, SHIFT, ESC, KeyId::LEFT_ALT]), 0);
}

#[test]
fn test_spaces_around_tokens_are_trimmed() {
    let mut model = model_with_settings(settings_with_close("CTRL + ESC"));
    assert_eq!(press_all(&mut model, &[CTRL, ESC]), 1);
}

#[test]
fn test_unbound_keybind_name_never_fires() {
    let mut settings = HubSettings::embedded_default();
    settings.keybinds.clear();
    settings
        .keybinds
        .insert("Screenshot".to_string(), "ALT+ESC".to_string());
    let mut model = model_with_settings(settings);

    assert!(model.bindings.is_empty());
    assert_eq!(press_all(&mut model, &[KeyId::LEFT_ALT, ESC]), 0);
}

// ========================================================================
// Rebinding
// ========================================================================

#[test]
fn test_rebind_replaces_old_combo() {
    let mut model = test_model();
    update(
        &mut model,
        HubMsg::Rebind {
            action: Action::CloseApp,
            combo: "ALT+ESC".to_string(),
        },
    );

    assert_eq!(model.bindings.combos_for(Action::CloseApp), vec!["ALT+ESC"]);
    assert_eq!(press_all(&mut model, &[CTRL, SHIFT, ESC]), 0);

    release(&mut model, ESC);
    assert_eq!(press_all(&mut model, &[KeyId::LEFT_ALT, ESC]), 1);
}

#[test]
fn test_rebind_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hub_settings.json");
    let mut model = test_model().with_paths(Some(path.clone()), None);

    let cmd = update(
        &mut model,
        HubMsg::Rebind {
            action: Action::CloseApp,
            combo: "ALT+ESC".to_string(),
        },
    );
    assert!(matches!(cmd, Some(voltline_hub::Cmd::Redraw)));
    assert!(!path.exists());
}

#[test]
fn test_release_of_unpressed_key_is_harmless() {
    let mut model = test_model();
    assert!(release(&mut model, ESC).is_none());
    assert!(press(&mut model, CTRL).is_none());
    assert!(!model.bindings.is_pressed(ESC));
}
