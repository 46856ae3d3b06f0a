//! BindingRegistry: combo bindings plus live pressed-key state

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::combo::{self, ResolvedCombo};
use super::types::{KeyEvent, KeyId, KeyTransition};

/// When a satisfied combo fires its action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Every press event re-fires while the whole combo stays held
    #[default]
    Repeat,
    /// Fires once when the combo becomes satisfied, re-arms after a component key is released
    Edge,
}

/// A bound action with its combo resolved once, at registration
#[derive(Debug, Clone)]
struct Binding {
    action: Action,
    combo: ResolvedCombo,
}

/// Owns the combo → action table and the set of currently held keys
///
/// Combo text is resolved when it is bound, so its unknown-token warnings
/// are logged once per binding rather than on every key press.
///
/// Must only be driven from the event-loop thread, in event order.
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    bindings: HashMap<String, Binding>,
    pressed: HashSet<KeyId>,
    trigger: TriggerMode,
    /// Edge mode only: combos that already fired and are still held
    latched: HashMap<String, ResolvedCombo>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trigger_mode(trigger: TriggerMode) -> Self {
        Self {
            trigger,
            ..Self::default()
        }
    }

    pub fn trigger_mode(&self) -> TriggerMode {
        self.trigger
    }

    pub fn set_trigger_mode(&mut self, trigger: TriggerMode) {
        self.trigger = trigger;
        self.latched.clear();
    }

    /// Bind `combo` to `action`, replacing whatever was bound to that exact text
    pub fn register_binding(&mut self, combo: impl Into<String>, action: Action) -> Option<Action> {
        let text = combo.into();
        tracing::debug!(%action, combo = %text, "Registering key binding");
        let combo = combo::resolve(&text);
        self.latched.remove(&text);
        self.bindings
            .insert(text, Binding { action, combo })
            .map(|previous| previous.action)
    }

    /// Move `action` to `new_combo`
    ///
    /// Drops every existing entry bound to `action` before inserting, so the
    /// new text is the only binding for it afterwards. With no prior entry
    /// this is a plain insert.
    pub fn update_binding(&mut self, action: Action, new_combo: impl Into<String>) {
        let new_combo = new_combo.into();
        let before = self.bindings.len();
        self.bindings.retain(|_, bound| bound.action != action);
        self.latched.retain(|combo, _| self.bindings.contains_key(combo));

        if before == self.bindings.len() {
            tracing::debug!(%action, "No previous binding to replace, inserting");
        }
        self.register_binding(new_combo, action);
    }

    pub fn action_for(&self, combo: &str) -> Option<Action> {
        self.bindings.get(combo).map(|bound| bound.action)
    }

    /// All combo texts currently bound to `action` (unordered)
    pub fn combos_for(&self, action: Action) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|(_, bound)| bound.action == action)
            .map(|(combo, _)| combo.as_str())
            .collect()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, Action)> {
        self.bindings
            .iter()
            .map(|(combo, bound)| (combo.as_str(), bound.action))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn on_key_press(&mut self, key: KeyId) {
        self.pressed.insert(key);
    }

    pub fn on_key_release(&mut self, key: KeyId) {
        self.pressed.remove(&key);
        let pressed = &self.pressed;
        self.latched.retain(|_, combo| combo.is_satisfied_by(pressed));
    }

    pub fn is_pressed(&self, key: KeyId) -> bool {
        self.pressed.contains(&key)
    }

    pub fn pressed_keys(&self) -> &HashSet<KeyId> {
        &self.pressed
    }

    /// True iff every key `combo` resolves to is held
    ///
    /// A combo whose tokens are all unrecognized resolves to nothing and is
    /// never satisfied. Bound text uses the combo cached at registration;
    /// other text is resolved on the spot.
    pub fn is_combo_satisfied(&self, combo: &str) -> bool {
        match self.bindings.get(combo) {
            Some(bound) => bound.combo.is_satisfied_by(&self.pressed),
            None => combo::resolve(combo).is_satisfied_by(&self.pressed),
        }
    }

    /// Record a press of `key` and fire every bound, satisfied combo
    ///
    /// `combos` is walked in caller order; texts with no binding are skipped.
    /// Returns how many times `effect` was called.
    pub fn dispatch_on_press<I, S, F>(&mut self, key: KeyId, combos: I, mut effect: F) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(Action),
    {
        self.on_key_press(key);

        let mut fired = 0;
        for combo in combos {
            let combo = combo.as_ref();
            let Some(bound) = self.bindings.get(combo) else {
                continue;
            };
            if !bound.combo.is_satisfied_by(&self.pressed) {
                continue;
            }
            let action = bound.action;

            if self.trigger == TriggerMode::Edge {
                if self.latched.contains_key(combo) {
                    continue;
                }
                let resolved = bound.combo.clone();
                self.latched.insert(combo.to_string(), resolved);
            }

            tracing::debug!(%action, combo, pressed = %key, "Key combo satisfied");
            effect(action);
            fired += 1;
        }
        fired
    }

    /// Route a raw key event: presses dispatch, releases only update state
    pub fn handle_event<I, S, F>(&mut self, event: KeyEvent, combos: I, effect: F) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(Action),
    {
        match event.transition {
            KeyTransition::Press => self.dispatch_on_press(event.key, combos, effect),
            KeyTransition::Release => {
                self.on_key_release(event.key);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSE: &str = "CTRL+SHIFT+ESC";

    fn registry() -> BindingRegistry {
        let mut reg = BindingRegistry::new();
        reg.register_binding(CLOSE, Action::CloseApp);
        reg
    }

    #[test]
    fn test_register_overwrites_same_text() {
        let mut reg = registry();
        assert_eq!(reg.register_binding(CLOSE, Action::CloseApp), Some(Action::CloseApp));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_register_allows_action_reuse() {
        let mut reg = registry();
        reg.register_binding("ALT+ESC", Action::CloseApp);
        assert_eq!(reg.combos_for(Action::CloseApp).len(), 2);
    }

    #[test]
    fn test_update_binding_replaces() {
        let mut reg = registry();
        reg.update_binding(Action::CloseApp, "ALT+ESC");

        assert_eq!(reg.combos_for(Action::CloseApp), vec!["ALT+ESC"]);
        assert_eq!(reg.action_for(CLOSE), None);
    }

    #[test]
    fn test_update_binding_without_prior_entry_inserts() {
        let mut reg = BindingRegistry::new();
        reg.update_binding(Action::CloseApp, "ALT+ESC");
        assert_eq!(reg.action_for("ALT+ESC"), Some(Action::CloseApp));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_press_is_idempotent() {
        let mut reg = registry();
        reg.on_key_press(KeyId::ESCAPE);
        reg.on_key_press(KeyId::ESCAPE);
        assert_eq!(reg.pressed_keys().len(), 1);

        reg.on_key_release(KeyId::ESCAPE);
        assert!(!reg.is_pressed(KeyId::ESCAPE));
    }

    #[test]
    fn test_release_of_unpressed_key_is_noop() {
        let mut reg = registry();
        reg.on_key_release(KeyId(9999));
        assert!(reg.pressed_keys().is_empty());
    }

    #[test]
    fn test_is_combo_satisfied_superset() {
        let mut reg = registry();
        reg.on_key_press(KeyId::LEFT_CONTROL);
        reg.on_key_press(KeyId::ESCAPE);
        assert!(reg.is_combo_satisfied("CTRL+ESC"));

        reg.on_key_press(KeyId::LEFT_ALT);
        reg.on_key_press(KeyId(65));
        assert!(reg.is_combo_satisfied("CTRL+ESC"));
        assert!(!reg.is_combo_satisfied(CLOSE));
    }

    #[test]
    fn test_unrecognized_only_combo_never_satisfied() {
        let mut reg = registry();
        reg.on_key_press(KeyId::ESCAPE);
        assert!(!reg.is_combo_satisfied("NOPE"));
        assert!(!reg.is_combo_satisfied(""));
    }

    #[test]
    fn test_dispatch_skips_unbound_combos() {
        let mut reg = registry();
        reg.on_key_press(KeyId::LEFT_CONTROL);
        let fired = reg.dispatch_on_press(KeyId::ESCAPE, ["CTRL+ESC"], |_| {});
        assert_eq!(fired, 0);
    }

    #[test]
    fn test_dispatch_repeat_mode_refires() {
        let mut reg = registry();
        let mut fired = Vec::new();
        let combos = [CLOSE];

        reg.dispatch_on_press(KeyId::LEFT_CONTROL, combos, |a| fired.push(a));
        reg.dispatch_on_press(KeyId::LEFT_SHIFT, combos, |a| fired.push(a));
        assert!(fired.is_empty());

        reg.dispatch_on_press(KeyId::ESCAPE, combos, |a| fired.push(a));
        reg.dispatch_on_press(KeyId(65), combos, |a| fired.push(a));
        assert_eq!(fired, vec![Action::CloseApp, Action::CloseApp]);
    }

    #[test]
    fn test_dispatch_edge_mode_fires_once_per_transition() {
        let mut reg = BindingRegistry::with_trigger_mode(TriggerMode::Edge);
        reg.register_binding(CLOSE, Action::CloseApp);
        let combos = [CLOSE];
        let mut count = 0;

        for key in [KeyId::LEFT_CONTROL, KeyId::LEFT_SHIFT, KeyId::ESCAPE, KeyId(65)] {
            count += reg.dispatch_on_press(key, combos, |_| {});
        }
        assert_eq!(count, 1);

        // Releasing an unrelated key keeps the latch
        reg.on_key_release(KeyId(65));
        count += reg.dispatch_on_press(KeyId(66), combos, |_| {});
        assert_eq!(count, 1);

        // Releasing a component re-arms the combo
        reg.on_key_release(KeyId::ESCAPE);
        count += reg.dispatch_on_press(KeyId::ESCAPE, combos, |_| {});
        assert_eq!(count, 2);
    }

    #[test]
    fn test_handle_event_release_does_not_fire() {
        let mut reg = registry();
        for key in [KeyId::LEFT_CONTROL, KeyId::LEFT_SHIFT, KeyId::ESCAPE] {
            reg.on_key_press(key);
        }
        let fired = reg.handle_event(KeyEvent::release(KeyId(70)), [CLOSE], |_| {});
        assert_eq!(fired, 0);
        assert!(reg.is_combo_satisfied(CLOSE));
    }

    #[test]
    fn test_set_trigger_mode_clears_latch() {
        let mut reg = BindingRegistry::with_trigger_mode(TriggerMode::Edge);
        reg.register_binding("ESC", Action::CloseApp);
        assert_eq!(reg.dispatch_on_press(KeyId::ESCAPE, ["ESC"], |_| {}), 1);
        assert_eq!(reg.dispatch_on_press(KeyId::ESCAPE, ["ESC"], |_| {}), 0);

        reg.set_trigger_mode(TriggerMode::Repeat);
        assert_eq!(reg.trigger_mode(), TriggerMode::Repeat);
        assert_eq!(reg.dispatch_on_press(KeyId::ESCAPE, ["ESC"], |_| {}), 1);
    }
}
