//! Key-combo text parsing
//!
//! Turns strings like `"CTRL+SHIFT+ESC"` into the key identifiers that must
//! be held down for the combo to match. Tokens are case-sensitive.

use std::collections::HashSet;

use super::types::KeyId;

/// Separator between tokens in combo text
pub const COMBO_DELIMITER: char = '+';

/// Recognized combo tokens and the key each one stands for
const TOKEN_TABLE: [(&str, KeyId); 4] = [
    ("SHIFT", KeyId::LEFT_SHIFT),
    ("CTRL", KeyId::LEFT_CONTROL),
    ("ESC", KeyId::ESCAPE),
    ("ALT", KeyId::LEFT_ALT),
];

/// The key sequence a combo text maps to
///
/// Keys are kept in token order and duplicates are not removed. Tokens that
/// did not match the table are kept in `unrecognized` so callers can surface
/// them; they contribute no key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCombo {
    keys: Vec<KeyId>,
    unrecognized: Vec<String>,
}

impl ResolvedCombo {
    pub fn keys(&self) -> &[KeyId] {
        &self.keys
    }

    /// Tokens that produced a diagnostic, in the order they appeared
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when every key is held. A combo with no keys is never satisfied.
    pub fn is_satisfied_by(&self, pressed: &HashSet<KeyId>) -> bool {
        !self.keys.is_empty() && self.keys.iter().all(|k| pressed.contains(k))
    }
}

/// Look up a single token
pub fn token_key(token: &str) -> Option<KeyId> {
    TOKEN_TABLE
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, key)| key)
}

/// Resolve combo text into its key sequence
///
/// Never fails: every unrecognized token is logged as a warning and skipped.
pub fn resolve(combo_text: &str) -> ResolvedCombo {
    let mut resolved = ResolvedCombo::default();
    if combo_text.is_empty() {
        return resolved;
    }

    for token in combo_text.split(COMBO_DELIMITER).map(str::trim) {
        match token_key(token) {
            Some(key) => resolved.keys.push(key),
            None => {
                tracing::warn!(combo = combo_text, "Unrecognized key: '{}'", token);
                resolved.unrecognized.push(token.to_string());
            }
        }
    }

    resolved
}
