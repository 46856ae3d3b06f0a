//! Core types for the keymap system: KeyId, KeyTransition, KeyEvent

use std::fmt;

/// An abstract integer code for a physical key
///
/// The named constants use GLFW key codes so that settings written for the
/// original engine tooling resolve to the same numbers. Any integer is a
/// valid `KeyId`; unknown codes simply never match a resolved combo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(pub i32);

impl KeyId {
    pub const SPACE: KeyId = KeyId(32);
    pub const ESCAPE: KeyId = KeyId(256);
    pub const ENTER: KeyId = KeyId(257);
    pub const TAB: KeyId = KeyId(258);
    pub const BACKSPACE: KeyId = KeyId(259);
    pub const INSERT: KeyId = KeyId(260);
    pub const DELETE: KeyId = KeyId(261);
    pub const RIGHT: KeyId = KeyId(262);
    pub const LEFT: KeyId = KeyId(263);
    pub const DOWN: KeyId = KeyId(264);
    pub const UP: KeyId = KeyId(265);
    pub const PAGE_UP: KeyId = KeyId(266);
    pub const PAGE_DOWN: KeyId = KeyId(267);
    pub const HOME: KeyId = KeyId(268);
    pub const END: KeyId = KeyId(269);
    /// F1; F2..F12 follow consecutively
    pub const F1: KeyId = KeyId(290);
    pub const LEFT_SHIFT: KeyId = KeyId(340);
    pub const LEFT_CONTROL: KeyId = KeyId(341);
    pub const LEFT_ALT: KeyId = KeyId(342);
    pub const LEFT_SUPER: KeyId = KeyId(343);
    pub const RIGHT_SHIFT: KeyId = KeyId(344);
    pub const RIGHT_CONTROL: KeyId = KeyId(345);
    pub const RIGHT_ALT: KeyId = KeyId(346);
    pub const RIGHT_SUPER: KeyId = KeyId(347);

    /// Letter key `A`..`Z` (case-insensitive)
    pub const fn letter(c: char) -> Option<KeyId> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(KeyId(upper as i32))
        } else {
            None
        }
    }

    /// Digit key `0`..`9` on the main row
    pub const fn digit(n: u8) -> Option<KeyId> {
        if n <= 9 {
            Some(KeyId(48 + n as i32))
        } else {
            None
        }
    }

    /// Function key F1..F12
    pub const fn function(n: u8) -> Option<KeyId> {
        if n >= 1 && n <= 12 {
            Some(KeyId(Self::F1.0 + (n as i32 - 1)))
        } else {
            None
        }
    }

    /// The raw integer code
    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Human-readable name for well-known keys
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            KeyId::SPACE => "Space",
            KeyId::ESCAPE => "Escape",
            KeyId::ENTER => "Enter",
            KeyId::TAB => "Tab",
            KeyId::BACKSPACE => "Backspace",
            KeyId::INSERT => "Insert",
            KeyId::DELETE => "Delete",
            KeyId::RIGHT => "Right",
            KeyId::LEFT => "Left",
            KeyId::DOWN => "Down",
            KeyId::UP => "Up",
            KeyId::PAGE_UP => "PageUp",
            KeyId::PAGE_DOWN => "PageDown",
            KeyId::HOME => "Home",
            KeyId::END => "End",
            KeyId::LEFT_SHIFT => "LeftShift",
            KeyId::LEFT_CONTROL => "LeftCtrl",
            KeyId::LEFT_ALT => "LeftAlt",
            KeyId::LEFT_SUPER => "LeftSuper",
            KeyId::RIGHT_SHIFT => "RightShift",
            KeyId::RIGHT_CONTROL => "RightCtrl",
            KeyId::RIGHT_ALT => "RightAlt",
            KeyId::RIGHT_SUPER => "RightSuper",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i32> for KeyId {
    fn from(code: i32) -> Self {
        KeyId(code)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return write!(f, "{}", name);
        }
        match self.0 {
            65..=90 | 48..=57 => write!(f, "{}", char::from(self.0 as u8)),
            290..=301 => write!(f, "F{}", self.0 - Self::F1.0 + 1),
            code => write!(f, "Key({})", code),
        }
    }
}

/// Direction of a raw key event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyTransition {
    Press,
    Release,
}

/// A raw keyboard event as delivered by the windowing layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: KeyId,
    pub transition: KeyTransition,
}

impl KeyEvent {
    pub const fn press(key: KeyId) -> Self {
        Self {
            key,
            transition: KeyTransition::Press,
        }
    }

    pub const fn release(key: KeyId) -> Self {
        Self {
            key,
            transition: KeyTransition::Release,
        }
    }

    #[inline]
    pub const fn is_press(&self) -> bool {
        matches!(self.transition, KeyTransition::Press)
    }
}
