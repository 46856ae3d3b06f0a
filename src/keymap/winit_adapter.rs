//! Adapter to convert winit key events to our KeyEvent type

use winit::event::ElementState;
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use super::types::{KeyEvent, KeyId, KeyTransition};

/// Map a winit physical key to its GLFW-compatible key id
///
/// Returns None for keys that have no code in the table (media keys etc.)
pub fn key_id_from_physical(physical_key: PhysicalKey) -> Option<KeyId> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let key = match code {
        WinitKeyCode::KeyA => KeyId::letter('a')?,
        WinitKeyCode::KeyB => KeyId::letter('b')?,
        WinitKeyCode::KeyC => KeyId::letter('c')?,
        WinitKeyCode::KeyD => KeyId::letter('d')?,
        WinitKeyCode::KeyE => KeyId::letter('e')?,
        WinitKeyCode::KeyF => KeyId::letter('f')?,
        WinitKeyCode::KeyG => KeyId::letter('g')?,
        WinitKeyCode::KeyH => KeyId::letter('h')?,
        WinitKeyCode::KeyI => KeyId::letter('i')?,
        WinitKeyCode::KeyJ => KeyId::letter('j')?,
        WinitKeyCode::KeyK => KeyId::letter('k')?,
        WinitKeyCode::KeyL => KeyId::letter('l')?,
        WinitKeyCode::KeyM => KeyId::letter('m')?,
        WinitKeyCode::KeyN => KeyId::letter('n')?,
        WinitKeyCode::KeyO => KeyId::letter('o')?,
        WinitKeyCode::KeyP => KeyId::letter('p')?,
        WinitKeyCode::KeyQ => KeyId::letter('q')?,
        WinitKeyCode::KeyR => KeyId::letter('r')?,
        WinitKeyCode::KeyS => KeyId::letter('s')?,
        WinitKeyCode::KeyT => KeyId::letter('t')?,
        WinitKeyCode::KeyU => KeyId::letter('u')?,
        WinitKeyCode::KeyV => KeyId::letter('v')?,
        WinitKeyCode::KeyW => KeyId::letter('w')?,
        WinitKeyCode::KeyX => KeyId::letter('x')?,
        WinitKeyCode::KeyY => KeyId::letter('y')?,
        WinitKeyCode::KeyZ => KeyId::letter('z')?,

        WinitKeyCode::Digit0 => KeyId::digit(0)?,
        WinitKeyCode::Digit1 => KeyId::digit(1)?,
        WinitKeyCode::Digit2 => KeyId::digit(2)?,
        WinitKeyCode::Digit3 => KeyId::digit(3)?,
        WinitKeyCode::Digit4 => KeyId::digit(4)?,
        WinitKeyCode::Digit5 => KeyId::digit(5)?,
        WinitKeyCode::Digit6 => KeyId::digit(6)?,
        WinitKeyCode::Digit7 => KeyId::digit(7)?,
        WinitKeyCode::Digit8 => KeyId::digit(8)?,
        WinitKeyCode::Digit9 => KeyId::digit(9)?,

        WinitKeyCode::Space => KeyId::SPACE,
        WinitKeyCode::Escape => KeyId::ESCAPE,
        WinitKeyCode::Enter => KeyId::ENTER,
        WinitKeyCode::Tab => KeyId::TAB,
        WinitKeyCode::Backspace => KeyId::BACKSPACE,
        WinitKeyCode::Insert => KeyId::INSERT,
        WinitKeyCode::Delete => KeyId::DELETE,

        // Arrows
        WinitKeyCode::ArrowRight => KeyId::RIGHT,
        WinitKeyCode::ArrowLeft => KeyId::LEFT,
        WinitKeyCode::ArrowDown => KeyId::DOWN,
        WinitKeyCode::ArrowUp => KeyId::UP,

        // Navigation
        WinitKeyCode::PageUp => KeyId::PAGE_UP,
        WinitKeyCode::PageDown => KeyId::PAGE_DOWN,
        WinitKeyCode::Home => KeyId::HOME,
        WinitKeyCode::End => KeyId::END,

        // Function keys
        WinitKeyCode::F1 => KeyId::function(1)?,
        WinitKeyCode::F2 => KeyId::function(2)?,
        WinitKeyCode::F3 => KeyId::function(3)?,
        WinitKeyCode::F4 => KeyId::function(4)?,
        WinitKeyCode::F5 => KeyId::function(5)?,
        WinitKeyCode::F6 => KeyId::function(6)?,
        WinitKeyCode::F7 => KeyId::function(7)?,
        WinitKeyCode::F8 => KeyId::function(8)?,
        WinitKeyCode::F9 => KeyId::function(9)?,
        WinitKeyCode::F10 => KeyId::function(10)?,
        WinitKeyCode::F11 => KeyId::function(11)?,
        WinitKeyCode::F12 => KeyId::function(12)?,

        // Modifiers
        WinitKeyCode::ShiftLeft => KeyId::LEFT_SHIFT,
        WinitKeyCode::ControlLeft => KeyId::LEFT_CONTROL,
        WinitKeyCode::AltLeft => KeyId::LEFT_ALT,
        WinitKeyCode::SuperLeft => KeyId::LEFT_SUPER,
        WinitKeyCode::ShiftRight => KeyId::RIGHT_SHIFT,
        WinitKeyCode::ControlRight => KeyId::RIGHT_CONTROL,
        WinitKeyCode::AltRight => KeyId::RIGHT_ALT,
        WinitKeyCode::SuperRight => KeyId::RIGHT_SUPER,

        _ => return None,
    };

    Some(key)
}

/// Convert winit key event data to our KeyEvent type
///
/// OS auto-repeat events are dropped: a held key is already in the pressed
/// set and must not count as a fresh press.
pub fn key_event_from_winit(
    physical_key: PhysicalKey,
    state: ElementState,
    repeat: bool,
) -> Option<KeyEvent> {
    if repeat {
        return None;
    }

    let key = key_id_from_physical(physical_key)?;
    let transition = match state {
        ElementState::Pressed => KeyTransition::Press,
        ElementState::Released => KeyTransition::Release,
    };

    Some(KeyEvent { key, transition })
}
