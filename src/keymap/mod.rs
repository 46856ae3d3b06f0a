//! Key-combo binding system
//!
//! Bindings map combo text such as `"CTRL+SHIFT+ESC"` to an [`Action`].
//! The registry tracks which physical keys are held and fires an action
//! when every key of its combo is down.
//!
//! # Architecture
//!
//! ```text
//! winit::KeyEvent → KeyEvent → BindingRegistry::handle_event() → Action
//!                                      │
//!                                      └── combo::resolve(text) → ResolvedCombo
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut registry = BindingRegistry::new();
//! registry.register_binding("CTRL+ESC", Action::CloseApp);
//!
//! registry.on_key_press(KeyId::LEFT_CONTROL);
//! registry.dispatch_on_press(KeyId::ESCAPE, ["CTRL+ESC"], |action| run(action));
//! ```

mod action;
pub mod combo;
mod registry;
mod types;
mod winit_adapter;

pub use action::Action;
pub use combo::{resolve, ResolvedCombo, COMBO_DELIMITER};
pub use registry::{BindingRegistry, TriggerMode};
pub use types::{KeyEvent, KeyId, KeyTransition};
pub use winit_adapter::{key_event_from_winit, key_id_from_physical};
