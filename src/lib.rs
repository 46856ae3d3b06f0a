//! VoltLine Hub - project launcher for the VoltLine engine
//!
//! This crate provides the key-combo binding system and the Elm-style
//! model/update core of the hub window.

pub mod cli;
pub mod commands;
pub mod config_paths;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod projects;
pub mod settings;
pub mod tracing;
pub mod update;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use commands::Cmd;
pub use keymap::{Action, BindingRegistry, KeyId, TriggerMode};
pub use messages::HubMsg;
pub use model::HubModel;
pub use settings::HubSettings;
