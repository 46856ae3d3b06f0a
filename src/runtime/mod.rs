//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `icon` - Window icon loading

pub mod app;
pub mod icon;

pub use app::App;
