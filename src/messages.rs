//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::keymap::{Action, KeyEvent};
use crate::model::Screen;
use crate::projects::ProjectTemplate;
use crate::settings::DebugFlag;

#[derive(Debug, Clone)]
pub enum HubMsg {
    /// Raw key press/release from the window
    Key(KeyEvent),
    /// Side panel navigation
    ShowScreen(Screen),
    OpenSettings,
    CloseSettings,
    /// Debugging checkbox in the settings popup
    SetDebugFlag(DebugFlag, bool),
    /// "Open Hub Settings" button in the settings popup
    OpenSettingsFile,
    /// "Open Projects File" button in the settings popup
    OpenProjectsFile,
    /// Editor launched by `OpenSettingsFile`/`OpenProjectsFile` exited
    EditorClosed(Result<(), String>),
    /// Move `action` to a new combo (in memory only)
    Rebind { action: Action, combo: String },

    /// A text input gained keyboard focus
    TextFieldActivated,
    /// A text input lost keyboard focus
    TextFieldDeactivated,
    /// Left mouse button went down anywhere in the window
    PointerPressed,
    /// Delayed follow-up to `PointerPressed`
    FocusSidePanel,

    SelectTemplate(ProjectTemplate),
    SetProjectName(String),
    SetProjectLocation(PathBuf),
    CreateProject,
    OpenProject(String),

    /// Background save finished
    SaveCompleted(Result<(), String>),
    /// Quit button
    Quit,
}
