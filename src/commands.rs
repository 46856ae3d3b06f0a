//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::projects::Projects;
use crate::settings::DebugSettings;

/// Delay between a left click and the side panel taking focus back
pub const SIDE_PANEL_FOCUS_DELAY: Duration = Duration::from_millis(200);

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Close the window and leave the event loop
    Exit,
    /// After the delay, post `HubMsg::FocusSidePanel` back to the event loop
    FocusSidePanelAfter(Duration),
    /// Write the `debugging` section of the settings file asynchronously
    SaveDebugSettings {
        path: PathBuf,
        debugging: DebugSettings,
    },
    /// Write the project list asynchronously
    SaveProjects { path: PathBuf, projects: Projects },
    /// Open `file` in the user's editor without blocking the event loop
    OpenInEditor { editor: String, file: PathBuf },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Collapse a list of commands, avoiding a one-element batch
    pub fn batch(mut cmds: Vec<Cmd>) -> Cmd {
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Exit => false,
            Cmd::FocusSidePanelAfter(_) => false,
            Cmd::SaveDebugSettings { .. } => true,
            Cmd::SaveProjects { .. } => true,
            Cmd::OpenInEditor { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// True if this command (or any in a batch) exits the hub
    pub fn is_exit(&self) -> bool {
        match self {
            Cmd::Exit => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_exit()),
            _ => false,
        }
    }
}

/// Process that opens `file` with `editor`, e.g. `code hub_settings.json`
pub fn editor_command(editor: &str, file: &Path) -> Command {
    let mut command = Command::new(editor);
    command.arg(file);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_collapses() {
        assert!(matches!(Cmd::batch(vec![]), Cmd::None));
        assert!(matches!(Cmd::batch(vec![Cmd::Exit]), Cmd::Exit));
        assert!(matches!(
            Cmd::batch(vec![Cmd::Redraw, Cmd::Exit]),
            Cmd::Batch(_)
        ));
    }

    #[test]
    fn test_exit_inside_batch() {
        let cmd = Cmd::Batch(vec![Cmd::Redraw, Cmd::Exit]);
        assert!(cmd.is_exit());
        assert!(cmd.needs_redraw());
        assert!(!Cmd::FocusSidePanelAfter(SIDE_PANEL_FOCUS_DELAY).is_exit());
    }

    #[test]
    fn test_editor_command_passes_file() {
        let command = editor_command("code", Path::new("cfg/hub_settings.json"));
        assert_eq!(command.get_program(), "code");
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec![Path::new("cfg/hub_settings.json").as_os_str()]
        );
    }
}
