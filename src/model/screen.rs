//! Screens shown in the hub's main panel

use std::fmt;

/// The main-panel screen currently shown
///
/// The side panel switches between these; the settings popup is an overlay
/// tracked separately on the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// List of existing projects
    #[default]
    Projects,
    /// New project form (template, name, location)
    NewProject,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Projects => "Projects",
            Screen::NewProject => "New Project",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
