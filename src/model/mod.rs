//! Hub model - the complete state of the hub window
//!
//! Follows the Elm Architecture: the model is only changed by
//! [`crate::update::update`] in response to a [`crate::messages::HubMsg`].

mod screen;

pub use screen::Screen;

use std::path::PathBuf;

use crate::keymap::BindingRegistry;
use crate::projects::{self, ProjectTemplate, Projects};
use crate::settings::HubSettings;

/// Default name offered on the new project screen
pub const DEFAULT_PROJECT_NAME: &str = "New Project";

/// State of the new project form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectForm {
    pub name: String,
    /// Location typed by the user; `None` follows the default for `name`
    pub location: Option<PathBuf>,
    pub template: ProjectTemplate,
}

impl Default for NewProjectForm {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            location: None,
            template: ProjectTemplate::default(),
        }
    }
}

impl NewProjectForm {
    /// Location the project will be created in
    pub fn resolved_location(&self) -> Option<PathBuf> {
        self.location
            .clone()
            .or_else(|| projects::default_location(&self.name))
    }
}

/// The complete hub model
#[derive(Debug)]
pub struct HubModel {
    pub screen: Screen,
    /// Settings popup is open
    pub settings_open: bool,
    /// A text input has keyboard focus; side panel must not steal it
    pub text_field_active: bool,
    pub side_panel_focused: bool,
    pub new_project: NewProjectForm,
    /// Project most recently opened from the projects screen
    pub opened_project: Option<String>,
    /// Last error or notice worth showing to the user
    pub status: Option<String>,

    pub settings: HubSettings,
    pub settings_path: Option<PathBuf>,
    pub projects: Projects,
    pub projects_path: Option<PathBuf>,

    /// Key bindings, owned here and handed in by whoever builds the model
    pub bindings: BindingRegistry,
    /// Combo texts checked on every key press, in settings order
    pub combos: Vec<String>,
}

impl HubModel {
    pub fn new(settings: HubSettings, projects: Projects, bindings: BindingRegistry) -> Self {
        let combos = settings.combo_texts();
        Self {
            screen: Screen::default(),
            settings_open: false,
            text_field_active: false,
            side_panel_focused: false,
            new_project: NewProjectForm::default(),
            opened_project: None,
            status: None,
            settings,
            settings_path: None,
            projects,
            projects_path: None,
            bindings,
            combos,
        }
    }

    /// Where settings and projects are saved to
    pub fn with_paths(mut self, settings_path: Option<PathBuf>, projects_path: Option<PathBuf>) -> Self {
        self.settings_path = settings_path;
        self.projects_path = projects_path;
        self
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    /// Whether a delayed side-panel focus request may be honoured
    pub fn side_panel_focus_allowed(&self) -> bool {
        !self.text_field_active && !self.settings_open
    }

    /// Reload the combo list after the keybinds table changed
    pub fn sync_combos(&mut self) {
        self.combos = self.settings.combo_texts();
    }
}
