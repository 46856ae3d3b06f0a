//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

use std::path::PathBuf;

use crate::commands::{Cmd, SIDE_PANEL_FOCUS_DELAY};
use crate::keymap::{Action, KeyEvent};
use crate::messages::HubMsg;
use crate::model::HubModel;
use crate::settings::DebugFlag;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut HubModel, msg: HubMsg) -> Option<Cmd> {
    match msg {
        HubMsg::Key(event) => update_key(model, event),
        HubMsg::Rebind { action, combo } => rebind(model, action, combo),

        HubMsg::ShowScreen(screen) => {
            if model.screen == screen {
                return None;
            }
            tracing::debug!("Showing {} screen", screen);
            model.screen = screen;
            Some(Cmd::Redraw)
        }
        HubMsg::OpenSettings => {
            model.settings_open = true;
            Some(Cmd::Redraw)
        }
        HubMsg::CloseSettings => {
            model.settings_open = false;
            Some(Cmd::Redraw)
        }
        HubMsg::SetDebugFlag(flag, value) => set_debug_flag(model, flag, value),
        HubMsg::OpenSettingsFile => {
            let file = model.settings_path.clone();
            open_in_editor(model, file, "hub settings")
        }
        HubMsg::OpenProjectsFile => {
            let file = model.projects_path.clone();
            open_in_editor(model, file, "projects")
        }
        HubMsg::EditorClosed(result) => {
            if let Err(e) = result {
                tracing::error!("Editor failed: {}", e);
                model.status = Some(e);
                return Some(Cmd::Redraw);
            }
            None
        }

        HubMsg::TextFieldActivated => {
            model.text_field_active = true;
            model.side_panel_focused = false;
            Some(Cmd::Redraw)
        }
        HubMsg::TextFieldDeactivated => {
            model.text_field_active = false;
            None
        }
        HubMsg::PointerPressed => Some(Cmd::FocusSidePanelAfter(SIDE_PANEL_FOCUS_DELAY)),
        HubMsg::FocusSidePanel => {
            if !model.side_panel_focus_allowed() || model.side_panel_focused {
                return None;
            }
            model.side_panel_focused = true;
            Some(Cmd::Redraw)
        }

        HubMsg::SelectTemplate(template) => {
            model.new_project.template = template;
            Some(Cmd::Redraw)
        }
        HubMsg::SetProjectName(name) => {
            model.new_project.name = name;
            Some(Cmd::Redraw)
        }
        HubMsg::SetProjectLocation(location) => {
            model.new_project.location = Some(location);
            Some(Cmd::Redraw)
        }
        HubMsg::CreateProject => create_project(model),
        HubMsg::OpenProject(name) => open_project(model, &name),

        HubMsg::SaveCompleted(result) => {
            match result {
                Ok(()) => model.status = None,
                Err(e) => {
                    tracing::error!("Save failed: {}", e);
                    model.status = Some(e);
                }
            }
            Some(Cmd::Redraw)
        }
        HubMsg::Quit => {
            tracing::info!("Quit requested");
            Some(Cmd::Exit)
        }
    }
}

/// Feed a key event to the registry and turn fired actions into commands
fn update_key(model: &mut HubModel, event: KeyEvent) -> Option<Cmd> {
    let mut cmds = Vec::new();
    model
        .bindings
        .handle_event(event, model.combos.iter(), |action| match action {
            Action::CloseApp => {
                tracing::info!("Close combo pressed, exiting");
                cmds.push(Cmd::Exit);
            }
        });

    if cmds.is_empty() {
        None
    } else {
        Some(Cmd::batch(cmds))
    }
}

fn rebind(model: &mut HubModel, action: Action, combo: String) -> Option<Cmd> {
    tracing::info!(%action, %combo, "Rebinding");
    model.bindings.update_binding(action, combo.clone());
    model
        .settings
        .keybinds
        .insert(action.settings_key().to_string(), combo);
    model.sync_combos();
    Some(Cmd::Redraw)
}

fn set_debug_flag(model: &mut HubModel, flag: DebugFlag, value: bool) -> Option<Cmd> {
    if !model.settings.debugging.set(flag, value) {
        return None;
    }
    tracing::debug!(?flag, value, "Debug setting changed");

    // Keybinds and trigger mode in memory may differ from the file (rebinds,
    // CLI override); only the debugging section is written back
    match &model.settings_path {
        Some(path) => Some(Cmd::SaveDebugSettings {
            path: path.clone(),
            debugging: model.settings.debugging.clone(),
        }),
        None => {
            tracing::warn!("No settings path, change is not persisted");
            Some(Cmd::Redraw)
        }
    }
}

fn open_in_editor(model: &mut HubModel, file: Option<PathBuf>, what: &str) -> Option<Cmd> {
    let Some(file) = file else {
        tracing::warn!("No {} file to open", what);
        model.status = Some(format!("No {} file to open", what));
        return Some(Cmd::Redraw);
    };

    let editor = model.settings.engine_settings.preferred_editor_win.trim();
    if editor.is_empty() {
        tracing::warn!("No preferred editor configured, cannot open {}", file.display());
        model.status = Some("No preferred editor configured".to_string());
        return Some(Cmd::Redraw);
    }

    tracing::info!("Opening {} in {}", file.display(), editor);
    Some(Cmd::OpenInEditor {
        editor: editor.to_string(),
        file,
    })
}

fn create_project(model: &mut HubModel) -> Option<Cmd> {
    let Some(location) = model.new_project.resolved_location() else {
        model.status = Some("No location for the new project".to_string());
        return Some(Cmd::Redraw);
    };

    let name = model.new_project.name.clone();
    if let Err(e) = model.projects.add(&name, &location) {
        tracing::error!("{}", e);
        model.status = Some(e.to_string());
        return Some(Cmd::Redraw);
    }
    model.status = None;

    match &model.projects_path {
        Some(path) => Some(Cmd::SaveProjects {
            path: path.clone(),
            projects: model.projects.clone(),
        }),
        None => {
            tracing::warn!("No projects path, '{}' is not persisted", name.trim());
            Some(Cmd::Redraw)
        }
    }
}

fn open_project(model: &mut HubModel, name: &str) -> Option<Cmd> {
    match model.projects.open(name) {
        Ok(entry) => {
            tracing::info!(
                "Opening project '{}' ({})",
                name,
                entry.project_file.display()
            );
            model.opened_project = Some(name.to_string());
            model.status = None;
        }
        Err(e) => {
            tracing::error!("{}", e);
            model.status = Some(e.to_string());
        }
    }

    if model.side_panel_focus_allowed() {
        model.side_panel_focused = true;
    }
    Some(Cmd::Redraw)
}
