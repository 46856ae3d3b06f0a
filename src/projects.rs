//! Persistent project list
//!
//! `projects.json` maps a project name to its `.voltproj` file. Entries
//! keep file order so the projects screen lists them as written.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config_paths;

/// Extension every project file must carry
pub const PROJECT_EXTENSION: &str = "voltproj";

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("{}: is not a valid VoltLine project type (expected .voltproj)", .0.display())]
    InvalidProjectType(PathBuf),
    #[error("no project named '{0}'")]
    UnknownProject(String),
    #[error("project name must not be empty")]
    EmptyName,
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize projects: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single project listed in the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub project_file: PathBuf,
}

impl ProjectEntry {
    /// Check the file carries the project extension
    pub fn validate(&self) -> Result<(), ProjectError> {
        let valid = self
            .project_file
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == PROJECT_EXTENSION);

        if valid {
            Ok(())
        } else {
            Err(ProjectError::InvalidProjectType(self.project_file.clone()))
        }
    }
}

/// Template a new project starts from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectTemplate {
    #[default]
    Empty,
}

impl std::fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectTemplate::Empty => write!(f, "Empty"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projects {
    #[serde(default)]
    pub projects: IndexMap<String, ProjectEntry>,
}

impl Projects {
    pub fn load_from(path: &Path) -> Result<Self, ProjectError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ProjectError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the project list, or an empty one if none can be read
    pub fn load(explicit: Option<&Path>) -> (Self, Option<PathBuf>) {
        let Some(path) = config_paths::locate(explicit, config_paths::PROJECTS_FILE_NAME) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            tracing::debug!("No project list at {}", path.display());
            return (Self::default(), Some(path));
        }

        match Self::load_from(&path) {
            Ok(projects) => {
                tracing::info!(
                    "Loaded {} projects from {}",
                    projects.projects.len(),
                    path.display()
                );
                (projects, Some(path))
            }
            Err(e) => {
                tracing::warn!("{}, starting with an empty project list", e);
                (Self::default(), Some(path))
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ProjectError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ProjectError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ProjectError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Add (or replace) `name`, with its file at `<location>/<name>.voltproj`
    pub fn add(&mut self, name: &str, location: &Path) -> Result<&ProjectEntry, ProjectError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProjectError::EmptyName);
        }

        let entry = ProjectEntry {
            project_file: location.join(format!("{}.{}", name, PROJECT_EXTENSION)),
        };
        self.projects.insert(name.to_string(), entry);
        tracing::info!("Added project '{}'", name);
        Ok(&self.projects[name])
    }

    /// Look up `name` and check its project file
    pub fn open(&self, name: &str) -> Result<&ProjectEntry, ProjectError> {
        let entry = self
            .projects
            .get(name)
            .ok_or_else(|| ProjectError::UnknownProject(name.to_string()))?;
        entry.validate()?;
        Ok(entry)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }
}

/// Suggested location for a new project: `<Documents>/VoltLine Projects/<name>`
pub fn default_location(name: &str) -> Option<PathBuf> {
    config_paths::projects_root().map(|root| root.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_builds_project_file() {
        let mut projects = Projects::default();
        let entry = projects.add("Space Game", Path::new("/work/Space Game")).unwrap();
        assert_eq!(
            entry.project_file,
            PathBuf::from("/work/Space Game/Space Game.voltproj")
        );
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut projects = Projects::default();
        assert!(matches!(
            projects.add("   ", Path::new("/work")),
            Err(ProjectError::EmptyName)
        ));
    }

    #[test]
    fn test_validate_rejects_other_extension() {
        let entry = ProjectEntry {
            project_file: PathBuf::from("/work/game.json"),
        };
        let err = entry.validate().unwrap_err();
        assert!(err.to_string().contains("not a valid VoltLine project type"));
    }

    #[test]
    fn test_open_unknown() {
        let projects = Projects::default();
        assert!(matches!(
            projects.open("missing"),
            Err(ProjectError::UnknownProject(_))
        ));
    }

    #[test]
    fn test_order_preserved() {
        let json = r#"{ "projects": {
            "Zeta": { "project_file": "z/Zeta.voltproj" },
            "Alpha": { "project_file": "a/Alpha.voltproj" }
        } }"#;
        let projects: Projects = serde_json::from_str(json).unwrap();
        assert_eq!(projects.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");

        let mut projects = Projects::default();
        projects.add("Demo", dir.path()).unwrap();
        projects.save_to(&path).unwrap();

        let (loaded, located) = Projects::load(Some(&path));
        assert_eq!(loaded, projects);
        assert_eq!(located, Some(path));
    }

    #[test]
    fn test_default_location_ends_with_name() {
        if let Some(location) = default_location("New Project") {
            assert!(location.ends_with("VoltLine Projects/New Project"));
        }
    }
}
