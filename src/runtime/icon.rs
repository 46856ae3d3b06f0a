use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use winit::window::Icon;

use voltline_hub::config_paths;

/// First `logo.png` found next to the binary's working dir or in the config dir
pub fn find_icon() -> Option<PathBuf> {
    let local = PathBuf::from(config_paths::ICON_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    config_paths::config_dir()
        .map(|dir| dir.join(config_paths::ICON_FILE_NAME))
        .filter(|path| path.is_file())
}

pub fn load_icon(path: &Path) -> Result<Icon> {
    let image = image::open(path)
        .with_context(|| format!("Failed to open icon {}", path.display()))?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Icon::from_rgba(image.into_raw(), width, height)
        .with_context(|| format!("Invalid icon {}", path.display()))
}

/// Icon for the hub window, if one is available and loads cleanly
pub fn window_icon() -> Option<Icon> {
    let path = find_icon()?;
    match load_icon(&path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("{:#}", e);
            None
        }
    }
}
