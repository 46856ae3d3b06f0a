//! Command-line argument parsing for the hub
//!
//! Supports:
//! - Explicit settings and project list files
//! - Overriding the keybind trigger mode
//! - Choosing the first screen shown

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::keymap::TriggerMode;
use crate::model::Screen;

/// VoltLine engine project hub
#[derive(Parser, Debug)]
#[command(name = "voltline-hub", version, about = "VoltLine engine project hub")]
pub struct CliArgs {
    /// Hub settings file (defaults to ./hub_settings.json, then the config dir)
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Project list file (defaults to ./projects.json, then the config dir)
    #[arg(long, value_name = "FILE")]
    pub projects: Option<PathBuf>,

    /// Override `keybind_trigger` from the settings file
    #[arg(long, value_enum)]
    pub trigger: Option<TriggerArg>,

    /// Screen shown at startup
    #[arg(long, value_enum, default_value_t = ScreenArg::Projects)]
    pub screen: ScreenArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriggerArg {
    /// Fire on every press while the combo is held
    Repeat,
    /// Fire once until a combo key is released
    Edge,
}

impl From<TriggerArg> for TriggerMode {
    fn from(arg: TriggerArg) -> Self {
        match arg {
            TriggerArg::Repeat => TriggerMode::Repeat,
            TriggerArg::Edge => TriggerMode::Edge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScreenArg {
    Projects,
    NewProject,
}

impl From<ScreenArg> for Screen {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Projects => Screen::Projects,
            ScreenArg::NewProject => Screen::NewProject,
        }
    }
}
