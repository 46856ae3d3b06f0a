use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use voltline_hub::cli::CliArgs;
use voltline_hub::model::HubModel;
use voltline_hub::projects::Projects;
use voltline_hub::settings::{log_source, HubSettings};

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Read before logging exists; where settings came from is logged once
    // tracing is up
    let (loaded, settings_path) = HubSettings::read(args.settings.as_deref());
    let mut settings = match &loaded {
        Ok(settings) => settings.clone(),
        Err(_) => HubSettings::embedded_default(),
    };
    if let Some(trigger) = args.trigger {
        settings.keybind_trigger = trigger.into();
    }

    voltline_hub::tracing::init(&settings);
    log_source(&loaded, settings_path.as_deref());
    if loaded.is_err() {
        tracing::warn!("Settings changes will not be saved until the file parses");
    }

    let (projects, projects_path) = Projects::load(args.projects.as_deref());
    let bindings = settings.binding_registry();

    let model = HubModel::new(settings, projects, bindings)
        .with_paths(settings_path, projects_path)
        .with_screen(args.screen.into());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model);

    event_loop.run_app(&mut app)?;

    Ok(())
}
