use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use voltline_hub::commands::{editor_command, Cmd};
use voltline_hub::keymap::key_event_from_winit;
use voltline_hub::messages::HubMsg;
use voltline_hub::model::HubModel;
use voltline_hub::settings::save_debugging;
use voltline_hub::update::update;

use super::icon::window_icon;

const ASYNC_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    model: HubModel,
    window: Option<Window>,
    exit_requested: bool,
    msg_tx: Sender<HubMsg>,
    msg_rx: Receiver<HubMsg>,
}

impl App {
    pub fn new(model: HubModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            window: None,
            exit_requested: false,
            msg_tx,
            msg_rx,
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let key_event = key_event_from_winit(event.physical_key, event.state, event.repeat)?;
                update(&mut self.model, HubMsg::Key(key_event))
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => update(&mut self.model, HubMsg::PointerPressed),
            WindowEvent::RedrawRequested => {
                self.sync_title();
                None
            }
            _ => None,
        }
    }

    /// Window title reflects the current screen and popup
    fn sync_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let base = &self.model.settings.window.title;
        let title = if self.model.settings_open {
            format!("{} - {} - Settings", base, self.model.screen.title())
        } else {
            format!("{} - {}", base, self.model.screen.title())
        };
        window.set_title(&title);
    }

    /// Process a command, potentially spawning async operations
    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {
                // Handled by the caller requesting a window redraw
            }
            Cmd::Exit => {
                self.exit_requested = true;
            }
            Cmd::FocusSidePanelAfter(delay) => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    let _ = tx.send(HubMsg::FocusSidePanel);
                });
            }
            Cmd::SaveDebugSettings { path, debugging } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = save_debugging(&path, &debugging).map_err(|e| e.to_string());
                    let _ = tx.send(HubMsg::SaveCompleted(result));
                });
            }
            Cmd::OpenInEditor { editor, file } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = match editor_command(&editor, &file).status() {
                        Ok(status) if status.success() => Ok(()),
                        Ok(status) => Err(format!("{} exited with {}", editor, status)),
                        Err(e) => Err(format!("Failed to launch {}: {}", editor, e)),
                    };
                    let _ = tx.send(HubMsg::EditorClosed(result));
                });
            }
            Cmd::SaveProjects { path, projects } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    let result = projects.save_to(&path).map_err(|e| e.to_string());
                    let _ = tx.send(HubMsg::SaveCompleted(result));
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Process pending async messages from the channel
    fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let settings = &self.model.settings.window;
        let window_attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(LogicalSize::new(settings.width, settings.height))
            .with_window_icon(window_icon());

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                tracing::info!("Hub window created");
                self.window = Some(window);
                self.sync_title();
            }
            Err(e) => {
                tracing::error!("Failed to create hub window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);

        let should_redraw = if is_ours && !should_exit {
            if let Some(cmd) = self.handle_event(&event) {
                let needs_redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                needs_redraw
            } else {
                false
            }
        } else {
            false
        };

        if should_exit || self.exit_requested {
            event_loop.exit();
        } else if should_redraw {
            self.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Wake periodically so messages from background threads get drained
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + ASYNC_POLL_INTERVAL));

        if self.process_async_messages() {
            self.request_redraw();
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
