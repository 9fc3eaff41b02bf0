use anyhow::Context;
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx, SetupError, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::{InputState, MouseButton};
use crate::render::RenderCtx;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Surface size in logical pixels.
    pub size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quadclick".to_string(),
            size: LogicalSize::new(1000.0, 700.0),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, runs `app` on it and blocks until the window closes.
    ///
    /// Returns the setup error that ended the session early, if any.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<(), SetupError>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new()
            .context("failed to create winit EventLoop")
            .map_err(|e| SetupError::context_unavailable(&e))?;

        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")
            .map_err(|e| SetupError::context_unavailable(&e))?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    frames: u64,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    fatal: Option<SetupError>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: SetupError) {
        log::error!("{err}");
        self.window = None;
        self.fatal = Some(err);
        event_loop.exit();
    }

    /// Creates the window + GPU context and runs the app's setup hook.
    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry, SetupError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")
            .map_err(|e| SetupError::context_unavailable(&e))?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            frames: 0,
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .map_err(|e| SetupError::context_unavailable(&e))?;

        let app = &mut self.app;
        entry.with(|fields| {
            let window = WindowCtx {
                window: fields.window,
            };
            let size = fields.gpu.size();
            let rctx = RenderCtx::new(
                fields.gpu.device(),
                fields.gpu.queue(),
                fields.gpu.surface_format(),
                Viewport::new(size.width as f32, size.height as f32),
            );
            app.on_setup(&window, &rctx)
        })?;

        log::info!(
            "window ready: \"{}\" {}x{}",
            self.config.title,
            self.config.size.width,
            self.config.size.height
        );
        Ok(entry)
    }

    /// Drives one frame through the app.
    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let (app, Some(entry)) = (&mut self.app, self.window.as_mut()) else {
            return;
        };

        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    window: fields.window,
                },
                gpu: fields.gpu,
                frame_index: *fields.frames,
            };
            let control = app.on_frame(&mut ctx);
            *fields.frames += 1;
            control
        });

        match control {
            AppControl::Exit => event_loop.exit(),
            AppControl::Redraw => entry.with_window(|w| w.request_redraw()),
            AppControl::Continue => {}
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.fatal.is_some() {
            return;
        }

        match self.open_window(event_loop) {
            Ok(entry) => {
                // Initial frame.
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Redraws are driven by state changes only.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, window) = (&mut self.app, &mut self.window);

        let Some(entry) = window.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        let mut control = AppControl::Continue;

        entry.with_mut(|fields| {
            let Some(ev) = translate_window_event(fields.window, fields.input_state, &event) else {
                return;
            };
            let Some(click) = fields.input_state.apply_event(&ev) else {
                return;
            };
            // DOM `click` semantics: primary button only.
            if click.button == MouseButton::Left {
                let window = WindowCtx {
                    window: fields.window,
                };
                control = app.on_pointer_click(&window, click);
            }
        });

        match control {
            AppControl::Exit => {
                event_loop.exit();
                return;
            }
            // Drawn before this callback returns, so every accepted change gets
            // exactly one frame of its own.
            AppControl::Redraw => self.present(event_loop),
            AppControl::Continue => {}
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.window = None;
                event_loop.exit();
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => self.present(event_loop),

            _ => {}
        }
    }
}
