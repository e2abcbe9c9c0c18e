use prism_common::AppSize;
use prism_host::{DesktopHost, FpsCounter, compose_title};
use prism_renderer::RendererHandle;
use prism_surface::{SurfaceDescriptor, ViewAdapter, WindowDrawable};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

/// Behavior switches supplied by the embedding binary.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Escape requests exit. Desktop convenience; off for embeddings that
    /// own their keyboard handling.
    pub exit_on_escape: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            exit_on_escape: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// The application handler driven by the host run loop.
///
/// Construction happens on the first `resumed` delivery; every later
/// delivery only re-applies the idempotent surface configuration. Both the
/// desktop activation path and the mobile scene-connected path arrive here,
/// which is what keeps the configuration step identical across hosts.
pub struct ShellApp {
    adapter: ViewAdapter,
    config: ShellConfig,
    host: Option<DesktopHost>,
    surface: Option<SurfaceDescriptor<WindowDrawable>>,
    fps: FpsCounter,
}

impl ShellApp {
    pub fn new(handle: RendererHandle, config: ShellConfig) -> Self {
        Self {
            adapter: ViewAdapter::new(handle),
            config,
            host: None,
            surface: None,
            fps: FpsCounter::new(),
        }
    }

    pub fn handle(&self) -> &RendererHandle {
        self.adapter.handle()
    }

    fn redraw(&mut self) {
        let (Some(host), Some(surface)) = (&self.host, &self.surface) else {
            return;
        };
        let Some(delegate) = surface.delegate() else {
            // Unset delegate at paint time is a silent no-render condition.
            return;
        };
        delegate.draw();

        let fps = self.fps.frame();
        let title = compose_title(&delegate.title(), delegate.gpu_name().as_deref(), fps);
        host.set_title(&title);
        host.request_redraw();
    }
}

impl ApplicationHandler for ShellApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(surface) = &mut self.surface {
            // The host framework revalidated an existing view; the binding
            // gets re-applied, nothing else changes.
            self.adapter.reconfigure(surface);
            return;
        }

        let mut host = DesktopHost::construct(event_loop, self.adapter.handle());
        let drawable = WindowDrawable::new(host.window().clone());
        let surface = self.adapter.create_surface(drawable);
        host.make_visible();
        host.request_redraw();

        self.host = Some(host);
        self.surface = Some(surface);
        tracing::info!("window context constructed and visible");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(host) = &mut self.host {
                    host.terminated();
                    if host.policy().should_exit(0) {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                let frame = AppSize::new(new_size.width, new_size.height);
                if frame.is_empty() {
                    // Minimize reports 0x0; not a real geometry change.
                    return;
                }
                if let Some(delegate) = self.surface.as_ref().and_then(|s| s.delegate()) {
                    delegate.resized(frame);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } if self.config.exit_on_escape => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }
}

/// Hand control to the host run loop. Blocks the calling thread until the
/// installed termination policy (or the OS) ends the loop.
pub fn run(handle: RendererHandle, config: ShellConfig) -> Result<(), ShellError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ShellApp::new(handle, config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
