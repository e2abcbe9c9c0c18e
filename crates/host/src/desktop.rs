use crate::scene::{SceneDescription, TerminationPolicy};
use crate::sizing::centered_origin;
use crate::state::HostState;
use prism_common::AppSize;
use prism_renderer::RendererHandle;
use std::sync::Arc;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// Desktop variant of the window host: one titled, closable, resizable,
/// minimizable top-level window sized to two-thirds of the primary display
/// and centered on it.
pub struct DesktopHost {
    window: Arc<Window>,
    state: HostState,
    policy: TerminationPolicy,
}

impl DesktopHost {
    /// Construct the single top-level window.
    ///
    /// The primary-display lookup is unchecked on purpose: a windowed
    /// desktop target without a display is not a supported configuration,
    /// and startup fails before any partial UI is shown.
    pub fn construct(event_loop: &ActiveEventLoop, handle: &RendererHandle) -> Self {
        let monitor = event_loop.primary_monitor().expect("no primary display");
        let monitor_size = monitor.size();
        let display_size = AppSize::new(monitor_size.width, monitor_size.height);

        // Phase 1: the static scene description. Phase 2, the termination
        // policy, is installed below and consulted by the run loop.
        let scene = SceneDescription::single_window(handle.title()).sized_for(Some(display_size));
        let frame = scene.default_size.expect("desktop display supplied");
        let origin = centered_origin(display_size, frame);
        tracing::info!(display = %display_size, %frame, title = %scene.title, "constructing desktop window");

        let attrs = Window::default_attributes()
            .with_title(&scene.title)
            .with_inner_size(PhysicalSize::new(frame.width, frame.height))
            .with_position(PhysicalPosition::new(origin.0, origin.1));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        Self {
            window,
            state: HostState::Uninitialized
                .advance(HostState::Constructed)
                .expect("fresh host"),
            policy: TerminationPolicy::ExitOnLastWindowClose,
        }
    }

    /// Bring the window to front as the key window.
    pub fn make_visible(&mut self) {
        self.window.focus_window();
        self.state = self
            .state
            .advance(HostState::Visible)
            .expect("host already visible or terminated");
    }

    /// Record the OS termination signal. Only the installed termination
    /// policy leads here; the host never terminates itself.
    pub fn terminated(&mut self) {
        self.state = self
            .state
            .advance(HostState::Terminated)
            .expect("host not visible yet");
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    /// The policy consulted by the run loop on window close.
    pub fn policy(&self) -> TerminationPolicy {
        self.policy
    }
}
