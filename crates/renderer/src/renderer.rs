use prism_common::AppSize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// GPU handoff payload delivered with the one-time surface creation hook.
///
/// Ownership of the presentable surface moves to the renderer here; the
/// shell keeps only bookkeeping afterwards. Device and queue resolution is
/// the renderer's job and may happen lazily at first present.
pub enum SurfaceTarget {
    /// A presentable surface created from a live OS window.
    Window {
        instance: wgpu::Instance,
        surface: wgpu::Surface<'static>,
    },
    /// No presentable target. Used by headless tests.
    Headless,
}

impl std::fmt::Debug for SurfaceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceTarget::Window { .. } => f.write_str("SurfaceTarget::Window"),
            SurfaceTarget::Headless => f.write_str("SurfaceTarget::Headless"),
        }
    }
}

/// Callback surface the shell wires a drawable to. Implemented by the
/// external renderer; the shell only forwards host events through it.
///
/// Implementations needing mutable state use interior mutability
/// (`RefCell`/`Cell`); every call arrives on the main thread.
pub trait AppRenderer {
    /// Display title queried lazily when the window is constructed.
    fn title(&self) -> String;

    /// One-time hook: the surface now exists. Fired exactly once per
    /// surface instance, never on reconfiguration.
    fn surface_created(&self, target: SurfaceTarget, frame: AppSize);

    /// The drawable's frame geometry changed. Zero-sized frames are
    /// filtered out before this is called.
    fn resized(&self, frame: AppSize);

    /// Produce one frame. Must return promptly; long work belongs on the
    /// renderer's own side of the seam.
    fn draw(&self);

    /// Adapter/device name for the window title, once the renderer has
    /// resolved one.
    fn gpu_name(&self) -> Option<String> {
        None
    }
}

/// Headless renderer that records lifecycle calls.
///
/// Stands in for a real backend in unit tests, mirroring what the shell
/// observes: creation-hook count, resize history, draw count.
#[derive(Clone, Default)]
pub struct NullRenderer {
    state: Rc<NullState>,
}

#[derive(Default)]
struct NullState {
    title: RefCell<String>,
    created: RefCell<Vec<AppSize>>,
    draws: Cell<usize>,
    resizes: RefCell<Vec<AppSize>>,
}

impl NullRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        let renderer = Self::default();
        *renderer.state.title.borrow_mut() = title.into();
        renderer
    }

    pub fn created_count(&self) -> usize {
        self.state.created.borrow().len()
    }

    /// Frames reported with each creation hook, in order.
    pub fn created_frames(&self) -> Vec<AppSize> {
        self.state.created.borrow().clone()
    }

    pub fn draw_count(&self) -> usize {
        self.state.draws.get()
    }

    pub fn resizes(&self) -> Vec<AppSize> {
        self.state.resizes.borrow().clone()
    }
}

impl AppRenderer for NullRenderer {
    fn title(&self) -> String {
        self.state.title.borrow().clone()
    }

    fn surface_created(&self, _target: SurfaceTarget, frame: AppSize) {
        self.state.created.borrow_mut().push(frame);
        tracing::debug!(%frame, "null renderer received surface");
    }

    fn resized(&self, frame: AppSize) {
        self.state.resizes.borrow_mut().push(frame);
    }

    fn draw(&self) {
        self.state.draws.set(self.state.draws.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_renderer_records_calls() {
        let renderer = NullRenderer::new("test");
        renderer.surface_created(SurfaceTarget::Headless, AppSize::new(800, 600));
        renderer.resized(AppSize::new(640, 480));
        renderer.draw();
        renderer.draw();

        assert_eq!(renderer.created_count(), 1);
        assert_eq!(renderer.draw_count(), 2);
        assert_eq!(renderer.resizes(), vec![AppSize::new(640, 480)]);
    }

    #[test]
    fn null_renderer_clones_share_state() {
        let renderer = NullRenderer::new("shared");
        let observer = renderer.clone();
        renderer.draw();
        assert_eq!(observer.draw_count(), 1);
    }

    #[test]
    fn gpu_name_defaults_to_none() {
        let renderer = NullRenderer::new("test");
        assert!(renderer.gpu_name().is_none());
    }
}
