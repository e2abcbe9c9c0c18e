use crate::renderer::{AppRenderer, SurfaceTarget};
use prism_common::AppSize;
use std::rc::Rc;

/// Shared reference to the process-wide renderer.
///
/// Constructed once before any window exists and passed explicitly into the
/// host and view adapter; nothing looks it up ambiently. Clones are cheap
/// and all refer to the same renderer — identity is pointer identity, which
/// is what the single-binding invariant is checked against.
#[derive(Clone)]
pub struct RendererHandle {
    inner: Rc<dyn AppRenderer>,
}

impl RendererHandle {
    pub fn new(renderer: impl AppRenderer + 'static) -> Self {
        Self {
            inner: Rc::new(renderer),
        }
    }

    /// Whether two handles refer to the same renderer instance.
    pub fn same(&self, other: &RendererHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn title(&self) -> String {
        self.inner.title()
    }

    pub fn gpu_name(&self) -> Option<String> {
        self.inner.gpu_name()
    }

    pub fn surface_created(&self, target: SurfaceTarget, frame: AppSize) {
        tracing::debug!(%frame, "surface created, notifying renderer");
        self.inner.surface_created(target, frame);
    }

    pub fn resized(&self, frame: AppSize) {
        self.inner.resized(frame);
    }

    pub fn draw(&self) {
        self.inner.draw();
    }
}

impl std::fmt::Debug for RendererHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererHandle")
            .field("title", &self.inner.title())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::NullRenderer;

    #[test]
    fn clones_are_the_same_handle() {
        let handle = RendererHandle::new(NullRenderer::new("a"));
        let clone = handle.clone();
        assert!(handle.same(&clone));
    }

    #[test]
    fn distinct_renderers_are_distinct_handles() {
        let a = RendererHandle::new(NullRenderer::new("a"));
        let b = RendererHandle::new(NullRenderer::new("b"));
        assert!(!a.same(&b));
    }

    #[test]
    fn handle_forwards_to_renderer() {
        let renderer = NullRenderer::new("fwd");
        let handle = RendererHandle::new(renderer.clone());

        assert_eq!(handle.title(), "fwd");
        handle.surface_created(SurfaceTarget::Headless, AppSize::new(100, 100));
        handle.resized(AppSize::new(50, 50));
        handle.draw();

        assert_eq!(renderer.created_count(), 1);
        assert_eq!(renderer.resizes(), vec![AppSize::new(50, 50)]);
        assert_eq!(renderer.draw_count(), 1);
    }
}
