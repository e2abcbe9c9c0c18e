use crate::drawable::Drawable;
use prism_common::AppSize;
use prism_renderer::RendererHandle;
use uuid::Uuid;

/// Unique identifier for a surface instance.
///
/// The one-time creation hook is scoped to this identity: a recreated
/// surface gets a new id and a fresh hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub Uuid);

impl SurfaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured drawable plus the bridge's bookkeeping for it: identity and
/// whether the creation hook has fired.
pub struct SurfaceDescriptor<D: Drawable> {
    id: SurfaceId,
    drawable: D,
    creation_notified: bool,
}

impl<D: Drawable> SurfaceDescriptor<D> {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn frame(&self) -> AppSize {
        self.drawable.frame()
    }

    pub fn delegate(&self) -> Option<&RendererHandle> {
        self.drawable.delegate()
    }

    pub fn device_bound(&self) -> bool {
        self.drawable.device_bound()
    }

    pub fn creation_notified(&self) -> bool {
        self.creation_notified
    }

    pub fn drawable(&self) -> &D {
        &self.drawable
    }
}

/// Applies the single configuration routine to surfaces, identically on
/// first creation and on every later host-triggered update.
pub struct ViewAdapter {
    handle: RendererHandle,
}

impl ViewAdapter {
    pub fn new(handle: RendererHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &RendererHandle {
        &self.handle
    }

    /// Take ownership of a freshly made drawable, configure it, and fire
    /// the renderer's one-time creation hook.
    ///
    /// The delegate assignment is observably complete before this returns;
    /// an unbound delegate at paint time is a silent no-render condition,
    /// not a reported error, so the ordering matters.
    pub fn create_surface<D: Drawable>(&self, drawable: D) -> SurfaceDescriptor<D> {
        let mut surface = SurfaceDescriptor {
            id: SurfaceId::new(),
            drawable,
            creation_notified: false,
        };
        self.reconfigure(&mut surface);

        let frame = surface.frame();
        let target = surface.drawable.take_target();
        self.handle.surface_created(target, frame);
        surface.creation_notified = true;
        tracing::debug!(id = ?surface.id, %frame, "surface created and configured");

        surface
    }

    /// Idempotently re-apply the delegate binding.
    ///
    /// Safe on every host-triggered update, including redundant ones; frame
    /// geometry, device binding, and the creation-hook flag are untouched.
    pub fn reconfigure<D: Drawable>(&self, surface: &mut SurfaceDescriptor<D>) {
        surface.drawable.set_delegate(self.handle.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_renderer::{NullRenderer, SurfaceTarget};

    /// Drawable test double with directly inspectable state.
    struct FakeDrawable {
        frame: AppSize,
        delegate: Option<RendererHandle>,
        device_bound: bool,
        targets_taken: usize,
    }

    impl FakeDrawable {
        fn new(frame: AppSize) -> Self {
            Self {
                frame,
                delegate: None,
                device_bound: false,
                targets_taken: 0,
            }
        }
    }

    impl Drawable for FakeDrawable {
        fn frame(&self) -> AppSize {
            self.frame
        }

        fn delegate(&self) -> Option<&RendererHandle> {
            self.delegate.as_ref()
        }

        fn set_delegate(&mut self, handle: RendererHandle) {
            self.delegate = Some(handle);
        }

        fn device_bound(&self) -> bool {
            self.device_bound
        }

        fn take_target(&mut self) -> SurfaceTarget {
            self.targets_taken += 1;
            SurfaceTarget::Headless
        }
    }

    fn adapter() -> (NullRenderer, ViewAdapter) {
        let renderer = NullRenderer::new("test");
        let adapter = ViewAdapter::new(RendererHandle::new(renderer.clone()));
        (renderer, adapter)
    }

    #[test]
    fn create_surface_configures_before_returning() {
        let (renderer, adapter) = adapter();
        let surface = adapter.create_surface(FakeDrawable::new(AppSize::new(800, 600)));

        let delegate = surface.delegate().expect("delegate bound");
        assert!(delegate.same(adapter.handle()));
        assert!(surface.creation_notified());
        assert_eq!(renderer.created_count(), 1);
    }

    #[test]
    fn creation_hook_fires_exactly_once() {
        let (renderer, adapter) = adapter();
        let mut surface = adapter.create_surface(FakeDrawable::new(AppSize::new(800, 600)));

        adapter.reconfigure(&mut surface);
        adapter.reconfigure(&mut surface);
        adapter.reconfigure(&mut surface);

        assert_eq!(renderer.created_count(), 1);
        assert_eq!(surface.drawable().targets_taken, 1);
    }

    #[test]
    fn reconfigure_is_idempotent() {
        // Scenario: an update fires on an already-configured surface with
        // the same handle. Delegate, frame, and device binding must all be
        // unchanged afterwards.
        let (_renderer, adapter) = adapter();
        let mut drawable = FakeDrawable::new(AppSize::new(1024, 768));
        drawable.device_bound = true;
        let mut surface = adapter.create_surface(drawable);

        let frame_before = surface.frame();
        let bound_before = surface.device_bound();

        adapter.reconfigure(&mut surface);
        adapter.reconfigure(&mut surface);

        assert!(surface.delegate().unwrap().same(adapter.handle()));
        assert_eq!(surface.frame(), frame_before);
        assert_eq!(surface.device_bound(), bound_before);
    }

    #[test]
    fn delegate_never_points_at_a_foreign_handle() {
        let (_renderer, adapter) = adapter();
        let other = RendererHandle::new(NullRenderer::new("other"));

        let mut surface = adapter.create_surface(FakeDrawable::new(AppSize::new(640, 480)));
        adapter.reconfigure(&mut surface);

        let delegate = surface.delegate().unwrap();
        assert!(delegate.same(adapter.handle()));
        assert!(!delegate.same(&other));
    }

    #[test]
    fn recreated_surfaces_get_fresh_identity_and_hook() {
        let (renderer, adapter) = adapter();
        let first = adapter.create_surface(FakeDrawable::new(AppSize::new(800, 600)));
        let second = adapter.create_surface(FakeDrawable::new(AppSize::new(800, 600)));

        assert_ne!(first.id(), second.id());
        assert_eq!(renderer.created_count(), 2);
    }

    #[test]
    fn creation_hook_reports_the_initial_frame() {
        let (renderer, adapter) = adapter();
        let _surface = adapter.create_surface(FakeDrawable::new(AppSize::new(1000, 600)));

        assert_eq!(renderer.created_frames(), vec![AppSize::new(1000, 600)]);
        // Creation is not a resize.
        assert!(renderer.resizes().is_empty());
    }
}
