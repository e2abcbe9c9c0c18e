use prism_common::AppSize;
use prism_renderer::{RendererHandle, SurfaceTarget};
use std::sync::Arc;
use winit::window::Window;

/// Capability set the view adapter needs from a drawable: frame geometry,
/// a delegate slot, and a one-shot GPU handoff payload.
///
/// The three host variants (desktop window, mobile scene surface, headless
/// test double) all satisfy this contract even though the underlying OS
/// objects differ.
pub trait Drawable {
    /// Current frame geometry in physical pixels.
    fn frame(&self) -> AppSize;

    fn delegate(&self) -> Option<&RendererHandle>;

    /// Assign the delegate. Must touch nothing else; the adapter calls this
    /// on every host-triggered update.
    fn set_delegate(&mut self, handle: RendererHandle);

    /// Whether the rendering backend has taken ownership of the presentable
    /// target. Actual device resolution happens behind the renderer seam
    /// and is not observable from the bridge.
    fn device_bound(&self) -> bool;

    /// Yield the GPU handoff payload. Called exactly once, from the
    /// creation hook; later calls return [`SurfaceTarget::Headless`].
    fn take_target(&mut self) -> SurfaceTarget;
}

/// A drawable backed by a live winit window.
///
/// The presentable wgpu surface is created eagerly from the window so the
/// renderer can be handed a ready target at the creation hook; device and
/// queue resolution stays deferred on the renderer's side (a failure there
/// surfaces when the renderer first presents, not here).
pub struct WindowDrawable {
    window: Arc<Window>,
    delegate: Option<RendererHandle>,
    target: Option<(wgpu::Instance, wgpu::Surface<'static>)>,
}

impl WindowDrawable {
    /// Wrap a live window. Surface creation failure is a fatal startup
    /// condition: a windowed target whose window cannot back a presentable
    /// surface is not a supported configuration.
    pub fn new(window: Arc<Window>) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        Self {
            window,
            delegate: None,
            target: Some((instance, surface)),
        }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

impl Drawable for WindowDrawable {
    fn frame(&self) -> AppSize {
        let size = self.window.inner_size();
        AppSize::new(size.width, size.height)
    }

    fn delegate(&self) -> Option<&RendererHandle> {
        self.delegate.as_ref()
    }

    fn set_delegate(&mut self, handle: RendererHandle) {
        self.delegate = Some(handle);
    }

    fn device_bound(&self) -> bool {
        self.target.is_none()
    }

    fn take_target(&mut self) -> SurfaceTarget {
        match self.target.take() {
            Some((instance, surface)) => SurfaceTarget::Window { instance, surface },
            None => SurfaceTarget::Headless,
        }
    }
}
