/// Physical pixel extent of a display, window, or drawable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppSize {
    pub width: u32,
    pub height: u32,
}

impl AppSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero. Minimized windows on some
    /// platforms report 0x0 and must not reach swapchain configuration.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamp both dimensions to at least one pixel. Swapchain configuration
    /// rejects zero extents.
    pub fn clamped_nonzero(self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }

    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl std::fmt::Display for AppSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
