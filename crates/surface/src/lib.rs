//! View Adapter: translates host view lifecycle events into one uniform
//! configuration call against the renderer handle.
//!
//! # Invariants
//! - After first configuration a surface's delegate always equals the
//!   process-wide renderer handle; it is never left unset or stale.
//! - Configuration is idempotent: applying it twice is observably the same
//!   as applying it once.
//! - The creation hook fires exactly once per surface instance, no matter
//!   how many reconfigurations follow.

pub mod adapter;
pub mod drawable;

pub use adapter::{SurfaceDescriptor, SurfaceId, ViewAdapter};
pub use drawable::{Drawable, WindowDrawable};
