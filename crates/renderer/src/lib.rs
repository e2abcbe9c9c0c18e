//! Renderer Handle: the seam between the shell and the external renderer.
//!
//! # Invariants
//! - Exactly one renderer exists per process; every surface binds to it.
//! - All calls happen on the main thread. The handle is deliberately not
//!   `Send`; background surface creation would need a different design.
//! - The bridge never resolves a GPU device. The renderer does that after
//!   receiving the one-time creation hook, and reports its own failures.

pub mod handle;
pub mod renderer;

pub use handle::RendererHandle;
pub use renderer::{AppRenderer, NullRenderer, SurfaceTarget};
