//! Window/Scene Host: owns the top-level container and gives it a
//! platform-appropriate initial geometry.
//!
//! # Invariants
//! - Exactly one window context exists per process in the single-window
//!   case.
//! - Host state only moves forward: Uninitialized -> Constructed ->
//!   Visible -> Terminated. There is no Hidden intermediate.
//! - Desktop sizing is display/1.5 in both dimensions, then centered.
//!   Mobile never computes a size; the OS-provided scene bounds are
//!   authoritative.

pub mod desktop;
pub mod scene;
pub mod sizing;
pub mod state;
pub mod title;

pub use desktop::DesktopHost;
pub use scene::{MobileHost, SceneBinding, SceneDescription, TerminationPolicy};
pub use sizing::{centered_origin, initial_frame};
pub use state::{HostState, InvalidTransition};
pub use title::{FpsCounter, compose_title};
