//! Lifecycle entry point: hands control to the host OS run loop and
//! forwards its view lifecycle events through the view adapter.
//!
//! # Invariants
//! - The run loop is entered once and never re-entered recursively.
//! - Everything here executes on the main thread; the only suspension
//!   point is the run loop itself.
//! - Surface configuration on a repeat `resumed` is byte-for-byte the same
//!   routine as on first creation, minus the one-time creation hook.

pub mod registry;
pub mod shell;

pub use registry::{AlreadyInstalled, install_renderer};
pub use shell::{ShellApp, ShellConfig, ShellError, run};
