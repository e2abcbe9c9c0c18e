//! Process-scoped renderer slot backing the C-ABI entry symbol.
//!
//! The Rust API takes the handle as an argument; only drivers entering
//! through [`prism_shell_start`] need this slot. It is a thread-local on
//! purpose: the handle is main-thread confined, and installing from any
//! other thread would violate the single-writer discipline.

use crate::shell::{ShellConfig, run};
use prism_renderer::RendererHandle;
use std::cell::RefCell;

thread_local! {
    static INSTALLED: RefCell<Option<RendererHandle>> = const { RefCell::new(None) };
}

/// A renderer was already installed on this thread.
#[derive(Debug, thiserror::Error)]
#[error("a renderer is already installed")]
pub struct AlreadyInstalled;

/// Install the process-wide renderer consumed by [`prism_shell_start`].
/// Call once, on the main thread, before the entry symbol runs.
pub fn install_renderer(handle: RendererHandle) -> Result<(), AlreadyInstalled> {
    INSTALLED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(AlreadyInstalled);
        }
        *slot = Some(handle);
        Ok(())
    })
}

fn installed_renderer() -> Option<RendererHandle> {
    INSTALLED.with(|slot| slot.borrow().clone())
}

/// Entry symbol for drivers outside the managed runtime: a native engine
/// calls this after its own initialization to hand control to the host
/// run loop. Blocks the calling thread for the remainder of process
/// lifetime.
///
/// # Preconditions
///
/// - Called exactly once per process, on the main thread. A second call is
///   a precondition violation with undefined behavior; the host run loop's
///   re-entrancy is OS-defined, so this is documented rather than guarded.
/// - A renderer was installed via [`install_renderer`] on the same thread.
///   Starting without one is a fatal startup failure.
#[unsafe(no_mangle)]
pub extern "C" fn prism_shell_start() {
    let handle =
        installed_renderer().expect("no renderer installed before prism_shell_start");
    if let Err(err) = run(handle, ShellConfig::default()) {
        tracing::error!("shell run loop failed: {err}");
    }
}
