//! Shared types for the prism shell.
//!
//! # Invariants
//! - All sizes are in physical pixels; DPI scaling is the host OS's concern.

pub mod types;

pub use types::AppSize;

pub fn crate_info() -> &'static str {
    "prism-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
