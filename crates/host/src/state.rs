/// Lifecycle state of a window context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Uninitialized,
    /// Frame or scene assigned; not yet on screen.
    Constructed,
    /// Key window, frontmost.
    Visible,
    /// Reached only through the host OS's termination signal (or the
    /// installed desktop termination policy).
    Terminated,
}

/// A transition that would move the state machine backwards or skip a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid host state transition: {from:?} -> {to:?}")]
pub struct InvalidTransition {
    pub from: HostState,
    pub to: HostState,
}

impl HostState {
    /// Advance to the next state. Transitions are one-directional and
    /// stepwise; anything else is an error.
    pub fn advance(self, to: HostState) -> Result<HostState, InvalidTransition> {
        use HostState::*;
        match (self, to) {
            (Uninitialized, Constructed) | (Constructed, Visible) | (Visible, Terminated) => Ok(to),
            _ => Err(InvalidTransition { from: self, to }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HostState::*;

    #[test]
    fn forward_chain_is_legal() {
        let state = Uninitialized;
        let state = state.advance(Constructed).unwrap();
        let state = state.advance(Visible).unwrap();
        let state = state.advance(Terminated).unwrap();
        assert_eq!(state, Terminated);
    }

    #[test]
    fn backwards_and_skipping_are_errors() {
        assert!(Visible.advance(Constructed).is_err());
        assert!(Uninitialized.advance(Visible).is_err());
        assert!(Terminated.advance(Visible).is_err());
        assert!(Constructed.advance(Constructed).is_err());
    }

    #[test]
    fn error_reports_both_states() {
        let err = Visible.advance(Uninitialized).unwrap_err();
        assert_eq!(err.from, Visible);
        assert_eq!(err.to, Uninitialized);
    }
}
