use crate::sizing::initial_frame;
use crate::state::HostState;
use prism_common::AppSize;

/// What the host run loop does when windows go away.
///
/// Kept separate from scene description so policy can be tested without
/// constructing any scene (and vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminationPolicy {
    /// The process terminates when the last window closes. Installed by the
    /// desktop host; there is no background/headless continuation.
    #[default]
    ExitOnLastWindowClose,
    /// The run loop outlives its windows. Mobile scene lifecycles own
    /// process lifetime, not this layer.
    ContinueWithoutWindows,
}

impl TerminationPolicy {
    pub fn should_exit(self, open_windows: usize) -> bool {
        match self {
            TerminationPolicy::ExitOnLastWindowClose => open_windows == 0,
            TerminationPolicy::ContinueWithoutWindows => false,
        }
    }
}

/// A connected OS window-scene delivered at mobile launch. Its bounds are
/// authoritative; the shell never computes a mobile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneBinding {
    pub bounds: AppSize,
}

/// Mobile variant of the window host: binds to the first connected scene
/// and makes its window key and visible.
#[derive(Debug)]
pub struct MobileHost {
    binding: SceneBinding,
    state: HostState,
}

impl MobileHost {
    /// Bind the first connected scene.
    ///
    /// Launching with zero connected scenes is an unsupported configuration
    /// and fails fast; there is no idle state to wait in.
    pub fn attach(scenes: Vec<SceneBinding>) -> Self {
        let binding = scenes
            .into_iter()
            .next()
            .expect("no connected window scene at launch");
        tracing::info!(bounds = %binding.bounds, "bound to connected scene");
        Self {
            binding,
            state: HostState::Uninitialized
                .advance(HostState::Constructed)
                .expect("fresh host"),
        }
    }

    pub fn make_key_and_visible(&mut self) {
        self.state = self
            .state
            .advance(HostState::Visible)
            .expect("host already visible or terminated");
    }

    /// OS-provided scene bounds, passed through untouched.
    pub fn bounds(&self) -> AppSize {
        self.binding.bounds
    }

    pub fn state(&self) -> HostState {
        self.state
    }
}

/// Phase 1 of the declarative variant: a static description of the single
/// window group. Realizing it (and installing the termination policy,
/// phase 2) happens later and elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDescription {
    pub title: String,
    /// Present only on windowed desktop targets, where it follows the same
    /// display/1.5 law as the imperative desktop host.
    pub default_size: Option<AppSize>,
}

impl SceneDescription {
    pub fn single_window(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default_size: None,
        }
    }

    /// Derive the default size from the primary display on desktop targets.
    /// On mobile targets no display is supplied and this is a no-op: the OS
    /// owns sizing there.
    pub fn sized_for(mut self, display: Option<AppSize>) -> Self {
        self.default_size = display.map(initial_frame);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_policy_exits_on_last_close() {
        let policy = TerminationPolicy::ExitOnLastWindowClose;
        assert!(!policy.should_exit(2));
        assert!(!policy.should_exit(1));
        assert!(policy.should_exit(0));
    }

    #[test]
    fn mobile_policy_never_exits() {
        let policy = TerminationPolicy::ContinueWithoutWindows;
        assert!(!policy.should_exit(0));
    }

    #[test]
    fn attach_binds_first_scene() {
        // One connected scene at launch: exactly one window, bound to it,
        // with the OS bounds passed through untouched.
        let host = MobileHost::attach(vec![
            SceneBinding {
                bounds: AppSize::new(390, 844),
            },
            SceneBinding {
                bounds: AppSize::new(800, 800),
            },
        ]);
        assert_eq!(host.bounds(), AppSize::new(390, 844));
        assert_eq!(host.state(), HostState::Constructed);
    }

    #[test]
    fn attach_then_visible() {
        let mut host = MobileHost::attach(vec![SceneBinding {
            bounds: AppSize::new(390, 844),
        }]);
        host.make_key_and_visible();
        assert_eq!(host.state(), HostState::Visible);
    }

    #[test]
    #[should_panic(expected = "no connected window scene")]
    fn attach_with_zero_scenes_fails_fast() {
        let _ = MobileHost::attach(Vec::new());
    }

    #[test]
    fn description_sizes_from_desktop_display() {
        let desc =
            SceneDescription::single_window("demo").sized_for(Some(AppSize::new(1500, 900)));
        assert_eq!(desc.default_size, Some(AppSize::new(1000, 600)));
    }

    #[test]
    fn description_sizing_is_noop_on_mobile() {
        let desc = SceneDescription::single_window("demo").sized_for(None);
        assert_eq!(desc.default_size, None);
    }
}
