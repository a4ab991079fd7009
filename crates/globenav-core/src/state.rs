//! Per-control runtime state.

/// Phase of a reset control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlPhase {
    /// Ready to accept a reset.
    #[default]
    Idle,
    /// A reset is being dispatched.
    Resetting,
}

/// Lock and activity flags owned by a control for its whole lifetime.
///
/// `active` only covers the synchronous dispatch of a reset. It is cleared as
/// soon as the transition request has been handed to the map, not when the
/// camera arrives.
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    /// Set by the embedding application to disable the control.
    pub navigation_locked: bool,
    /// True while a reset is being dispatched.
    pub active: bool,
}

impl ControlState {
    /// Creates a state with the given initial lock.
    pub fn new(navigation_locked: bool) -> Self {
        Self {
            navigation_locked,
            active: false,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> ControlPhase {
        if self.active {
            ControlPhase::Resetting
        } else {
            ControlPhase::Idle
        }
    }

    /// Moves from `Idle` to `Resetting`. Returns false if a reset is already running.
    pub fn begin(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    /// Returns to `Idle`.
    pub fn finish(&mut self) {
        self.active = false;
    }
}
