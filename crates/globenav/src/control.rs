//! Navigation controls.

use globenav_core::{resolve, ControlPhase, ControlState, ResetViewOptions};

use crate::context::MapContext;
use crate::gate::InputGate;
use crate::transition::{CameraTransitionController, ResetOutcome};

/// A toolbar control that acts on the map camera when activated.
pub trait NavigationControl {
    /// Performs the control's action. Does nothing while the control is locked
    /// or camera input is disabled.
    fn activate(&mut self);

    /// Locks or unlocks the control.
    fn set_locked(&mut self, locked: bool);

    /// Whether the control is locked.
    fn is_locked(&self) -> bool;

    /// Whether the control is in the middle of its action.
    fn is_active(&self) -> bool;
}

/// Resets the camera to the configured default view, or re-centres on the
/// tracked entity when one is being followed.
///
/// The control owns its [`MapContext`]. Pass `&mut M` to keep ownership of the
/// map elsewhere.
pub struct ResetViewControl<M: MapContext> {
    context: M,
    options: ResetViewOptions,
    state: ControlState,
}

impl<M: MapContext> ResetViewControl<M> {
    /// Creates a control. The initial lock comes from `options.navigation_locked`.
    pub fn new(context: M, options: ResetViewOptions) -> Self {
        let state = ControlState::new(options.navigation_locked);
        Self {
            context,
            options,
            state,
        }
    }

    /// The map context.
    pub fn context(&self) -> &M {
        &self.context
    }

    /// Mutable access to the map context.
    pub fn context_mut(&mut self) -> &mut M {
        &mut self.context
    }

    /// Consumes the control and returns its map context.
    pub fn into_context(self) -> M {
        self.context
    }

    /// The current options.
    pub fn options(&self) -> &ResetViewOptions {
        &self.options
    }

    /// Replaces the options. The current lock is kept.
    pub fn set_options(&mut self, options: ResetViewOptions) {
        self.options = options;
    }

    /// The lock and activity flags.
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Whether a reset is being dispatched.
    pub fn phase(&self) -> ControlPhase {
        self.state.phase()
    }

    /// Runs one reset and reports what it did.
    ///
    /// Never fails: a rejected configuration or a failed zoom is logged and
    /// reported in the outcome, leaving the camera where it was. The control is
    /// back to idle when this returns, even though the camera flight it started
    /// is still in progress.
    pub fn reset_view(&mut self) -> ResetOutcome {
        if !InputGate::new(&self.state, &self.context).check_enabled() {
            log::debug!("reset view ignored: navigation locked or camera input disabled");
            return ResetOutcome::Skipped;
        }
        if !self.state.begin() {
            return ResetOutcome::Skipped;
        }
        let outcome = self.dispatch();
        self.state.finish();
        log::debug!("reset view dispatched: {outcome:?}");
        outcome
    }

    fn dispatch(&mut self) -> ResetOutcome {
        let tracked = self.context.tracked_entity();
        let mut controller = CameraTransitionController::new(&mut self.context);

        if let Some(entity) = tracked {
            return controller.reassert_tracking(entity);
        }

        match resolve(self.options.default_reset_view.as_ref()) {
            Ok(target) => controller.transition(
                target,
                self.options.effective_orientation(),
                &self.options.transition_config(),
            ),
            Err(err) => {
                log::warn!("default reset view rejected: {err}");
                ResetOutcome::Rejected
            }
        }
    }
}

impl<M: MapContext> NavigationControl for ResetViewControl<M> {
    fn activate(&mut self) {
        self.reset_view();
    }

    fn set_locked(&mut self, locked: bool) {
        self.state.navigation_locked = locked;
    }

    fn is_locked(&self) -> bool {
        self.state.navigation_locked
    }

    fn is_active(&self) -> bool {
        self.state.active
    }
}
