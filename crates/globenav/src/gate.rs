//! Input gating for navigation controls.

use globenav_core::ControlState;

use crate::context::MapContext;

/// Decides whether a navigation action may run right now.
pub struct InputGate<'a, M: MapContext + ?Sized> {
    state: &'a ControlState,
    context: &'a M,
}

impl<'a, M: MapContext + ?Sized> InputGate<'a, M> {
    /// Creates a gate over the control state and its map.
    pub fn new(state: &'a ControlState, context: &'a M) -> Self {
        Self { state, context }
    }

    /// False while the control is locked or the map rejects camera input.
    pub fn check_enabled(&self) -> bool {
        !self.state.navigation_locked && self.context.camera_input_enabled()
    }
}
