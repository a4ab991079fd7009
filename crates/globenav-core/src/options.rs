//! Configuration options for the reset-view control.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::object::ObjectHandle;
use crate::orientation::Orientation;
use crate::target::DefaultView;

/// Flight duration used when none is configured.
pub const DEFAULT_DURATION_SECONDS: f64 = 3.0;

/// Callback invoked once a flight reaches its destination.
pub type CompletionCallback = Arc<dyn Fn() + Send + Sync>;

/// Options consumed by the reset-view control.
///
/// Everything except the completion callback and object handles can be loaded
/// from JSON (camelCase keys).
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetViewOptions {
    /// The view a reset returns to.
    pub default_reset_view: Option<DefaultView>,

    /// Flight duration in seconds.
    pub duration: Option<f64>,

    /// Orientation for point and rectangle flights.
    pub orientation: Option<Orientation>,

    /// Whether the control starts locked.
    pub navigation_locked: bool,

    /// Invoked when a rectangle or explicit-view flight completes.
    #[serde(skip)]
    pub reset_success: Option<CompletionCallback>,
}

impl fmt::Debug for ResetViewOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetViewOptions")
            .field("default_reset_view", &self.default_reset_view)
            .field("duration", &self.duration)
            .field("orientation", &self.orientation)
            .field("navigation_locked", &self.navigation_locked)
            .field("reset_success", &self.reset_success.is_some())
            .finish()
    }
}

impl ResetViewOptions {
    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the default view.
    pub fn with_default_view(mut self, view: DefaultView) -> Self {
        self.default_reset_view = Some(view);
        self
    }

    /// Attaches a tileset or entity to the default view, creating one if needed.
    pub fn with_object(mut self, object: ObjectHandle) -> Self {
        self.default_reset_view
            .get_or_insert_with(DefaultView::default)
            .object = Some(object);
        self
    }

    /// Sets the flight duration in seconds.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Sets the orientation used by point and rectangle flights.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Sets the completion callback.
    pub fn with_reset_success(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.reset_success = Some(Arc::new(callback));
        self
    }

    /// Sets whether the control starts locked.
    pub fn with_navigation_locked(mut self, locked: bool) -> Self {
        self.navigation_locked = locked;
        self
    }

    /// Configured duration, or the default for missing and unusable values.
    pub fn effective_duration(&self) -> f64 {
        match self.duration {
            Some(seconds) if seconds.is_finite() && seconds > 0.0 => seconds,
            _ => DEFAULT_DURATION_SECONDS,
        }
    }

    /// Configured orientation, or the reset default.
    pub fn effective_orientation(&self) -> Orientation {
        self.orientation.unwrap_or_else(Orientation::reset_default)
    }

    /// Builds the transition settings for one reset.
    pub fn transition_config(&self) -> TransitionConfig {
        TransitionConfig {
            duration_seconds: self.effective_duration(),
            on_complete: self.reset_success.clone(),
        }
    }
}

/// Timing and completion settings for a single transition.
#[derive(Clone)]
pub struct TransitionConfig {
    /// Flight duration in seconds.
    pub duration_seconds: f64,
    /// Invoked once on arrival, for rectangle and explicit-view flights only.
    pub on_complete: Option<CompletionCallback>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_seconds: DEFAULT_DURATION_SECONDS,
            on_complete: None,
        }
    }
}

impl fmt::Debug for TransitionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionConfig")
            .field("duration_seconds", &self.duration_seconds)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
