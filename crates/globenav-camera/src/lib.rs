//! Globe camera for globenav.
//!
//! A [`Camera`] holds an Earth-fixed pose and at most one in-flight [`Flight`].
//! Flights are requested with a [`FlightRequest`] and advanced by calling
//! [`Camera::update`] once per frame; the completion callback runs from that
//! call, never from the request.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod flight;

pub use camera::{Camera, CameraPose, DEFAULT_FOV};
pub use flight::{Flight, FlightRequest};
