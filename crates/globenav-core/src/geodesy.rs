//! Reference ellipsoid, geodetic positions and geographic rectangles.
//!
//! All angles are in radians and all distances in metres. Cartesian positions are
//! Earth-centred, Earth-fixed (`DVec3`, x through the prime meridian, z through the
//! north pole).

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::RectangleError;

const RADIANS_PER_DEGREE: f64 = PI / 180.0;

/// The camera's fallback global extent when nothing else is configured.
///
/// Covers the Americas, matching the usual "default view" of a globe viewer.
pub const DEFAULT_VIEW_RECTANGLE: Rectangle = Rectangle {
    west: -95.0 * RADIANS_PER_DEGREE,
    south: -20.0 * RADIANS_PER_DEGREE,
    east: -70.0 * RADIANS_PER_DEGREE,
    north: 90.0 * RADIANS_PER_DEGREE,
};

/// A position given as longitude, latitude and height above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartographic {
    /// Longitude in radians.
    pub longitude: f64,
    /// Latitude in radians.
    pub latitude: f64,
    /// Height above the ellipsoid in metres.
    #[serde(default)]
    pub height: f64,
}

impl Cartographic {
    /// Creates a position from radians and metres.
    pub const fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    /// Creates a position from degrees and metres.
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Self::new(longitude.to_radians(), latitude.to_radians(), height)
    }
}

/// A geographic rectangle bounded by two meridians and two parallels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Westernmost longitude in radians.
    pub west: f64,
    /// Southernmost latitude in radians.
    pub south: f64,
    /// Easternmost longitude in radians.
    pub east: f64,
    /// Northernmost latitude in radians.
    pub north: f64,
}

impl Rectangle {
    /// Creates a rectangle from radians. The bounds are not validated.
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Creates a rectangle from degrees. The bounds are not validated.
    pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::new(
            west.to_radians(),
            south.to_radians(),
            east.to_radians(),
            north.to_radians(),
        )
    }

    /// Checks that the bounds are finite, within angular range, and ordered.
    ///
    /// Rectangles crossing the antimeridian (west > east) are rejected.
    pub fn validate(&self) -> Result<(), RectangleError> {
        let bounds = [self.west, self.south, self.east, self.north];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(RectangleError::NonFinite);
        }
        for longitude in [self.west, self.east] {
            if !(-PI..=PI).contains(&longitude) {
                return Err(RectangleError::LongitudeOutOfRange(longitude));
            }
        }
        for latitude in [self.south, self.north] {
            if !(-FRAC_PI_2..=FRAC_PI_2).contains(&latitude) {
                return Err(RectangleError::LatitudeOutOfRange(latitude));
            }
        }
        if self.west >= self.east {
            return Err(RectangleError::WestNotBeforeEast {
                west: self.west,
                east: self.east,
            });
        }
        if self.south >= self.north {
            return Err(RectangleError::SouthNotBeforeNorth {
                south: self.south,
                north: self.north,
            });
        }
        Ok(())
    }

    /// Angular width in radians.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Angular height in radians.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Returns the centre of the rectangle at zero height.
    pub fn center(&self) -> Cartographic {
        Cartographic::new(
            (self.west + self.east) * 0.5,
            (self.south + self.north) * 0.5,
            0.0,
        )
    }
}

/// A triaxial reference ellipsoid. Only ellipsoids of revolution (x and y radii
/// equal) are supported by [`Ellipsoid::cartesian_to_cartographic`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    radii: DVec3,
}

impl Ellipsoid {
    /// The WGS84 ellipsoid.
    pub const WGS84: Ellipsoid = Ellipsoid {
        radii: DVec3::new(6_378_137.0, 6_378_137.0, 6_356_752.314_245_179_5),
    };

    /// A sphere of radius 1, handy for tests.
    pub const UNIT_SPHERE: Ellipsoid = Ellipsoid { radii: DVec3::ONE };

    /// Creates an ellipsoid from its radii along x, y and z.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            radii: DVec3::new(x, y, z),
        }
    }

    /// Radii along each axis.
    pub fn radii(&self) -> DVec3 {
        self.radii
    }

    /// The largest of the three radii.
    pub fn maximum_radius(&self) -> f64 {
        self.radii.max_element()
    }

    /// Unit normal to the surface at the given longitude/latitude.
    pub fn geodetic_surface_normal(&self, cartographic: &Cartographic) -> DVec3 {
        let cos_latitude = cartographic.latitude.cos();
        DVec3::new(
            cos_latitude * cartographic.longitude.cos(),
            cos_latitude * cartographic.longitude.sin(),
            cartographic.latitude.sin(),
        )
        .normalize()
    }

    /// Converts a geodetic position to Earth-fixed Cartesian coordinates.
    pub fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> DVec3 {
        let normal = self.geodetic_surface_normal(cartographic);
        let k = self.radii * self.radii * normal;
        let gamma = normal.dot(k).sqrt();
        k / gamma + normal * cartographic.height
    }

    /// Converts Earth-fixed Cartesian coordinates back to a geodetic position.
    ///
    /// Returns `None` for the centre of the ellipsoid, where longitude and latitude
    /// are undefined.
    pub fn cartesian_to_cartographic(&self, cartesian: DVec3) -> Option<Cartographic> {
        if !cartesian.is_finite() || cartesian.length_squared() < f64::EPSILON {
            return None;
        }

        let a = self.radii.x;
        let b = self.radii.z;
        let e2 = 1.0 - (b * b) / (a * a);
        let p = cartesian.x.hypot(cartesian.y);
        let longitude = cartesian.y.atan2(cartesian.x);

        let mut latitude = cartesian.z.atan2(p * (1.0 - e2));
        let mut height = 0.0;
        for _ in 0..8 {
            let sin_latitude = latitude.sin();
            let n = a / (1.0 - e2 * sin_latitude * sin_latitude).sqrt();
            height = if latitude.cos().abs() > 1e-9 {
                p / latitude.cos() - n
            } else {
                cartesian.z.abs() - b
            };
            latitude = cartesian.z.atan2(p * (1.0 - e2 * n / (n + height)));
        }

        Some(Cartographic::new(longitude, latitude, height))
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
