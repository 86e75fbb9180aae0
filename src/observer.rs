// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observing site.
//!
//! [`Observer`] carries the geographic location a query is evaluated from.
//! Longitude is **positive westward** (the Meeus / Astronomical Algorithms
//! convention); latitude is validated to [−90°, +90°] at construction.
//!
//! Elevation never changes the altitude threshold implicitly. Callers who
//! want a sea-horizon correction fold [`Observer::horizon_dip`] into the
//! threshold themselves.

use super::error::SearchError;
use qtty::Degrees;

/// WGS84 semi-major axis (equatorial radius), metres.
const WGS84_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// WGS84 semi-minor axis (polar radius), metres.
const WGS84_POLAR_RADIUS_M: f64 = 6_356_752.314_245;

/// A geographic observing site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geodetic latitude, [−90°, +90°].
    latitude: Degrees,
    /// Longitude, positive **westward** of Greenwich.
    longitude: Degrees,
    /// Elevation above mean sea level, metres.
    elevation_m: f64,
}

impl Observer {
    /// Create a sea-level observer. Fails with
    /// [`SearchError::InvalidLocation`] when latitude leaves [−90°, +90°].
    pub fn new(latitude: Degrees, longitude_west: Degrees) -> Result<Self, SearchError> {
        if !(-90.0..=90.0).contains(&latitude.value()) || !latitude.value().is_finite() {
            return Err(SearchError::InvalidLocation {
                latitude: latitude.value(),
            });
        }
        Ok(Observer {
            latitude,
            longitude: longitude_west,
            elevation_m: 0.0,
        })
    }

    /// Same observer with an elevation above mean sea level.
    pub fn with_elevation(mut self, elevation_m: f64) -> Self {
        self.elevation_m = elevation_m;
        self
    }

    /// Geodetic latitude.
    #[inline]
    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, positive westward.
    #[inline]
    pub fn longitude_west(&self) -> Degrees {
        self.longitude
    }

    /// Elevation above mean sea level, metres.
    #[inline]
    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    /// WGS84 Earth radius at this latitude, metres.
    fn earth_radius_m(&self) -> f64 {
        let phi = self.latitude.value().to_radians();
        let (sin, cos) = phi.sin_cos();
        let a2 = WGS84_EQUATORIAL_RADIUS_M * WGS84_EQUATORIAL_RADIUS_M;
        let b2 = WGS84_POLAR_RADIUS_M * WGS84_POLAR_RADIUS_M;
        let numerator = a2 * a2 * cos * cos + b2 * b2 * sin * sin;
        let denominator = (WGS84_EQUATORIAL_RADIUS_M * cos).powi(2)
            + (WGS84_POLAR_RADIUS_M * sin).powi(2);
        (numerator / denominator).sqrt()
    }

    /// Geometric dip of the sea horizon for an elevated observer.
    ///
    /// Positive elevation lowers the apparent horizon (positive dip);
    /// a site below sea level raises it. Not applied automatically anywhere
    /// in the crate: subtract it from the threshold to honour it.
    pub fn horizon_dip(&self) -> Degrees {
        let h = self.elevation_m;
        if h.abs() < 1e-5 {
            return Degrees::new(0.0);
        }
        let r = self.earth_radius_m();
        let ratio = (r / (r + h.abs())).clamp(-1.0, 1.0);
        let dip = ratio.acos().to_degrees();
        Degrees::new(dip.copysign(h))
    }
}
