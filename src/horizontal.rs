// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Topocentric horizontal coordinates.
//!
//! The spherical triangle of Meeus ch. 13, specialised to what the event
//! search consumes: local hour angle, geometric altitude, and the horizon
//! bearing. Bearings are measured **westward from south**, [0°, 360°) — the
//! classical Astronomical Algorithms convention, kept so reference data
//! compares directly.

use super::angle::{wrap_180, wrap_360};
use super::instant::Instant;
use super::observer::Observer;
use super::position::Equatorial;
use super::sidereal::local_sidereal_time;
use qtty::Degrees;

/// Local hour angle `LST − RA`, wrapped to (−180°, 180°].
///
/// Zero at the upper (southern) meridian crossing, ±180° at the lower.
pub fn hour_angle(t: Instant, observer: &Observer, ra: Degrees) -> Degrees {
    wrap_180(local_sidereal_time(t, observer.longitude_west()) - ra)
}

/// Geometric altitude above the horizon.
///
/// `sin h = sin φ sin δ + cos φ cos δ cos H` — no refraction; the search
/// threshold is expected to absorb every apparent-altitude correction.
pub fn altitude(observer: &Observer, dec: Degrees, hour_angle: Degrees) -> Degrees {
    let phi = observer.latitude().value().to_radians();
    let delta = dec.value().to_radians();
    let h = hour_angle.value().to_radians();
    let sin_alt = phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.cos();
    Degrees::new(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
}

/// Horizon bearing, westward from south, [0°, 360°).
///
/// `A = atan2(sin H, cos H sin φ − tan δ cos φ)`.
pub fn bearing(observer: &Observer, dec: Degrees, hour_angle: Degrees) -> Degrees {
    let phi = observer.latitude().value().to_radians();
    let delta = dec.value().to_radians();
    let h = hour_angle.value().to_radians();
    let azimuth = h.sin().atan2(h.cos() * phi.sin() - delta.tan() * phi.cos());
    wrap_360(Degrees::new(azimuth.to_degrees()))
}

/// Altitude and bearing of a position as seen at an instant.
pub fn observe(t: Instant, observer: &Observer, position: &Equatorial) -> (Degrees, Degrees) {
    let h = hour_angle(t, observer, position.ra);
    (
        altitude(observer, position.dec, h),
        bearing(observer, position.dec, h),
    )
}
