// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle normalization and sexagesimal constructors.
//!
//! Every public angle in the crate is a [`qtty::Degrees`]; these helpers keep
//! the wrapping conventions in one place:
//! - [`wrap_360`] → [0°, 360°), used for bearings and sidereal time;
//! - [`wrap_180`] → (−180°, 180°], used for hour angles so that a meridian
//!   crossing is a plain sign change.

use qtty::Degrees;

/// Normalize an angle to [0°, 360°).
#[inline]
pub fn wrap_360(angle: Degrees) -> Degrees {
    Degrees::new(angle.value().rem_euclid(360.0))
}

/// Normalize an angle to (−180°, 180°].
#[inline]
pub fn wrap_180(angle: Degrees) -> Degrees {
    let wrapped = angle.value().rem_euclid(360.0);
    if wrapped > 180.0 {
        Degrees::new(wrapped - 360.0)
    } else {
        Degrees::new(wrapped)
    }
}

/// Degrees from a sexagesimal degrees/arcminutes/arcseconds triple.
///
/// The sign is carried by `degrees`; `minutes` and `seconds` are magnitudes.
#[inline]
pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> Degrees {
    let magnitude = degrees.abs() + minutes / 60.0 + seconds / 3600.0;
    Degrees::new(magnitude.copysign(degrees))
}

/// Degrees from an hours/minutes/seconds right-ascension triple (15°/hour).
#[inline]
pub fn from_hms(hours: f64, minutes: f64, seconds: f64) -> Degrees {
    Degrees::new(15.0 * (hours + minutes / 60.0 + seconds / 3600.0))
}
