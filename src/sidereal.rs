// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich and local sidereal time.
//!
//! GMST is built from the Earth Rotation Angle (IERS Conventions 2010) plus
//! the Capitaine et al. (2003) accumulated-precession polynomial. UT1 is
//! approximated by UT (|UT1 − UTC| < 0.9 s, i.e. < 0.004° of rotation —
//! irrelevant at rise/set precision).
//!
//! Local sidereal time follows the Meeus convention used throughout the
//! crate: longitude is **positive westward**, so `LST = GMST − longitude`.

use super::angle::wrap_360;
use super::instant::{Instant, Time, UT};
use qtty::Degrees;

/// Earth Rotation Angle for a UT-axis instant, in [0°, 360°).
///
/// ERA(Tu) = 2π · frac(0.7790572732640 + 1.00273781191135448 · Tu),
/// Tu = JD(UT1) − 2451545.0 (IERS Conventions 2010, eq. 5.15).
pub fn earth_rotation_angle(ut: Time<UT>) -> Degrees {
    let tu = ut.value() - 2_451_545.0;
    let turns = (0.779_057_273_264_0 + 1.002_737_811_911_354_48 * tu).rem_euclid(1.0);
    Degrees::new(turns * 360.0)
}

/// Greenwich Mean Sidereal Time for a TT-axis instant, in [0°, 360°).
///
/// GMST = ERA(UT) + precession polynomial in TT centuries
/// (Capitaine, Wallace & McCarthy 2003, bias-corrected series).
pub fn gmst(t: Instant) -> Degrees {
    let era = earth_rotation_angle(t.to::<UT>());
    let tc = t.julian_centuries();
    let precession_arcsec = 0.014506
        + tc * (4_612.156_534
            + tc * (1.391_581_7 + tc * (-0.000_000_44 + tc * (-0.000_029_956 + tc * -3.68e-8))));
    wrap_360(era + Degrees::new(precession_arcsec / 3600.0))
}

/// Local mean sidereal time, longitude positive **westward**, in [0°, 360°).
#[inline]
pub fn local_sidereal_time(t: Instant, longitude_west: Degrees) -> Degrees {
    wrap_360(gmst(t) - longitude_west)
}
