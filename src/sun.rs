// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent solar position.
//!
//! Low-accuracy theory from Meeus ch. 25: mean elements plus the equation of
//! centre, corrected for aberration and nutation through the Ω term. Good to
//! ~0.01° in longitude, i.e. a couple of seconds of rise/set time — well
//! inside the accuracy of any fixed altitude threshold.

use super::angle::wrap_360;
use super::error::SearchError;
use super::instant::Instant;
use super::position::{Equatorial, PositionSource};
use qtty::Degrees;

/// The Sun as a [`PositionSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sun;

impl PositionSource for Sun {
    fn position_at(&self, t: Instant) -> Result<Equatorial, SearchError> {
        Ok(apparent_position(t))
    }
}

/// Apparent geocentric RA/Dec of the Sun.
pub fn apparent_position(t: Instant) -> Equatorial {
    let tc = t.julian_centuries();

    // Mean elements, degrees.
    let mean_longitude = 280.46646 + tc * (36_000.76983 + tc * 0.000_303_2);
    let mean_anomaly = 357.52911 + tc * (35_999.05029 - tc * 0.000_153_7);
    let m = mean_anomaly.to_radians();

    // Equation of centre.
    let centre = (1.914602 - tc * (0.004817 + tc * 0.000014)) * m.sin()
        + (0.019993 - tc * 0.000101) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_longitude = mean_longitude + centre;

    // Aberration + nutation via the longitude of the ascending node.
    let omega = (125.04 - 1_934.136 * tc).to_radians();
    let apparent_longitude = (true_longitude - 0.00569 - 0.00478 * omega.sin()).to_radians();

    let epsilon = (mean_obliquity(tc) + 0.00256 * omega.cos()).to_radians();

    let ra = (epsilon.cos() * apparent_longitude.sin()).atan2(apparent_longitude.cos());
    let dec = (epsilon.sin() * apparent_longitude.sin()).asin();

    Equatorial::new(
        wrap_360(Degrees::new(ra.to_degrees())),
        Degrees::new(dec.to_degrees()),
    )
}

/// Mean obliquity of the ecliptic (Meeus 22.2), degrees.
pub(crate) fn mean_obliquity(tc: f64) -> f64 {
    23.439_291_111 + tc * (-0.013_004_167 + tc * (-1.638_9e-7 + tc * 5.036_1e-7))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: apparent RA 198.38083°, Dec −7.78507°
        let t = Instant::from_calendar(1992, 10, 13.0);
        let pos = apparent_position(t);
        assert!(
            (pos.ra - Degrees::new(198.38083)).abs() < Degrees::new(0.01),
            "RA = {}",
            pos.ra
        );
        assert!(
            (pos.dec - Degrees::new(-7.78507)).abs() < Degrees::new(0.01),
            "Dec = {}",
            pos.dec
        );
    }

    #[test]
    fn declination_bounded_by_obliquity() {
        for i in 0..366 {
            let t = Instant::from_calendar(2026, 1, 1.0) + qtty::Days::new(f64::from(i));
            let pos = apparent_position(t);
            assert!(pos.dec.abs() < Degrees::new(23.5), "Dec = {} at {}", pos.dec, t);
        }
    }

    #[test]
    fn equinox_declination_near_zero() {
        // 2000 March 20, 07:35 TT ≈ the March equinox
        let t = Instant::from_ymd_hms(2000, 3, 20, 7, 35, 0.0);
        let pos = apparent_position(t);
        assert!(pos.dec.abs() < Degrees::new(0.05), "Dec = {}", pos.dec);
    }

    #[test]
    fn solstice_declination_extreme() {
        // 2000 June 21 ≈ the June solstice
        let t = Instant::from_ymd_hms(2000, 6, 21, 2, 0, 0.0);
        let pos = apparent_position(t);
        assert!((pos.dec - Degrees::new(23.44)).abs() < Degrees::new(0.05));
    }

    #[test]
    fn source_wrapper_matches_free_function() {
        let t = Instant::J2000;
        let from_source = Sun.position_at(t).unwrap();
        assert_eq!(from_source, apparent_position(t));
    }
}
