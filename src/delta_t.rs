// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T) — UT↔TT Correction Layer
//!
//! Piecewise polynomial model for **ΔT = TT − UT** after Espenak & Meeus
//! (2006, *Five Millennium Canon of Solar Eclipses*).
//!
//! ## Integration with Time Scales
//!
//! The correction is applied **automatically** by the [`UT`](super::UT) time
//! scale marker: `Time<UT> → Time<TT>` adds ΔT, and the inverse uses a
//! three-iteration fixed-point solver. Sidereal time is the only internal
//! consumer — it needs the Earth-rotation axis while every query runs on TT.
//!
//! ## Scientific References
//! * Espenak & Meeus (2006): NASA/TP-2006-214141, §ΔT.
//! * Morrison & Stephenson (2004): "Historical values of the Earth's clock error".
//!
//! ## Valid Time Range
//! −500 CE through ~2150, with uncertainties ≤ ±1 s over 1700–2100 — far
//! below the default 10-minute sampling step of the event search.

use qtty::{Days, Seconds};

/// Horner evaluation of a polynomial with coefficients in ascending order.
#[inline]
fn polynomial(u: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * u + c)
}

/// ΔT in seconds for a UT-axis Julian Day.
///
/// The decimal year is derived directly from the Julian Day
/// (`2000 + (jd − J2000)/365.25`); the sub-month error this introduces is
/// orders of magnitude below the model's own uncertainty.
pub fn delta_t_seconds(jd_ut: Days) -> Seconds {
    let year = 2000.0 + (jd_ut.value() - 2_451_545.0) / 365.25;
    Seconds::new(delta_t_for_year(year))
}

fn delta_t_for_year(y: f64) -> f64 {
    match y {
        y if y < -500.0 => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u
        }
        y if y < 500.0 => {
            let u = y / 100.0;
            polynomial(
                u,
                &[
                    10583.6,
                    -1014.41,
                    33.78311,
                    -5.952053,
                    -0.1798452,
                    0.022174192,
                    0.0090316521,
                ],
            )
        }
        y if y < 1600.0 => {
            let u = (y - 1000.0) / 100.0;
            polynomial(
                u,
                &[
                    1574.2,
                    -556.01,
                    71.23472,
                    0.319781,
                    -0.8503463,
                    -0.005050998,
                    0.0083572073,
                ],
            )
        }
        y if y < 1700.0 => {
            let t = y - 1600.0;
            polynomial(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
        }
        y if y < 1800.0 => {
            let t = y - 1700.0;
            polynomial(
                t,
                &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
            )
        }
        y if y < 1860.0 => {
            let t = y - 1800.0;
            polynomial(
                t,
                &[
                    13.72,
                    -0.332447,
                    0.0068612,
                    0.0041116,
                    -0.00037436,
                    0.0000121272,
                    -0.0000001699,
                    0.000000000875,
                ],
            )
        }
        y if y < 1900.0 => {
            let t = y - 1860.0;
            polynomial(
                t,
                &[
                    7.62,
                    0.5737,
                    -0.251754,
                    0.01680668,
                    -0.0004473624,
                    1.0 / 233_174.0,
                ],
            )
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            polynomial(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            polynomial(t, &[21.20, 0.84493, -0.076100, 0.0020936])
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            polynomial(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            polynomial(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            polynomial(
                t,
                &[
                    63.86,
                    0.3345,
                    -0.060374,
                    0.0017275,
                    0.000651814,
                    0.00002373599,
                ],
            )
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            polynomial(t, &[62.92, 0.32217, 0.005589])
        }
        y if y < 2150.0 => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
        }
        y => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt_at_year(year: f64) -> f64 {
        delta_t_for_year(year)
    }

    #[test]
    fn delta_t_at_j2000() {
        assert!((dt_at_year(2000.0) - 63.86).abs() < 0.01);
    }

    #[test]
    fn delta_t_1988() {
        // Espenak & Meeus tabulate ΔT ≈ 55.8 s for 1988.0
        assert!((dt_at_year(1988.0) - 55.8).abs() < 0.5);
    }

    #[test]
    fn delta_t_historical() {
        // Morrison & Stephenson give ΔT ≈ 120 s for 1600.0 and ≈ 7 s for 1800.0
        assert!((dt_at_year(1600.0) - 120.0).abs() < 2.0);
        assert!((dt_at_year(1800.0) - 13.7).abs() < 2.0);
    }

    #[test]
    fn delta_t_piecewise_boundaries_are_continuous() {
        // Adjacent segments agree to better than ~2 s at every seam.
        for year in [
            -500.0, 500.0, 1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0,
            1986.0, 2005.0, 2050.0, 2150.0,
        ] {
            let below = dt_at_year(year - 1e-6);
            let above = dt_at_year(year + 1e-6);
            assert!(
                (below - above).abs() < 2.0,
                "discontinuity of {} s at year {}",
                (below - above).abs(),
                year
            );
        }
    }

    #[test]
    fn delta_t_from_julian_day() {
        let dt = delta_t_seconds(Days::new(2_451_545.0));
        assert!((dt - Seconds::new(63.86)).abs() < Seconds::new(0.1));
    }

    #[test]
    fn delta_t_monotonic_in_modern_era() {
        // ΔT grows steadily from 1970 onward.
        let mut prev = dt_at_year(1970.0);
        for y in 1971..2049 {
            let next = dt_at_year(f64::from(y));
            assert!(next > prev - 0.2, "ΔT dipped at year {}", y);
            prev = next;
        }
    }
}
