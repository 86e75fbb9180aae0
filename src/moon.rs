// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent lunar position.
//!
//! Periodic-term evaluation from Meeus ch. 47. Two truncation levels are
//! offered: [`LunarTheory::Truncated`] keeps the ten leading longitude terms
//! (arcminute-class, a few seconds of rise/set error), and
//! [`LunarTheory::Extended`] evaluates thirty longitude and twenty latitude
//! terms plus the planetary additives, staying under 0.05° in longitude.
//! The full ELP/MPP02 theory is deliberately out of scope.

use super::angle::wrap_360;
use super::error::SearchError;
use super::instant::Instant;
use super::position::{Equatorial, PositionSource};
use super::sun::mean_obliquity;
use qtty::Degrees;

/// Truncation level of the lunar series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LunarTheory {
    /// Ten leading longitude terms, six latitude terms, no additives.
    #[default]
    Truncated,
    /// Thirty longitude and twenty latitude terms plus the A1/A2/A3
    /// additive arguments.
    Extended,
}

/// The Moon as a [`PositionSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Moon {
    theory: LunarTheory,
}

impl Moon {
    pub const fn new(theory: LunarTheory) -> Self {
        Moon { theory }
    }
}

impl PositionSource for Moon {
    fn position_at(&self, t: Instant) -> Result<Equatorial, SearchError> {
        Ok(apparent_position(t, self.theory))
    }
}

/// One periodic term: multiples of (D, M, M′, F) and a coefficient in
/// 10⁻⁶ degrees. Terms with |M| ≥ 1 are scaled by the eccentricity factor E.
struct SeriesTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coeff: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, coeff: f64) -> SeriesTerm {
    SeriesTerm { d, m, mp, f, coeff }
}

/// Longitude series (Σl), Meeus table 47.A leading terms.
#[rustfmt::skip]
const LONGITUDE_TERMS: [SeriesTerm; 30] = [
    term(0,  0,  1,  0, 6_288_774.0),
    term(2,  0, -1,  0, 1_274_027.0),
    term(2,  0,  0,  0,   658_314.0),
    term(0,  0,  2,  0,   213_618.0),
    term(0,  1,  0,  0,  -185_116.0),
    term(0,  0,  0,  2,  -114_332.0),
    term(2,  0, -2,  0,    58_793.0),
    term(2, -1, -1,  0,    57_066.0),
    term(2,  0,  1,  0,    53_322.0),
    term(2, -1,  0,  0,    45_758.0),
    term(0,  1, -1,  0,   -40_923.0),
    term(1,  0,  0,  0,   -34_720.0),
    term(0,  1,  1,  0,   -30_383.0),
    term(2,  0,  0, -2,    15_327.0),
    term(0,  0,  1,  2,   -12_528.0),
    term(0,  0,  1, -2,    10_980.0),
    term(4,  0, -1,  0,    10_675.0),
    term(0,  0,  3,  0,    10_034.0),
    term(4,  0, -2,  0,     8_548.0),
    term(2,  1, -1,  0,    -7_888.0),
    term(2,  1,  0,  0,    -6_766.0),
    term(1,  0, -1,  0,    -5_163.0),
    term(1,  1,  0,  0,     4_987.0),
    term(2, -1,  1,  0,     4_036.0),
    term(2,  0,  2,  0,     3_994.0),
    term(4,  0,  0,  0,     3_861.0),
    term(2,  0, -3,  0,     3_665.0),
    term(0,  1, -2,  0,    -2_689.0),
    term(2,  0, -1,  2,    -2_602.0),
    term(2, -1, -2,  0,     2_390.0),
];

/// Latitude series (Σb), Meeus table 47.B leading terms.
#[rustfmt::skip]
const LATITUDE_TERMS: [SeriesTerm; 20] = [
    term(0,  0,  0,  1, 5_128_122.0),
    term(0,  0,  1,  1,   280_602.0),
    term(0,  0,  1, -1,   277_693.0),
    term(2,  0,  0, -1,   173_237.0),
    term(2,  0, -1,  1,    55_413.0),
    term(2,  0, -1, -1,    46_271.0),
    term(2,  0,  0,  1,    32_573.0),
    term(0,  0,  2,  1,    17_198.0),
    term(2,  0,  1, -1,     9_266.0),
    term(0,  0,  2, -1,     8_822.0),
    term(2, -1,  0, -1,     8_216.0),
    term(2,  0, -2, -1,     4_324.0),
    term(2,  0,  1,  1,     4_200.0),
    term(2,  1,  0, -1,    -3_359.0),
    term(2, -1, -1,  1,     2_463.0),
    term(2, -1,  0,  1,     2_211.0),
    term(2, -1, -1, -1,     2_065.0),
    term(0,  1, -1, -1,    -1_870.0),
    term(4,  0, -1, -1,     1_828.0),
    term(0,  1,  0,  1,    -1_794.0),
];

const TRUNCATED_LONGITUDE: usize = 10;
const TRUNCATED_LATITUDE: usize = 6;

/// Fundamental arguments at `tc` Julian centuries TT, degrees.
struct Arguments {
    /// Mean longitude L′.
    lp: f64,
    /// Mean elongation D.
    d: f64,
    /// Solar mean anomaly M.
    m: f64,
    /// Lunar mean anomaly M′.
    mp: f64,
    /// Argument of latitude F.
    f: f64,
    /// Eccentricity factor E.
    e: f64,
}

fn arguments(tc: f64) -> Arguments {
    Arguments {
        lp: 218.316_447_7
            + tc * (481_267.881_234_21
                + tc * (-0.001_578_6 + tc * (1.0 / 538_841.0 + tc * (-1.0 / 65_194_000.0)))),
        d: 297.850_192_1
            + tc * (445_267.111_403_4
                + tc * (-0.001_881_9 + tc * (1.0 / 545_868.0 + tc * (-1.0 / 113_065_000.0)))),
        m: 357.529_109_2 + tc * (35_999.050_290_9 + tc * (-0.000_153_6 + tc / 24_490_000.0)),
        mp: 134.963_396_4
            + tc * (477_198.867_505_5
                + tc * (0.008_741_4 + tc * (1.0 / 69_699.0 + tc * (-1.0 / 14_712_000.0)))),
        f: 93.272_095_0
            + tc * (483_202.017_523_3
                + tc * (-0.003_653_9 + tc * (-1.0 / 3_526_000.0 + tc / 863_310_000.0))),
        e: 1.0 - tc * (0.002_516 + tc * 0.000_007_4),
    }
}

fn evaluate(terms: &[SeriesTerm], args: &Arguments) -> f64 {
    terms
        .iter()
        .map(|t| {
            let argument = f64::from(t.d) * args.d
                + f64::from(t.m) * args.m
                + f64::from(t.mp) * args.mp
                + f64::from(t.f) * args.f;
            let scale = match t.m.abs() {
                0 => 1.0,
                1 => args.e,
                _ => args.e * args.e,
            };
            t.coeff * scale * argument.to_radians().sin()
        })
        .sum()
}

/// Apparent geocentric RA/Dec of the Moon.
pub fn apparent_position(t: Instant, theory: LunarTheory) -> Equatorial {
    let tc = t.julian_centuries();
    let args = arguments(tc);

    let (longitude_terms, latitude_terms) = match theory {
        LunarTheory::Truncated => (
            &LONGITUDE_TERMS[..TRUNCATED_LONGITUDE],
            &LATITUDE_TERMS[..TRUNCATED_LATITUDE],
        ),
        LunarTheory::Extended => (&LONGITUDE_TERMS[..], &LATITUDE_TERMS[..]),
    };

    let mut sum_l = evaluate(longitude_terms, &args);
    let mut sum_b = evaluate(latitude_terms, &args);

    if theory == LunarTheory::Extended {
        let a1 = (119.75 + 131.849 * tc).to_radians();
        let a2 = (53.09 + 479_264.290 * tc).to_radians();
        let a3 = (313.45 + 481_266.484 * tc).to_radians();
        let lp = args.lp.to_radians();
        let mp = args.mp.to_radians();
        let f = args.f.to_radians();

        sum_l += 3_958.0 * a1.sin() + 1_962.0 * (lp - f).sin() + 318.0 * a2.sin();
        sum_b += -2_235.0 * lp.sin()
            + 382.0 * a3.sin()
            + 175.0 * (a1 - f).sin()
            + 175.0 * (a1 + f).sin()
            + 127.0 * (lp - mp).sin()
            - 115.0 * (lp + mp).sin();
    }

    // Main nutation term and the corresponding obliquity correction.
    let omega = (125.044_52 - 1_934.136_261 * tc).to_radians();
    let nutation = -0.004_78 * omega.sin();

    let longitude = (args.lp + sum_l / 1e6 + nutation).to_radians();
    let latitude = (sum_b / 1e6).to_radians();
    let epsilon = (mean_obliquity(tc) + 0.002_56 * omega.cos()).to_radians();

    let ra = (longitude.sin() * epsilon.cos() - latitude.tan() * epsilon.sin())
        .atan2(longitude.cos());
    let dec =
        (latitude.sin() * epsilon.cos() + latitude.cos() * epsilon.sin() * longitude.sin()).asin();

    Equatorial::new(
        wrap_360(Degrees::new(ra.to_degrees())),
        Degrees::new(dec.to_degrees()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a_extended() {
        // 1992 April 12.0 TD: apparent RA 134.688470°, Dec +13.768368°
        let t = Instant::from_calendar(1992, 4, 12.0);
        let pos = apparent_position(t, LunarTheory::Extended);
        assert!(
            (pos.ra - Degrees::new(134.688470)).abs() < Degrees::new(0.05),
            "RA = {}",
            pos.ra
        );
        assert!(
            (pos.dec - Degrees::new(13.768368)).abs() < Degrees::new(0.05),
            "Dec = {}",
            pos.dec
        );
    }

    #[test]
    fn meeus_example_47a_truncated() {
        let t = Instant::from_calendar(1992, 4, 12.0);
        let pos = apparent_position(t, LunarTheory::Truncated);
        assert!(
            (pos.ra - Degrees::new(134.688470)).abs() < Degrees::new(0.5),
            "RA = {}",
            pos.ra
        );
        assert!(
            (pos.dec - Degrees::new(13.768368)).abs() < Degrees::new(0.5),
            "Dec = {}",
            pos.dec
        );
    }

    #[test]
    fn theories_agree_to_a_fraction_of_a_degree() {
        for i in 0..28 {
            let t = Instant::from_calendar(2026, 8, 1.0) + qtty::Days::new(f64::from(i));
            let coarse = apparent_position(t, LunarTheory::Truncated);
            let fine = apparent_position(t, LunarTheory::Extended);
            let dra = crate::angle::wrap_180(coarse.ra - fine.ra).abs();
            assert!(dra < Degrees::new(0.4), "ΔRA = {} at {}", dra, t);
            assert!((coarse.dec - fine.dec).abs() < Degrees::new(0.4));
        }
    }

    #[test]
    fn declination_bounded_by_inclined_orbit() {
        // |β| ≤ 5.15° and ε ≈ 23.44° bound |δ| by about 28.6°.
        for i in 0..56 {
            let t = Instant::J2000 + qtty::Days::new(f64::from(i) * 0.5);
            let pos = apparent_position(t, LunarTheory::Extended);
            assert!(pos.dec.abs() < Degrees::new(28.8), "Dec = {}", pos.dec);
        }
    }

    #[test]
    fn sidereal_month_period() {
        // RA returns to roughly the same value after one sidereal month.
        let t0 = Instant::from_calendar(2026, 1, 1.0);
        let t1 = t0 + qtty::Days::new(27.321_661);
        let p0 = apparent_position(t0, LunarTheory::Extended);
        let p1 = apparent_position(t1, LunarTheory::Extended);
        let dra = crate::angle::wrap_180(p1.ra - p0.ra).abs();
        // perturbations move the return point by up to a few degrees
        assert!(dra < Degrees::new(5.0), "ΔRA = {}", dra);
    }

    #[test]
    fn source_wrapper_selects_theory() {
        let t = Instant::from_calendar(1992, 4, 12.0);
        let moon = Moon::new(LunarTheory::Extended);
        assert_eq!(
            moon.position_at(t).unwrap(),
            apparent_position(t, LunarTheory::Extended)
        );
        assert_eq!(
            Moon::default().position_at(t).unwrap(),
            apparent_position(t, LunarTheory::Truncated)
        );
    }
}
