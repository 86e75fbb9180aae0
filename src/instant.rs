// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale parameterised instant.
//!
//! [`Time<S>`] stores a Julian Day number in [`Days`] whose axis is chosen
//! by the compile-time marker `S: TimeScale`.  Event finding runs entirely
//! on the uniform **TT** axis ([`Instant`] is an alias for `Time<TT>`);
//! sidereal time is the one consumer of the Earth-rotation **UT** axis, and
//! conversion between the two applies the ΔT correction automatically.
//!
//! Calendar dates enter through [`Time::from_calendar`] (proleptic
//! Julian/Gregorian, Meeus ch. 7) or through [`Time::from_utc`] /
//! [`Time::to_utc`] for `chrono` timestamps.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker trait for time scales.
///
/// A scale defines a display label and the pair of conversions between its
/// native day count and the canonical **Julian Day in TT**, the internal
/// representation used throughout the crate.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD(TT).
    fn to_jd_tt(value: Days) -> Days;

    /// Convert an absolute JD(TT) back to this scale's native quantity.
    fn from_jd_tt(jd_tt: Days) -> Days;
}

/// Terrestrial Time — the uniform dynamical axis used for every query.
///
/// The stored quantity is an absolute Julian Day number on the TT axis, so
/// `to_jd_tt`/`from_jd_tt` are the identity.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "JD(TT)";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Universal Time — the Earth-rotation axis needed by sidereal time.
///
/// Conversion to the TT axis adds the epoch-dependent **ΔT** correction;
/// the inverse uses a three-iteration fixed-point solver (dΔT/dJD ≈ 3×10⁻⁸,
/// so convergence is immediate).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "JD(UT)";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        let dt = super::delta_t::delta_t_seconds(ut_value);
        ut_value + dt.to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let mut ut = jd_tt;
        for _ in 0..3 {
            let dt = super::delta_t::delta_t_seconds(ut).to::<Day>();
            ut = jd_tt - dt;
        }
        ut
    }
}

/// A point on time scale `S`.
///
/// `Copy` and layout-identical to `Days` (a single `f64`); `PhantomData`
/// carries only the axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

/// The uniform instant used by every query: a Julian Day on the TT axis.
pub type Instant = Time<TT>;

impl<S: TimeScale> Time<S> {
    /// Create from a raw Julian Day number on this scale's axis.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar Julian Day number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day (TT) corresponding to this instant.
    #[inline]
    pub fn julian_day_tt(&self) -> Days {
        S::to_jd_tt(self.quantity)
    }

    /// Build an instant from an absolute Julian Day (TT).
    #[inline]
    pub fn from_julian_day_tt(jd: Days) -> Self {
        Self::from_days(S::from_jd_tt(jd))
    }

    /// Convert this instant to another time scale, routing through JD(TT).
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day_tt(S::to_jd_tt(self.quantity))
    }

    /// Build an instant from a proleptic Julian/Gregorian calendar date on
    /// this scale's axis (Meeus ch. 7).  `day` may carry a fraction; dates
    /// on or after 1582-10-15 are read as Gregorian.
    pub fn from_calendar(year: i32, month: u32, day: f64) -> Self {
        let (mut y, mut m) = (f64::from(year), f64::from(month));
        if m <= 2.0 {
            y -= 1.0;
            m += 12.0;
        }
        let gregorian = (year, month, day) >= (1582, 10, 15.0);
        let b = if gregorian {
            let a = (y / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        } else {
            0.0
        };
        let jd =
            (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5;
        Self::new(jd)
    }

    /// Calendar date plus clock time on this scale's axis.
    #[inline]
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let day_fraction = (f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0) / 24.0;
        Self::from_calendar(year, month, f64::from(day) + day_fraction)
    }

    /// Convert to a `chrono::DateTime<Utc>` (ΔT inverted to recover UT ≈ UTC).
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        const UNIX_EPOCH_JD: f64 = 2_440_587.5;
        let jd_ut = self.to::<UT>().quantity();
        let seconds_since_epoch = (jd_ut - Days::new(UNIX_EPOCH_JD)).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`, treating the UTC
    /// timestamp as UT and applying ΔT on the way to the target axis.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        const UNIX_EPOCH_JD: f64 = 2_440_587.5;
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(f64::from(datetime.timestamp_subsec_nanos()) / 1e9);
        let jd_ut = Days::new(UNIX_EPOCH_JD) + (seconds_since_epoch + nanos).to::<Day>();
        Time::<UT>::from_days(jd_ut).to::<S>()
    }

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

impl Instant {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0 (argument of the solar/lunar series).
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        ((*self - Self::J2000) / Self::JULIAN_CENTURY)
            .simplify()
            .value()
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}
