// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Search interval.
//!
//! An [`Interval<S>`] is the closed time span a query scans for events.
//! Validity (`end > start`) is checked at the query surface, not here, so the
//! type itself stays a plain value pair.

use super::instant::{Time, TimeScale, TT};
use chrono::{DateTime, Utc};
use qtty::Days;
use std::fmt;

/// A span between two instants on time scale `S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<S: TimeScale> {
    pub start: Time<S>,
    pub end: Time<S>,
}

impl<S: TimeScale> Interval<S> {
    /// Creates a new interval between two instants.
    pub const fn new(start: Time<S>, end: Time<S>) -> Self {
        Interval { start, end }
    }

    /// Duration as `end − start` (negative if the interval is reversed).
    #[inline]
    pub fn duration(&self) -> Days {
        self.end - self.start
    }

    /// True when `t` lies inside the closed span, inclusive at both ends.
    #[inline]
    pub fn contains(&self, t: Time<S>) -> bool {
        self.start <= t && t <= self.end
    }

    /// Convert both endpoints to another time scale.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Interval<T> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }

    /// Build an interval from a pair of UTC timestamps.
    pub fn from_utc(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Interval::new(Time::<S>::from_utc(start), Time::<S>::from_utc(end))
    }
}

impl Interval<TT> {
    /// A full civil day starting at 0ʰ TT on the given calendar date.
    pub fn calendar_day(year: i32, month: u32, day: u32) -> Self {
        let start = Time::<TT>::from_calendar(year, month, f64::from(day));
        Interval::new(start, start + Days::new(1.0))
    }
}

impl<S: TimeScale> fmt::Display for Interval<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
