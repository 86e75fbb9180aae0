// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent equatorial coordinates and the position-source seam.
//!
//! The event search is generic over [`PositionSource`]: anything that can
//! produce apparent RA/Dec for an instant can be searched for rises, sets
//! and transits. The crate ships three implementors — a fixed [`Equatorial`]
//! (stars), [`Sun`](crate::sun::Sun), and [`Moon`](crate::moon::Moon) — and
//! [`from_fn`] adapts any closure, e.g. an external planetary ephemeris.

use super::error::SearchError;
use super::instant::Instant;
use qtty::Degrees;

/// Apparent equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Apparent right ascension.
    pub ra: Degrees,
    /// Apparent declination.
    pub dec: Degrees,
}

impl Equatorial {
    pub const fn new(ra: Degrees, dec: Degrees) -> Self {
        Equatorial { ra, dec }
    }
}

/// Produces the apparent position of an object at a given instant.
///
/// Errors are propagated to the caller unchanged; the search never retries
/// a failed evaluation.
pub trait PositionSource {
    fn position_at(&self, t: Instant) -> Result<Equatorial, SearchError>;
}

/// A fixed position: the object does not move over the search interval.
impl PositionSource for Equatorial {
    #[inline]
    fn position_at(&self, _t: Instant) -> Result<Equatorial, SearchError> {
        Ok(*self)
    }
}

/// Closure-backed position source, built with [`from_fn`].
pub struct FnSource<F>(F);

impl<F> PositionSource for FnSource<F>
where
    F: Fn(Instant) -> Result<Equatorial, SearchError>,
{
    #[inline]
    fn position_at(&self, t: Instant) -> Result<Equatorial, SearchError> {
        (self.0)(t)
    }
}

/// Wrap a closure as a [`PositionSource`].
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: Fn(Instant) -> Result<Equatorial, SearchError>,
{
    FnSource(f)
}
