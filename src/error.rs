// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy of the event search.
//!
//! Every failure is reported before or during the scan; an interval that
//! simply contains no events yields an empty `Vec`, never an error.

use thiserror::Error;

/// Failure modes of an event query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The search interval is empty or reversed (`end <= start`).
    #[error("invalid interval: end JD {end} is not after start JD {start}")]
    InvalidInterval { start: f64, end: f64 },

    /// The observer latitude falls outside [−90°, +90°].
    #[error("invalid location: latitude {latitude}° outside [-90°, +90°]")]
    InvalidLocation { latitude: f64 },

    /// The search step is zero or negative.
    #[error("invalid config: step of {step} days is not positive")]
    InvalidConfig { step: f64 },

    /// The position source could not produce coordinates for an instant.
    /// Propagated as-is; the scan never retries or substitutes.
    #[error("position unavailable at JD(TT) {jd}: {reason}")]
    PositionUnavailable { jd: f64, reason: String },
}
