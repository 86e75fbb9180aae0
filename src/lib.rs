// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rise, Transit & Set Event Finder
//!
//! This crate computes the instants at which a celestial object rises above,
//! culminates over, and sets below an apparent-altitude threshold, as seen
//! from a point on Earth — plus the civil, nautical and astronomical
//! twilight boundaries for the Sun.
//!
//! # Core types
//!
//! - [`Instant`] — a Julian Day on the Terrestrial Time axis (`Time<TT>`).
//! - [`Interval<S>`] — the time span a query scans.
//! - [`Observer`] — geographic site; longitude positive **westward**.
//! - [`PositionSource`] — anything that yields apparent RA/Dec for an
//!   instant: [`Sun`], [`Moon`], a fixed [`Equatorial`], or a closure via
//!   [`position::from_fn`].
//! - [`Event`] — tagged result: `Rise`, `Set`, `SouthernTransit`,
//!   `NorthernTransit`, each with its own payload.
//! - [`TwilightEvent`] — one of the six solar twilight boundary crossings.
//!
//! # Quick example
//! ```rust
//! use ortus::{find_sun_events, Interval, Observer, SearchConfig};
//! use qtty::Degrees;
//!
//! let boston = Observer::new(Degrees::new(42.3583), Degrees::new(71.0833))?;
//! let day = Interval::calendar_day(2026, 3, 20);
//! let (events, twilight) = find_sun_events(&day, &boston, &SearchConfig::sun())?;
//! for event in &events {
//!     println!("{event:?}");
//! }
//! assert!(!twilight.is_empty());
//! # Ok::<(), ortus::SearchError>(())
//! ```
//!
//! # How it works
//!
//! The search samples the object's altitude and hour angle on a fixed grid
//! (10 minutes by default), brackets every sign change, and sharpens each
//! bracket with a single closed-form quadratic interpolation through three
//! consecutive samples. Every query runs on the uniform TT axis; ΔT and
//! sidereal time are handled internally.
//!
//! The threshold is the caller's contract: it must already include
//! refraction, semi-diameter and any horizon-dip correction. The constants
//! [`POINT_SOURCE_HORIZON`] (−34′) and [`SUN_HORIZON`] (−50′) cover the
//! standard cases.

pub mod angle;
mod delta_t;
pub mod event;
pub mod horizontal;
pub(crate) mod instant;
mod interval;
pub mod moon;
mod observer;
pub mod position;
mod query;
pub mod sidereal;
pub mod sun;

mod error;
mod search;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::SearchError;
pub use event::{
    Event, TwilightEvent, TwilightKind, ASTRONOMICAL_TWILIGHT, CIVIL_TWILIGHT, DEFAULT_STEP,
    NAUTICAL_TWILIGHT, POINT_SOURCE_HORIZON, SUN_HORIZON,
};
pub use instant::{Instant, Time, TimeScale, TT, UT};
pub use interval::Interval;
pub use moon::{LunarTheory, Moon};
pub use observer::Observer;
pub use position::{Equatorial, PositionSource};
pub use query::{find_events, find_moon_events, find_star_events, find_sun_events, SearchConfig};
pub use sun::Sun;

/// Universal Time instant — Earth-rotation axis, used by sidereal time.
pub type UniversalTime = Time<UT>;
