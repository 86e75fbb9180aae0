// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Event queries.
//!
//! One generic core, [`find_events`], runs the whole pipeline — sample,
//! bracket, refine, classify — for any [`PositionSource`]. The Sun, Moon
//! and fixed-star entry points are thin adapters over it; the Sun adapter
//! additionally scans the three twilight thresholds from the same sample
//! pass.

use super::error::SearchError;
use super::event::{
    Event, TwilightEvent, TwilightKind, DEFAULT_STEP, POINT_SOURCE_HORIZON, SUN_HORIZON,
};
use super::horizontal::{altitude, bearing, hour_angle};
use super::instant::{Instant, TT};
use super::interval::Interval;
use super::moon::{LunarTheory, Moon};
use super::observer::Observer;
use super::position::{Equatorial, PositionSource};
use super::search::{find_crossings, sample_times, Crossing, Sample};
use super::sun::Sun;
use qtty::{Days, Degrees};

/// Search parameters.
///
/// `threshold` is the apparent altitude defining "risen" — it must already
/// contain every correction the caller cares about (refraction, semi-
/// diameter, horizon dip). `step` is the sampling period; events closer
/// together than one step may be missed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub threshold: Degrees,
    pub step: Days,
}

impl Default for SearchConfig {
    /// Point-source defaults: −34′ threshold, 10-minute step.
    fn default() -> Self {
        SearchConfig {
            threshold: POINT_SOURCE_HORIZON,
            step: DEFAULT_STEP,
        }
    }
}

impl SearchConfig {
    /// Upper-limb solar defaults: −50′ threshold, 10-minute step.
    pub fn sun() -> Self {
        SearchConfig {
            threshold: SUN_HORIZON,
            step: DEFAULT_STEP,
        }
    }

    /// Same configuration with another threshold.
    pub fn with_threshold(mut self, threshold: Degrees) -> Self {
        self.threshold = threshold;
        self
    }

    /// Same configuration with another sampling step.
    pub fn with_step(mut self, step: Days) -> Self {
        self.step = step;
        self
    }

    fn validate(&self) -> Result<(), SearchError> {
        if !(self.step.value() > 0.0) || !self.step.value().is_finite() {
            return Err(SearchError::InvalidConfig {
                step: self.step.value(),
            });
        }
        Ok(())
    }
}

/// One evaluated grid point: everything derivable from a single position
/// lookup.
struct SkySample {
    t: Instant,
    /// Geometric altitude, degrees.
    altitude: f64,
    /// Hour angle wrapped to (−180°, 180°], degrees.
    hour_angle: f64,
    /// Hour angle measured from the lower meridian, same wrap.
    lower_hour_angle: f64,
}

/// Jumps above this are ±180° wraps of an hour-angle series, not crossings.
const HOUR_ANGLE_JUMP: f64 = 180.0;

/// Find every rise, set and transit of `source` over `interval`.
///
/// Events come back sorted by time, each inside the interval. An empty
/// vector is a valid result: the object never crossed the threshold and no
/// meridian passage fell inside the span.
pub fn find_events<P: PositionSource>(
    source: &P,
    interval: &Interval<TT>,
    observer: &Observer,
    config: &SearchConfig,
) -> Result<Vec<Event>, SearchError> {
    let samples = collect_samples(source, interval, observer, config)?;
    let mut events = classify(source, interval, observer, config, &samples)?;
    sort_by_time(&mut events, Event::time);
    Ok(events)
}

/// Find solar events plus the six twilight boundaries.
///
/// The twilight scan reuses the altitude samples of the main scan, so the
/// solar series is evaluated once per grid point regardless of how many
/// thresholds cross.
pub fn find_sun_events(
    interval: &Interval<TT>,
    observer: &Observer,
    config: &SearchConfig,
) -> Result<(Vec<Event>, Vec<TwilightEvent>), SearchError> {
    let sun = Sun;
    let samples = collect_samples(&sun, interval, observer, config)?;
    let mut events = classify(&sun, interval, observer, config, &samples)?;
    sort_by_time(&mut events, Event::time);

    let mut twilight = Vec::new();
    for (dawn, dusk) in [
        (TwilightKind::CivilDawn, TwilightKind::CivilDusk),
        (TwilightKind::NauticalDawn, TwilightKind::NauticalDusk),
        (
            TwilightKind::AstronomicalDawn,
            TwilightKind::AstronomicalDusk,
        ),
    ] {
        let threshold = dawn.threshold().value();
        let series: Vec<Sample> = samples
            .iter()
            .map(|s| Sample {
                t: s.t,
                value: s.altitude - threshold,
            })
            .collect();
        for crossing in find_crossings(&series, f64::INFINITY) {
            twilight.push(TwilightEvent {
                kind: if crossing.rising { dawn } else { dusk },
                time: clamp_to(interval, crossing.time),
            });
        }
    }
    sort_by_time(&mut twilight, |e| e.time);

    Ok((events, twilight))
}

/// Lunar events with the requested series truncation.
pub fn find_moon_events(
    interval: &Interval<TT>,
    observer: &Observer,
    theory: LunarTheory,
    config: &SearchConfig,
) -> Result<Vec<Event>, SearchError> {
    find_events(&Moon::new(theory), interval, observer, config)
}

/// Events of an object at fixed apparent coordinates.
pub fn find_star_events(
    coordinates: Equatorial,
    interval: &Interval<TT>,
    observer: &Observer,
    config: &SearchConfig,
) -> Result<Vec<Event>, SearchError> {
    find_events(&coordinates, interval, observer, config)
}

fn collect_samples<P: PositionSource>(
    source: &P,
    interval: &Interval<TT>,
    observer: &Observer,
    config: &SearchConfig,
) -> Result<Vec<SkySample>, SearchError> {
    config.validate()?;
    if interval.end <= interval.start {
        return Err(SearchError::InvalidInterval {
            start: interval.start.value(),
            end: interval.end.value(),
        });
    }

    sample_times(interval, config.step)
        .into_iter()
        .map(|t| {
            let position = source.position_at(t)?;
            let h = hour_angle(t, observer, position.ra);
            let alt = altitude(observer, position.dec, h);
            Ok(SkySample {
                t,
                altitude: alt.value(),
                hour_angle: h.value(),
                lower_hour_angle: crate::angle::wrap_180(h - Degrees::new(180.0)).value(),
            })
        })
        .collect()
}

fn classify<P: PositionSource>(
    source: &P,
    interval: &Interval<TT>,
    observer: &Observer,
    config: &SearchConfig,
    samples: &[SkySample],
) -> Result<Vec<Event>, SearchError> {
    let mut events = Vec::new();

    let threshold = config.threshold.value();
    let altitude_series: Vec<Sample> = samples
        .iter()
        .map(|s| Sample {
            t: s.t,
            value: s.altitude - threshold,
        })
        .collect();
    for crossing in find_crossings(&altitude_series, f64::INFINITY) {
        events.push(horizon_event(source, interval, observer, &crossing)?);
    }

    let upper_series: Vec<Sample> = samples
        .iter()
        .map(|s| Sample {
            t: s.t,
            value: s.hour_angle,
        })
        .collect();
    for crossing in find_crossings(&upper_series, HOUR_ANGLE_JUMP) {
        events.push(transit_event(source, interval, observer, config, &crossing, true)?);
    }

    let lower_series: Vec<Sample> = samples
        .iter()
        .map(|s| Sample {
            t: s.t,
            value: s.lower_hour_angle,
        })
        .collect();
    for crossing in find_crossings(&lower_series, HOUR_ANGLE_JUMP) {
        events.push(transit_event(source, interval, observer, config, &crossing, false)?);
    }

    Ok(events)
}

/// Build a `Rise`/`Set` at the refined instant, bearing re-evaluated there.
fn horizon_event<P: PositionSource>(
    source: &P,
    interval: &Interval<TT>,
    observer: &Observer,
    crossing: &Crossing,
) -> Result<Event, SearchError> {
    let time = clamp_to(interval, crossing.time);
    let position = source.position_at(time)?;
    let h = hour_angle(time, observer, position.ra);
    let bearing = bearing(observer, position.dec, h);
    Ok(if crossing.rising {
        Event::Rise { time, bearing }
    } else {
        Event::Set { time, bearing }
    })
}

/// Build a transit at the refined instant, altitude re-evaluated there.
fn transit_event<P: PositionSource>(
    source: &P,
    interval: &Interval<TT>,
    observer: &Observer,
    config: &SearchConfig,
    crossing: &Crossing,
    southern: bool,
) -> Result<Event, SearchError> {
    let time = clamp_to(interval, crossing.time);
    let position = source.position_at(time)?;
    let h = hour_angle(time, observer, position.ra);
    let altitude = altitude(observer, position.dec, h);
    let above_horizon = altitude >= config.threshold;
    Ok(if southern {
        Event::SouthernTransit {
            time,
            altitude,
            above_horizon,
        }
    } else {
        Event::NorthernTransit {
            time,
            altitude,
            above_horizon,
        }
    })
}

/// Refinement slack can nudge a root a hair past an endpoint; pin it back.
fn clamp_to(interval: &Interval<TT>, t: Instant) -> Instant {
    t.max(interval.start).min(interval.end)
}

fn sort_by_time<T>(items: &mut [T], time: impl Fn(&T) -> Instant) {
    items.sort_by(|a, b| {
        time(a)
            .value()
            .partial_cmp(&time(b).value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
