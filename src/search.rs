// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sampling and root refinement.
//!
//! The search walks a fixed-step grid over the interval, brackets sign
//! changes of a sampled function, and sharpens each bracket with a single
//! closed-form quadratic interpolation through three consecutive samples
//! (Meeus ch. 3). There is no iterative root polishing: one step of the
//! default 10 minutes leaves the quadratic within a couple of seconds of
//! the true crossing, and the one-shot form keeps results bit-reproducible.

use super::instant::{Instant, TT};
use super::interval::Interval;
use qtty::Days;

/// Relative tolerance for "equally spaced" sample triples.
const SPACING_TOLERANCE: f64 = 1e-9;

/// A sampled value of the tracked function.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sample {
    pub t: Instant,
    pub value: f64,
}

/// A refined sign change of the sampled function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Crossing {
    pub time: Instant,
    /// True when the function passes from ≤ 0 to > 0.
    pub rising: bool,
}

/// Sample instants `start + i·step`, with the final sample exactly at `end`.
///
/// The last step may be shorter than `step`; the refiner detects the unequal
/// spacing and falls back to linear interpolation there.
pub(crate) fn sample_times(interval: &Interval<TT>, step: Days) -> Vec<Instant> {
    let mut times = Vec::new();
    let mut t = interval.start;
    while t < interval.end {
        times.push(t);
        t = (t + step).min(interval.end);
    }
    times.push(interval.end);
    times
}

/// Bracket and refine every sign change in a sample series.
///
/// A bracket `[tᵢ, tᵢ₊₁]` is a rising crossing when `f(tᵢ) ≤ 0 < f(tᵢ₊₁)`
/// and a falling one when `f(tᵢ₊₁) ≤ 0 < f(tᵢ)`; a sample sitting exactly
/// on zero counts as "not above".
///
/// `max_jump` rejects pairs whose values differ by more than the given
/// amount — used to skip the ±180° wrap of hour-angle series. Pass
/// `f64::INFINITY` for continuous functions.
pub(crate) fn find_crossings(samples: &[Sample], max_jump: f64) -> Vec<Crossing> {
    let mut crossings = Vec::new();
    for i in 0..samples.len().saturating_sub(1) {
        let (a, b) = (samples[i], samples[i + 1]);
        if (b.value - a.value).abs() > max_jump {
            continue;
        }
        let rising = a.value <= 0.0 && b.value > 0.0;
        let falling = b.value <= 0.0 && a.value > 0.0;
        if rising || falling {
            crossings.push(Crossing {
                time: refine(samples, i, max_jump),
                rising,
            });
        }
    }
    crossings
}

/// Refine a crossing bracketed between samples `i` and `i + 1`.
fn refine(samples: &[Sample], i: usize, max_jump: f64) -> Instant {
    // Prefer the triple centred on the later bracket endpoint (root in
    // [-1, 0]); fall back to the one centred on the earlier (root in [0, 1]).
    if let Some(t) = quadratic_root(samples, i, max_jump) {
        return t;
    }
    linear_root(&samples[i], &samples[i + 1])
}

fn quadratic_root(samples: &[Sample], i: usize, max_jump: f64) -> Option<Instant> {
    let centred_late = triple(samples, i, i + 1, max_jump);
    let centred_early = i.checked_sub(1).and_then(|p| triple(samples, p, i, max_jump));

    if let Some(t) = centred_late.and_then(|tr| solve(tr, -1.0, 0.0)) {
        return Some(t);
    }
    centred_early.and_then(|tr| solve(tr, 0.0, 1.0))
}

struct Triple {
    centre: Instant,
    step: Days,
    y0: f64,
    y1: f64,
    y2: f64,
}

/// Three consecutive samples centred at `first + 1`, provided they exist,
/// are equally spaced, and contain no wrap jump.
fn triple(samples: &[Sample], first: usize, centre: usize, max_jump: f64) -> Option<Triple> {
    debug_assert_eq!(centre, first + 1);
    let s0 = samples.get(first)?;
    let s1 = samples.get(centre)?;
    let s2 = samples.get(centre + 1)?;

    let left = s1.t - s0.t;
    let right = s2.t - s1.t;
    if (right - left).abs().value() > SPACING_TOLERANCE * left.value().abs() {
        return None;
    }
    if (s1.value - s0.value).abs() > max_jump || (s2.value - s1.value).abs() > max_jump {
        return None;
    }
    Some(Triple {
        centre: s1.t,
        step: left,
        y0: s0.value,
        y1: s1.value,
        y2: s2.value,
    })
}

/// Solve the Meeus ch. 3 interpolating parabola for a root with
/// `n ∈ [n_min, n_max]` around the centre sample.
fn solve(tr: Triple, n_min: f64, n_max: f64) -> Option<Instant> {
    let a = tr.y1 - tr.y0;
    let b = tr.y2 - tr.y1;
    let c = b - a;

    // y(n) = (c/2)·n² + ((a+b)/2)·n + y₁
    let half_c = c / 2.0;
    let slope = (a + b) / 2.0;

    let roots: [f64; 2] = if half_c.abs() < f64::EPSILON * slope.abs() {
        if slope == 0.0 {
            return None;
        }
        let n = -tr.y1 / slope;
        [n, f64::NAN]
    } else {
        let discriminant = slope * slope - 4.0 * half_c * tr.y1;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        [
            (-slope + sqrt_d) / (2.0 * half_c),
            (-slope - sqrt_d) / (2.0 * half_c),
        ]
    };

    let slack = 1e-9;
    roots
        .into_iter()
        .filter(|n| n.is_finite() && (n_min - slack..=n_max + slack).contains(n))
        .min_by(|x, y| x.abs().partial_cmp(&y.abs()).unwrap_or(std::cmp::Ordering::Equal))
        .map(|n| tr.centre + n * tr.step)
}

/// Straight-line root between two bracketing samples.
fn linear_root(a: &Sample, b: &Sample) -> Instant {
    let denominator = a.value - b.value;
    if denominator == 0.0 {
        return a.t;
    }
    let fraction = a.value / denominator;
    a.t + fraction * (b.t - a.t)
}
