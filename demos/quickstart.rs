// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise, sunset and twilight for one day in Boston.
//!
//! Run with `cargo run --example quickstart`.

use ortus::{
    find_moon_events, find_sun_events, Event, Instant, Interval, LunarTheory, Observer,
    SearchConfig, SearchError,
};
use qtty::Degrees;

fn utc_label(t: Instant) -> String {
    t.to_utc()
        .map(|utc| utc.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| format!("{t}"))
}

fn main() -> Result<(), SearchError> {
    // Longitude is positive westward of Greenwich.
    let boston = Observer::new(Degrees::new(42.3583), Degrees::new(71.0833))?;
    let day = Interval::calendar_day(2026, 3, 20);

    let (sun_events, twilight) = find_sun_events(&day, &boston, &SearchConfig::sun())?;

    println!("Sun over Boston, 2026-03-20:");
    for event in &sun_events {
        match event {
            Event::Rise { time, bearing } => {
                println!("  rise     {}  bearing {bearing}", utc_label(*time));
            }
            Event::Set { time, bearing } => {
                println!("  set      {}  bearing {bearing}", utc_label(*time));
            }
            Event::SouthernTransit { time, altitude, .. } => {
                println!("  transit  {}  altitude {altitude}", utc_label(*time));
            }
            Event::NorthernTransit { .. } => {}
        }
    }

    println!("Twilight:");
    for boundary in &twilight {
        println!("  {:?} at {}", boundary.kind, utc_label(boundary.time));
    }

    let moon_events = find_moon_events(
        &day,
        &boston,
        LunarTheory::Extended,
        &SearchConfig::default(),
    )?;
    println!("Moon events: {}", moon_events.len());
    for event in &moon_events {
        println!("  {event:?}");
    }

    Ok(())
}
