// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! End-to-end scenarios: reference data from Meeus, *Astronomical
//! Algorithms* (2nd ed.), plus geometric edge cases at polar latitudes.

use ortus::{
    angle::from_dms, find_moon_events, find_star_events, find_sun_events, position, Equatorial,
    Event, Instant, Interval, LunarTheory, Observer, SearchConfig, TwilightKind,
};
use qtty::{Days, Degrees};

fn boston() -> Observer {
    Observer::new(Degrees::new(42.3333), Degrees::new(71.0833)).unwrap()
}

fn rise_time(events: &[Event]) -> Option<Instant> {
    events.iter().find_map(|e| match e {
        Event::Rise { time, .. } => Some(*time),
        _ => None,
    })
}

fn set_time(events: &[Event]) -> Option<Instant> {
    events.iter().find_map(|e| match e {
        Event::Set { time, .. } => Some(*time),
        _ => None,
    })
}

fn southern_transits(events: &[Event]) -> Vec<(Instant, Degrees, bool)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::SouthernTransit {
                time,
                altitude,
                above_horizon,
            } => Some((*time, *altitude, *above_horizon)),
            _ => None,
        })
        .collect()
}

fn northern_transits(events: &[Event]) -> Vec<(Instant, Degrees, bool)> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::NorthernTransit {
                time,
                altitude,
                above_horizon,
            } => Some((*time, *altitude, *above_horizon)),
            _ => None,
        })
        .collect()
}

/// Meeus ch. 3 interpolation through three equally spaced tabular values,
/// `n` in units of the tabular step around the middle value.
fn interpolate(n: f64, y0: f64, y1: f64, y2: f64) -> f64 {
    let a = y1 - y0;
    let b = y2 - y1;
    let c = b - a;
    y1 + (n / 2.0) * (a + b) + (n * n / 2.0) * c
}

/// Venus as seen from Boston on 1988 March 20 — the classic example 15.a.
/// Apparent RA/Dec tabulated for March 19/20/21 0ʰ TT.
fn venus_1988() -> impl ortus::PositionSource {
    const MARCH_20: f64 = 2_447_240.5;
    position::from_fn(move |t: Instant| {
        let n = t.value() - MARCH_20;
        Ok(Equatorial::new(
            Degrees::new(interpolate(n, 40.68021, 41.73129, 42.78204)),
            Degrees::new(interpolate(n, 18.04761, 18.44092, 18.82742)),
        ))
    })
}

#[test]
fn venus_boston_1988_reference_times() {
    let day = Interval::calendar_day(1988, 3, 20);
    let config = SearchConfig::default().with_threshold(Degrees::new(-0.5667));
    let events = ortus::find_events(&venus_1988(), &day, &boston(), &config).unwrap();

    // Meeus gives (UT) setting 2ʰ55ᵐ, rising 12ʰ25ᵐ, transit 19ʰ41ᵐ;
    // on the TT axis those shift by ΔT ≈ 56 s.
    let two_minutes = Days::new(2.0 / 1440.0);

    let set = set_time(&events).expect("Venus sets before dawn");
    let expected_set = Instant::from_ymd_hms(1988, 3, 20, 2, 55, 36.0);
    assert!(
        (set - expected_set).abs() < two_minutes,
        "set at JD {}, expected about JD {}",
        set,
        expected_set
    );

    let rise = rise_time(&events).expect("Venus rises mid-day");
    let expected_rise = Instant::from_ymd_hms(1988, 3, 20, 12, 26, 22.0);
    assert!((rise - expected_rise).abs() < two_minutes);

    let transits = southern_transits(&events);
    assert_eq!(transits.len(), 1);
    let expected_transit = Instant::from_ymd_hms(1988, 3, 20, 19, 41, 26.0);
    assert!((transits[0].0 - expected_transit).abs() < two_minutes);
    assert!(transits[0].2, "Venus culminates above the horizon");

    // set before rise before transit on this particular day
    assert!(set < rise && rise < transits[0].0);
}

#[test]
fn circumpolar_star_never_sets() {
    // δ = +89°15′50.9″ seen from φ = +49°09′03″: always up.
    let star = Equatorial::new(Degrees::new(37.95), from_dms(89.0, 15.0, 50.9));
    let site = Observer::new(from_dms(49.0, 9.0, 3.0), Degrees::new(0.0)).unwrap();
    let day = Interval::calendar_day(2026, 8, 24);
    let events = find_star_events(star, &day, &site, &SearchConfig::default()).unwrap();

    assert!(rise_time(&events).is_none());
    assert!(set_time(&events).is_none());

    // One upper and one lower culmination per sidereal day, nothing else.
    let southern = southern_transits(&events);
    let northern = northern_transits(&events);
    assert_eq!(southern.len(), 1);
    assert_eq!(northern.len(), 1);
    for (_, altitude, above) in southern.iter().chain(&northern) {
        assert!(*above, "circumpolar star transits above the horizon");
        assert!(*altitude > Degrees::new(48.0) && *altitude < Degrees::new(50.0));
    }
}

#[test]
fn same_star_never_rises_from_the_south() {
    let star = Equatorial::new(Degrees::new(37.95), from_dms(89.0, 15.0, 50.9));
    let site = Observer::new(from_dms(-70.0, 40.0, 25.0), Degrees::new(0.0)).unwrap();
    let day = Interval::calendar_day(2026, 8, 24);
    let events = find_star_events(star, &day, &site, &SearchConfig::default()).unwrap();

    assert!(rise_time(&events).is_none());
    assert!(set_time(&events).is_none());

    assert_eq!(southern_transits(&events).len(), 1);
    assert_eq!(northern_transits(&events).len(), 1);
    let transits: Vec<_> = southern_transits(&events)
        .into_iter()
        .chain(northern_transits(&events))
        .collect();
    for (_, altitude, above) in &transits {
        assert!(!*above, "the star never clears the horizon");
        assert!(*altitude < Degrees::new(-69.0));
    }
}

#[test]
fn polar_winter_sun() {
    // 75°N at the December solstice: polar night with partial twilight.
    let site = Observer::new(Degrees::new(75.0), Degrees::new(0.0)).unwrap();
    let day = Interval::calendar_day(2000, 12, 21);
    let (events, twilight) = find_sun_events(&day, &site, &SearchConfig::sun()).unwrap();

    assert!(rise_time(&events).is_none());
    assert!(set_time(&events).is_none());
    for (_, _, above) in southern_transits(&events) {
        assert!(!above, "midwinter Sun stays below the horizon");
    }

    let kinds: Vec<TwilightKind> = twilight.iter().map(|e| e.kind).collect();
    assert!(!kinds.contains(&TwilightKind::CivilDawn));
    assert!(!kinds.contains(&TwilightKind::CivilDusk));
    assert!(kinds.contains(&TwilightKind::NauticalDawn));
    assert!(kinds.contains(&TwilightKind::NauticalDusk));
    assert!(kinds.contains(&TwilightKind::AstronomicalDawn));
    assert!(kinds.contains(&TwilightKind::AstronomicalDusk));
}

#[test]
fn polar_summer_sun() {
    // 75°N at the June solstice: midnight sun, no twilight of any kind.
    let site = Observer::new(Degrees::new(75.0), Degrees::new(0.0)).unwrap();
    let day = Interval::calendar_day(2000, 6, 21);
    let (events, twilight) = find_sun_events(&day, &site, &SearchConfig::sun()).unwrap();

    assert!(rise_time(&events).is_none());
    assert!(set_time(&events).is_none());
    assert!(twilight.is_empty());

    let transits: Vec<_> = southern_transits(&events)
        .into_iter()
        .chain(northern_transits(&events))
        .collect();
    assert!(!transits.is_empty());
    for (_, _, above) in &transits {
        assert!(*above, "the midnight sun never sets");
    }
}

#[test]
fn west_longitude_delays_transit() {
    // Moving 15° west delays a star's meridian passage by one sidereal hour
    // (≈ 59ᵐ50ˢ of solar time); moving east advances it.
    let star = Equatorial::new(Degrees::new(180.0), Degrees::new(10.0));
    let day = Interval::calendar_day(2026, 8, 24);
    let config = SearchConfig::default();

    let transit_at = |longitude_west: f64| -> Instant {
        let site = Observer::new(Degrees::new(30.0), Degrees::new(longitude_west)).unwrap();
        let events = find_star_events(star, &day, &site, &config).unwrap();
        southern_transits(&events)
            .first()
            .map(|(t, _, _)| *t)
            .expect("one upper transit per day")
    };

    let greenwich = transit_at(0.0);
    let west = transit_at(15.0);
    let east = transit_at(-15.0);

    let sidereal_hour = Days::new(0.997_269_57 / 24.0);
    let minute = Days::new(1.0 / 1440.0);
    assert!(((west - greenwich) - sidereal_hour).abs() < minute);
    assert!(((greenwich - east) - sidereal_hour).abs() < minute);
}

#[test]
fn sampling_phase_does_not_move_events() {
    let star = Equatorial::new(Degrees::new(120.0), Degrees::new(5.0));
    let site = Observer::new(Degrees::new(40.0), Degrees::new(71.0)).unwrap();
    let config = SearchConfig::default();

    let day = Interval::calendar_day(2026, 8, 24);
    let shifted = Interval::new(day.start + Days::new(4.0 / 1440.0), day.end);

    let base = find_star_events(star, &day, &site, &config).unwrap();
    let moved = find_star_events(star, &shifted, &site, &config).unwrap();

    let five_seconds = Days::new(5.0 / 86_400.0);
    let pairs = [
        (rise_time(&base), rise_time(&moved)),
        (set_time(&base), set_time(&moved)),
    ];
    for (a, b) in pairs {
        let (a, b) = (a.expect("event in base run"), b.expect("event in shifted run"));
        assert!((a - b).abs() < five_seconds, "grid phase moved an event");
    }
}

#[test]
fn results_are_ordered_contained_and_reproducible() {
    let site = boston();
    let span = Interval::new(
        Instant::from_calendar(2026, 8, 20.0),
        Instant::from_calendar(2026, 8, 24.0),
    );

    let first = find_moon_events(&span, &site, LunarTheory::Extended, &SearchConfig::default())
        .unwrap();
    let second = find_moon_events(&span, &site, LunarTheory::Extended, &SearchConfig::default())
        .unwrap();
    assert_eq!(first, second, "repeat query must be bit-identical");

    assert!(!first.is_empty());
    for pair in first.windows(2) {
        assert!(pair[0].time() <= pair[1].time());
    }
    for event in &first {
        assert!(span.contains(event.time()));
    }
}

#[test]
fn moon_rises_and_sets_from_mid_latitudes() {
    // Over four days the Moon must rise and set several times from Boston.
    let span = Interval::new(
        Instant::from_calendar(2026, 8, 20.0),
        Instant::from_calendar(2026, 8, 24.0),
    );
    let events = find_moon_events(
        &span,
        &boston(),
        LunarTheory::Truncated,
        &SearchConfig::default(),
    )
    .unwrap();

    let rises = events
        .iter()
        .filter(|e| matches!(e, Event::Rise { .. }))
        .count();
    let sets = events
        .iter()
        .filter(|e| matches!(e, Event::Set { .. }))
        .count();
    assert!(rises >= 3, "{rises} rises over four days");
    assert!(sets >= 3, "{sets} sets over four days");

    // rises and sets alternate
    let mut last_was_rise: Option<bool> = None;
    for event in events.iter().filter(|e| e.is_horizon_crossing()) {
        let is_rise = matches!(event, Event::Rise { .. });
        if let Some(previous) = last_was_rise {
            assert_ne!(previous, is_rise, "two consecutive {event:?}");
        }
        last_was_rise = Some(is_rise);
    }
}

#[test]
fn equinox_sun_rises_close_to_due_east() {
    // At the equinox the Sun rises ≈ 90° from the meridian. Bearings are
    // west of south, so sunrise sits near 270°.
    let day = Interval::calendar_day(2026, 3, 20);
    let (events, _) = find_sun_events(&day, &boston(), &SearchConfig::sun()).unwrap();

    let bearing = events
        .iter()
        .find_map(|e| match e {
            Event::Rise { bearing, .. } => Some(*bearing),
            _ => None,
        })
        .expect("sunrise");
    assert!(
        (bearing - Degrees::new(270.0)).abs() < Degrees::new(3.0),
        "sunrise bearing = {}",
        bearing
    );
}
