// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Classified search output.
//!
//! Events are a tagged union: each variant carries exactly the data that is
//! meaningful for it — a transit has an altitude but no bearing, a rise has
//! a bearing but no altitude. There is no flat "maybe rise, maybe set"
//! record anywhere in the crate.

use super::instant::Instant;
use qtty::{Days, Degrees};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Threshold for stars and planets: −34′, the conventional refraction at the
/// horizon for a point source.
pub const POINT_SOURCE_HORIZON: Degrees = Degrees::new(-34.0 / 60.0);

/// Threshold for the upper limb of the Sun: −50′ (refraction plus one solar
/// semi-diameter).
pub const SUN_HORIZON: Degrees = Degrees::new(-50.0 / 60.0);

/// Civil twilight boundary: Sun centre at −6°.
pub const CIVIL_TWILIGHT: Degrees = Degrees::new(-6.0);

/// Nautical twilight boundary: Sun centre at −12°.
pub const NAUTICAL_TWILIGHT: Degrees = Degrees::new(-12.0);

/// Astronomical twilight boundary: Sun centre at −18°.
pub const ASTRONOMICAL_TWILIGHT: Degrees = Degrees::new(-18.0);

/// Default sampling step: 10 minutes.
pub const DEFAULT_STEP: Days = Days::new(10.0 / 1440.0);

/// A rise, set or meridian-transit event.
///
/// Bearings are in degrees westward from south, [0°, 360°); altitudes are
/// geometric (unrefracted). `above_horizon` compares the transit altitude
/// against the query threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Upward crossing of the altitude threshold.
    Rise { time: Instant, bearing: Degrees },
    /// Downward crossing of the altitude threshold.
    Set { time: Instant, bearing: Degrees },
    /// Upper meridian crossing (hour angle 0°).
    SouthernTransit {
        time: Instant,
        altitude: Degrees,
        above_horizon: bool,
    },
    /// Lower meridian crossing (hour angle 180°).
    NorthernTransit {
        time: Instant,
        altitude: Degrees,
        above_horizon: bool,
    },
}

impl Event {
    /// The instant the event occurs at.
    pub fn time(&self) -> Instant {
        match self {
            Event::Rise { time, .. }
            | Event::Set { time, .. }
            | Event::SouthernTransit { time, .. }
            | Event::NorthernTransit { time, .. } => *time,
        }
    }

    /// True for `Rise` and `Set`.
    pub fn is_horizon_crossing(&self) -> bool {
        matches!(self, Event::Rise { .. } | Event::Set { .. })
    }
}

/// The six solar twilight boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwilightKind {
    CivilDawn,
    CivilDusk,
    NauticalDawn,
    NauticalDusk,
    AstronomicalDawn,
    AstronomicalDusk,
}

impl TwilightKind {
    /// The Sun-centre altitude this boundary is defined at.
    pub fn threshold(&self) -> Degrees {
        match self {
            TwilightKind::CivilDawn | TwilightKind::CivilDusk => CIVIL_TWILIGHT,
            TwilightKind::NauticalDawn | TwilightKind::NauticalDusk => NAUTICAL_TWILIGHT,
            TwilightKind::AstronomicalDawn | TwilightKind::AstronomicalDusk => {
                ASTRONOMICAL_TWILIGHT
            }
        }
    }

    #[cfg(feature = "serde")]
    fn label(&self) -> &'static str {
        match self {
            TwilightKind::CivilDawn => "civil_dawn",
            TwilightKind::CivilDusk => "civil_dusk",
            TwilightKind::NauticalDawn => "nautical_dawn",
            TwilightKind::NauticalDusk => "nautical_dusk",
            TwilightKind::AstronomicalDawn => "astronomical_dawn",
            TwilightKind::AstronomicalDusk => "astronomical_dusk",
        }
    }

    #[cfg(feature = "serde")]
    fn from_label(label: &str) -> Option<Self> {
        Some(match label {
            "civil_dawn" => TwilightKind::CivilDawn,
            "civil_dusk" => TwilightKind::CivilDusk,
            "nautical_dawn" => TwilightKind::NauticalDawn,
            "nautical_dusk" => TwilightKind::NauticalDusk,
            "astronomical_dawn" => TwilightKind::AstronomicalDawn,
            "astronomical_dusk" => TwilightKind::AstronomicalDusk,
            _ => return None,
        })
    }
}

/// A Sun twilight-boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwilightEvent {
    pub kind: TwilightKind,
    pub time: Instant,
}

// Serde support
//
// Hand-written flat encodings: an Event serializes as
// `{"type": "rise", "jd_tt": ..., "bearing_deg": ...}` and a TwilightEvent
// as `{"kind": "civil_dawn", "jd_tt": ...}`.
#[cfg(feature = "serde")]
impl Serialize for Event {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Event::Rise { time, bearing } | Event::Set { time, bearing } => {
                let mut s = serializer.serialize_struct("Event", 3)?;
                s.serialize_field(
                    "type",
                    if matches!(self, Event::Rise { .. }) {
                        "rise"
                    } else {
                        "set"
                    },
                )?;
                s.serialize_field("jd_tt", &time.value())?;
                s.serialize_field("bearing_deg", &bearing.value())?;
                s.end()
            }
            Event::SouthernTransit {
                time,
                altitude,
                above_horizon,
            }
            | Event::NorthernTransit {
                time,
                altitude,
                above_horizon,
            } => {
                let mut s = serializer.serialize_struct("Event", 4)?;
                s.serialize_field(
                    "type",
                    if matches!(self, Event::SouthernTransit { .. }) {
                        "southern_transit"
                    } else {
                        "northern_transit"
                    },
                )?;
                s.serialize_field("jd_tt", &time.value())?;
                s.serialize_field("altitude_deg", &altitude.value())?;
                s.serialize_field("above_horizon", above_horizon)?;
                s.end()
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            r#type: String,
            jd_tt: f64,
            bearing_deg: Option<f64>,
            altitude_deg: Option<f64>,
            above_horizon: Option<bool>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let time = Instant::new(raw.jd_tt);
        let missing = |field: &'static str| serde::de::Error::missing_field(field);
        match raw.r#type.as_str() {
            "rise" => Ok(Event::Rise {
                time,
                bearing: Degrees::new(raw.bearing_deg.ok_or_else(|| missing("bearing_deg"))?),
            }),
            "set" => Ok(Event::Set {
                time,
                bearing: Degrees::new(raw.bearing_deg.ok_or_else(|| missing("bearing_deg"))?),
            }),
            "southern_transit" => Ok(Event::SouthernTransit {
                time,
                altitude: Degrees::new(raw.altitude_deg.ok_or_else(|| missing("altitude_deg"))?),
                above_horizon: raw.above_horizon.ok_or_else(|| missing("above_horizon"))?,
            }),
            "northern_transit" => Ok(Event::NorthernTransit {
                time,
                altitude: Degrees::new(raw.altitude_deg.ok_or_else(|| missing("altitude_deg"))?),
                above_horizon: raw.above_horizon.ok_or_else(|| missing("above_horizon"))?,
            }),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["rise", "set", "southern_transit", "northern_transit"],
            )),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for TwilightEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TwilightEvent", 2)?;
        s.serialize_field("kind", self.kind.label())?;
        s.serialize_field("jd_tt", &self.time.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TwilightEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            kind: String,
            jd_tt: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        let kind = TwilightKind::from_label(&raw.kind).ok_or_else(|| {
            serde::de::Error::unknown_variant(&raw.kind, &["civil_dawn", "civil_dusk", "..."])
        })?;
        Ok(TwilightEvent {
            kind,
            time: Instant::new(raw.jd_tt),
        })
    }
}
