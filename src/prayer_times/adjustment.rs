use log::debug;
use serde::Serialize;

use crate::models::{DayTimetable, PrayerName};
use crate::utils::time::shift_minutes;

/// Imsak is published as a fixed lead before Fajr in the Kosovo takvim.
pub const IMSAK_LEAD_MINUTES: i32 = 20;

/// Minute offsets applied to the reference takvim for one city.
/// Imsak is derived from Fajr and never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityAdjustment {
    pub city: &'static str,
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
}

impl CityAdjustment {
    const fn uniform(city: &'static str, delta: i32) -> Self {
        Self {
            city,
            fajr: -6 + delta,
            sunrise: -6 + delta,
            dhuhr: delta,
            asr: delta,
            maghrib: 6 + delta,
            isha: delta,
        }
    }

    /// Offset for a prayer; Imsak has none of its own.
    pub fn offset(&self, name: PrayerName) -> i32 {
        match name {
            PrayerName::Imsak => 0,
            PrayerName::Fajr => self.fajr,
            PrayerName::Sunrise => self.sunrise,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }
}

const KOSOVO_PROFILE: &str = "Kosovo";

// Kosovo base profile: temkin of 6 minutes on Fajr/Sunrise and Maghrib.
const ADJUSTMENTS: &[CityAdjustment] = &[
    CityAdjustment {
        city: "Unknown Location",
        fajr: -1,
        sunrise: -1,
        dhuhr: -1,
        asr: -1,
        maghrib: -1,
        isha: -1,
    },
    CityAdjustment {
        city: "Vushtrri",
        fajr: -1,
        sunrise: -1,
        dhuhr: -1,
        asr: -1,
        maghrib: -1,
        isha: -1,
    },
    CityAdjustment::uniform(KOSOVO_PROFILE, 0),
    CityAdjustment {
        city: "Sharri",
        fajr: -6,
        sunrise: -6,
        dhuhr: 0,
        asr: 0,
        maghrib: 8,
        isha: 2,
    },
    CityAdjustment::uniform("Ferizaj", -1),
    CityAdjustment::uniform("Gjilan", -1),
    CityAdjustment::uniform("Prishtina", -1),
    CityAdjustment::uniform("Podujeva", -1),
    CityAdjustment::uniform("Presheva", -2),
    CityAdjustment::uniform("Prizren", 0),
    CityAdjustment::uniform("Peja", 0),
    CityAdjustment::uniform("Gjakova", 0),
    CityAdjustment::uniform("Mitrovica", 0),
    CityAdjustment::uniform("Deçan", 0),
];

/// Names that count as Kosovo for the generic profile and the derived Imsak.
const KOSOVO_CITIES: &[&str] = &[
    "kosovo",
    "prishtina",
    "prizren",
    "peja",
    "gjakova",
    "ferizaj",
    "gjilan",
    "mitrovica",
    "deçan",
    "vushtrri",
];

pub fn known_cities() -> &'static [CityAdjustment] {
    ADJUSTMENTS
}

pub fn is_kosovo_city(city: &str) -> bool {
    let lower = city.to_lowercase();
    KOSOVO_CITIES.contains(&lower.as_str())
}

/// The profile `adjust` would apply to `city`, if any.
pub fn lookup(city: &str) -> Option<&'static CityAdjustment> {
    if city.trim().is_empty() {
        return None;
    }
    let lower = city.to_lowercase();
    ADJUSTMENTS
        .iter()
        .find(|adj| adj.city.to_lowercase() == lower)
        .or_else(|| {
            if is_kosovo_city(city) {
                ADJUSTMENTS.iter().find(|adj| adj.city == KOSOVO_PROFILE)
            } else {
                None
            }
        })
}

/// Correct a reference timetable for `city`.
///
/// Unknown and blank city names come back unchanged. For Kosovo cities Imsak
/// is recomputed as adjusted Fajr minus [`IMSAK_LEAD_MINUTES`].
pub fn adjust(timetable: &DayTimetable, city: &str) -> DayTimetable {
    let Some(profile) = lookup(city) else {
        debug!("No adjustment profile for city '{}'", city);
        return timetable.clone();
    };
    debug!("Adjusting {} with profile '{}'", timetable.date, profile.city);

    let mut adjusted = timetable.clone();
    for name in PrayerName::ALL {
        if name == PrayerName::Imsak {
            continue;
        }
        let shifted = shift_minutes(timetable.time(name), profile.offset(name));
        adjusted.times.set(name, shifted);
    }

    if is_kosovo_city(city) {
        adjusted.times.imsak = shift_minutes(adjusted.times.fajr, -IMSAK_LEAD_MINUTES);
    }
    adjusted
}
