use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{PrayerName, PrayerTime};

/// The seven wall-clock times of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTimes {
    pub imsak: NaiveTime,
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl DailyTimes {
    pub fn get(&self, name: PrayerName) -> NaiveTime {
        match name {
            PrayerName::Imsak => self.imsak,
            PrayerName::Fajr => self.fajr,
            PrayerName::Sunrise => self.sunrise,
            PrayerName::Dhuhr => self.dhuhr,
            PrayerName::Asr => self.asr,
            PrayerName::Maghrib => self.maghrib,
            PrayerName::Isha => self.isha,
        }
    }

    pub(crate) fn set(&mut self, name: PrayerName, time: NaiveTime) {
        match name {
            PrayerName::Imsak => self.imsak = time,
            PrayerName::Fajr => self.fajr = time,
            PrayerName::Sunrise => self.sunrise = time,
            PrayerName::Dhuhr => self.dhuhr = time,
            PrayerName::Asr => self.asr = time,
            PrayerName::Maghrib => self.maghrib = time,
            PrayerName::Isha => self.isha = time,
        }
    }
}

/// One day of the takvim for a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTimetable {
    pub date: NaiveDate,
    pub weekday: String,
    pub islamic_events: Option<String>,
    /// "gjatesia e dites" as published, e.g. "9:12".
    pub day_length: Option<String>,
    pub times: DailyTimes,
}

impl DayTimetable {
    pub fn time(&self, name: PrayerName) -> NaiveTime {
        self.times.get(name)
    }

    /// All seven prayers in their fixed order.
    pub fn prayers(&self) -> Vec<PrayerTime> {
        PrayerName::ALL
            .iter()
            .map(|&name| PrayerTime::new(name, self.time(name)))
            .collect()
    }
}
