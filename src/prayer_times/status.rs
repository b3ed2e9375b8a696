use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{DayTimetable, PrayerName, PrayerStatus, PrayerTime};
use crate::utils::time::{time_remaining, TimeRemaining};

const IMSAK: usize = 0;
const FAJR: usize = 1;
const ISHA: usize = 6;

/// Where "now" falls in a day's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// All seven prayers in fixed order, exactly one current and one next.
    pub per_prayer: Vec<PrayerStatus>,
    pub current: PrayerTime,
    pub next: PrayerTime,
    pub next_is_tomorrow: bool,
    /// Imsak was made current by the pre-dawn rules rather than by the scan.
    pub imsak_override: bool,
    pub time_remaining: TimeRemaining,
}

impl StatusReport {
    /// Isha is running and the next marker is tomorrow's Imsak.
    pub fn imsak_follows_isha(&self) -> bool {
        self.current.name == PrayerName::Isha && self.next.name == PrayerName::Imsak
    }
}

/// Classify every prayer of `timetable` as past/current/next at `now`.
///
/// Prayer times are placed on `now`'s calendar day. A prayer whose instant
/// equals `now` is not yet past.
pub fn compute_statuses(timetable: &DayTimetable, now: NaiveDateTime) -> StatusReport {
    let prayers = timetable.prayers();
    let day = now.date();
    let past: Vec<bool> = prayers
        .iter()
        .map(|p| day.and_time(p.time) < now)
        .collect();
    let all_past = past.iter().all(|&p| p);

    // With everything behind us the night runs on to tomorrow's first marker,
    // the same one the scan picks after midnight.
    let (mut current, mut next) = match past.iter().position(|&p| !p) {
        None | Some(0) => (ISHA, IMSAK),
        Some(i) => (i - 1, i),
    };

    let mut imsak_override = false;
    if past[ISHA] && !past[IMSAK] {
        current = IMSAK;
        next = FAJR;
        imsak_override = true;
    }
    if past[IMSAK] && !past[FAJR] {
        current = IMSAK;
        next = FAJR;
        imsak_override = true;
    }

    let current_name = prayers[current].name;
    let next_name = prayers[next].name;
    let next_is_tomorrow = match (current_name, next_name) {
        (PrayerName::Imsak, PrayerName::Fajr) => false,
        (PrayerName::Isha, PrayerName::Fajr) | (PrayerName::Isha, PrayerName::Imsak) => true,
        _ => all_past,
    };

    let per_prayer = prayers
        .iter()
        .enumerate()
        .map(|(i, &prayer)| PrayerStatus {
            prayer,
            is_past: past[i],
            is_current: i == current,
            is_next: i == next,
        })
        .collect();

    StatusReport {
        per_prayer,
        current: prayers[current],
        next: prayers[next],
        next_is_tomorrow,
        imsak_override,
        time_remaining: time_remaining(now.time(), prayers[next].time),
    }
}

/// The current prayer for display. Imsak only ever holds the current flag
/// through the pre-dawn rules, so it is reported whenever it has it.
pub fn find_current_prayer(statuses: &[PrayerStatus]) -> Option<PrayerTime> {
    statuses.iter().find(|s| s.is_current).map(|s| s.prayer)
}

/// The next prayer for display, skipping Imsak and falling back to Fajr.
pub fn find_next_prayer(statuses: &[PrayerStatus]) -> Option<PrayerTime> {
    statuses
        .iter()
        .find(|s| s.is_next && s.prayer.name != PrayerName::Imsak)
        .or_else(|| statuses.iter().find(|s| s.prayer.name == PrayerName::Fajr))
        .map(|s| s.prayer)
}

/// A timetable paired with its statuses, when they apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEvaluation {
    pub timetable: DayTimetable,
    pub is_evaluation_date_today: bool,
    /// Only present when the evaluated date is today.
    pub report: Option<StatusReport>,
}

impl DayEvaluation {
    /// Per-prayer statuses; on other days every flag is false.
    pub fn statuses(&self) -> Vec<PrayerStatus> {
        match &self.report {
            Some(report) => report.per_prayer.clone(),
            None => self
                .timetable
                .prayers()
                .into_iter()
                .map(|prayer| PrayerStatus {
                    prayer,
                    is_past: false,
                    is_current: false,
                    is_next: false,
                })
                .collect(),
        }
    }

    pub fn time_remaining(&self) -> Option<TimeRemaining> {
        self.report.as_ref().map(|r| r.time_remaining)
    }
}

/// Evaluate `timetable` at `now`. The caller states whether the timetable's
/// date is today; statuses and the countdown mean nothing for other days.
pub fn evaluate_day(
    timetable: &DayTimetable,
    now: NaiveDateTime,
    is_evaluation_date_today: bool,
) -> DayEvaluation {
    let report = is_evaluation_date_today.then(|| compute_statuses(timetable, now));
    DayEvaluation {
        timetable: timetable.clone(),
        is_evaluation_date_today,
        report,
    }
}
