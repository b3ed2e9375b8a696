use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use takvimi::models::{DailyTimes, DayTimetable, PrayerName};
use takvimi::prayer_times::{adjust, compute_statuses, find_current_prayer, find_next_prayer};
use takvimi::utils::time::{time_from_minutes, to_minutes_of_day, TimeRemaining};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
}

fn timetable_from_minutes(m: [u32; 7]) -> DayTimetable {
    DayTimetable {
        date: date(),
        weekday: "E hënë".to_string(),
        islamic_events: None,
        day_length: None,
        times: DailyTimes {
            imsak: time_from_minutes(m[0]),
            fajr: time_from_minutes(m[1]),
            sunrise: time_from_minutes(m[2]),
            dhuhr: time_from_minutes(m[3]),
            asr: time_from_minutes(m[4]),
            maghrib: time_from_minutes(m[5]),
            isha: time_from_minutes(m[6]),
        },
    }
}

fn at_minute(m: u32, second: u32) -> NaiveDateTime {
    date().and_time(time_from_minutes(m)) + chrono::Duration::seconds(second as i64)
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

proptest! {
    #[test]
    fn exactly_one_current_and_one_next(
        minutes in prop::array::uniform7(0u32..1440),
        now in 0u32..1440,
        second in 0u32..60,
    ) {
        let report = compute_statuses(&timetable_from_minutes(minutes), at_minute(now, second));
        let current: Vec<_> = report.per_prayer.iter().filter(|s| s.is_current).collect();
        let next: Vec<_> = report.per_prayer.iter().filter(|s| s.is_next).collect();
        prop_assert_eq!(current.len(), 1);
        prop_assert_eq!(next.len(), 1);
        prop_assert_eq!(current[0].prayer, report.current);
        prop_assert_eq!(next[0].prayer, report.next);
        prop_assert_ne!(report.current.name, report.next.name);
        prop_assert_eq!(find_current_prayer(&report.per_prayer), Some(report.current));
    }

    #[test]
    fn realistic_timetables_stay_ordered(
        start in 120u32..300,
        gaps in prop::array::uniform6(30u32..170),
        city in prop::sample::select(vec!["Prishtina", "Gjilan", "Sharri", "Presheva", "Nowhereville", ""]),
    ) {
        let mut minutes = [start; 7];
        for i in 1..7 {
            minutes[i] = minutes[i - 1] + gaps[i - 1];
        }
        let adjusted = adjust(&timetable_from_minutes(minutes), city);
        let parsed: Vec<u32> = adjusted
            .prayers()
            .iter()
            .map(|p| to_minutes_of_day(&p.time.format("%H:%M").to_string()).unwrap())
            .collect();
        prop_assert!(parsed.windows(2).all(|w| w[0] <= w[1]), "{:?}", parsed);
    }

    #[test]
    fn remaining_never_exceeds_a_day(
        minutes in prop::array::uniform7(0u32..1440),
        now in 0u32..1440,
        second in 0u32..60,
    ) {
        let report = compute_statuses(&timetable_from_minutes(minutes), at_minute(now, second));
        prop_assert!(report.time_remaining.total_minutes() < 1440);
        prop_assert!(report.time_remaining.minutes < 60);
    }
}

fn wraparound_day() -> DayTimetable {
    let mut tt = timetable_from_minutes([190, 210, 320, 760, 1005, 1210, 1230]);
    tt.times.imsak = t(3, 10);
    tt.times.fajr = t(3, 30);
    tt.times.isha = t(20, 30);
    tt
}

#[test]
fn isha_to_imsak_wraparound() {
    let tt = wraparound_day();

    let night = compute_statuses(&tt, date().and_time(t(23, 0)));
    assert_eq!(night.current.name, PrayerName::Isha);
    assert_eq!(night.next.name, PrayerName::Imsak);
    assert!(night.next_is_tomorrow);
    assert_eq!(
        find_next_prayer(&night.per_prayer).map(|p| p.name),
        Some(PrayerName::Fajr)
    );

    let pre_dawn = compute_statuses(&tt, date().and_time(t(3, 15)));
    assert_eq!(pre_dawn.current.name, PrayerName::Imsak);
    assert_eq!(pre_dawn.next.name, PrayerName::Fajr);
    assert_eq!(
        find_current_prayer(&pre_dawn.per_prayer).map(|p| p.name),
        Some(PrayerName::Imsak)
    );
    assert!(!pre_dawn.next_is_tomorrow);
}

#[test]
fn countdown_crosses_midnight() {
    let mut tt = wraparound_day();
    tt.times.imsak = t(0, 30);
    let report = compute_statuses(&tt, date().and_time(t(23, 50)));
    assert_eq!(report.next.name, PrayerName::Imsak);
    assert_eq!(report.time_remaining, TimeRemaining { hours: 0, minutes: 40 });
}
