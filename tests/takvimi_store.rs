use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use takvimi::data::{DirSource, TimetableStore};
use takvimi::models::PrayerName;
use takvimi::prayer_times::{adjust, evaluate_day};
use takvimi::utils::time::{minutes_to_time_string, TimeRemaining};
use takvimi::TimetableError;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// A month where every day shares the same times, shifted by one minute a day.
fn month_json(days: u32, base_fajr: u32) -> String {
    let entries: Vec<String> = (1..=days)
        .map(|day| {
            let fajr = base_fajr + day;
            format!(
                r#""{day}": {{
                    "kohet": {{
                        "imsaku": "{imsak}", "sabahu": "{fajr}", "lindja_e_diellit": "{sunrise}",
                        "dreka": "12:00", "ikindia": "15:30", "akshami": "18:00",
                        "jacia": "19:30", "gjatesia_e_dites": "12:00"
                    }},
                    "dita_javes": "",
                    "festat_fetare_dhe_shenime_te_tjera_astronomike": ""
                }}"#,
                day = day,
                imsak = minutes_to_time_string(fajr - 20),
                fajr = minutes_to_time_string(fajr),
                sunrise = minutes_to_time_string(fajr + 90),
            )
        })
        .collect();
    format!(r#"{{ "data": {{ {} }} }}"#, entries.join(","))
}

fn write_month(root: &Path, year: i32, month: u32, json: &str) {
    let dir = root.join(year.to_string());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{:02}.json", month)), json).unwrap();
}

fn fixture() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    write_month(tmp.path(), 2025, 3, &month_json(31, 4 * 60));
    write_month(tmp.path(), 2025, 4, &month_json(30, 3 * 60 + 30));
    tmp
}

#[test]
fn day_loads_from_directory() {
    let tmp = fixture();
    let mut store = TimetableStore::new(DirSource::new(tmp.path()), 2025);
    let day = store.day(d(2025, 3, 10)).unwrap();
    assert_eq!(day.date, d(2025, 3, 10));
    assert_eq!(day.times.fajr, t(4, 10));
    assert_eq!(day.times.imsak, t(3, 50));
    assert_eq!(day.weekday, "");
    assert_eq!(day.islamic_events, None);
}

#[test]
fn week_spans_month_boundary() {
    let tmp = fixture();
    let mut store = TimetableStore::new(DirSource::new(tmp.path()), 2025);
    let week = store.week(d(2025, 3, 30)).unwrap();
    let dates: Vec<NaiveDate> = week.iter().map(|w| w.date).collect();
    assert_eq!(
        dates,
        vec![
            d(2025, 3, 27),
            d(2025, 3, 28),
            d(2025, 3, 29),
            d(2025, 3, 30),
            d(2025, 3, 31),
            d(2025, 4, 1),
            d(2025, 4, 2),
        ]
    );
    assert_eq!(week[5].times.fajr, t(3, 31));
}

#[test]
fn missing_month_file_is_an_io_error() {
    let tmp = fixture();
    let mut store = TimetableStore::new(DirSource::new(tmp.path()), 2025);
    let err = store.day(d(2025, 7, 1)).unwrap_err();
    assert!(matches!(err, TimetableError::Io(_)), "{}", err);
}

#[test]
fn week_outside_supported_year_fails() {
    let tmp = fixture();
    let mut store = TimetableStore::new(DirSource::new(tmp.path()), 2025);
    assert!(matches!(
        store.week(d(2026, 1, 2)),
        Err(TimetableError::UnsupportedYear { .. })
    ));
}

#[test]
fn adjusted_day_drives_the_countdown() {
    let tmp = fixture();
    let mut store = TimetableStore::new(DirSource::new(tmp.path()), 2025);
    let raw = store.day(d(2025, 3, 10)).unwrap();
    let prishtina = adjust(&raw, "Prishtina");
    assert_eq!(prishtina.times.fajr, t(4, 3));
    assert_eq!(prishtina.times.imsak, t(3, 43));

    let now = d(2025, 3, 10).and_time(t(3, 50));
    let eval = evaluate_day(&prishtina, now, true);
    let report = eval.report.as_ref().unwrap();
    assert_eq!(report.current.name, PrayerName::Imsak);
    assert_eq!(report.next.name, PrayerName::Fajr);
    assert_eq!(eval.time_remaining(), Some(TimeRemaining { hours: 0, minutes: 13 }));
}
