use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use std::path::PathBuf;

use takvimi::config::AppConfig;
use takvimi::data::{resolve_location, DirSource, TimetableStore};
use takvimi::models::{Coordinates, DayTimetable, PrayerStatus};
use takvimi::prayer_times::{
    adjust, bearing_to_kaaba, evaluate_day, is_kosovo_city, known_cities, StatusReport,
};
use takvimi::utils::calendar::{
    format_date_for_display, format_date_short, week_dates, weekday_name, DateInfo,
};
use takvimi::utils::format::{format_offset, format_remaining, format_time};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn open_store(config: &AppConfig) -> Result<TimetableStore<DirSource>> {
    let dir = config.timetable_dir()?;
    Ok(TimetableStore::new(
        DirSource::new(dir),
        config.data.supported_year,
    ))
}

fn load_day(
    store: &mut TimetableStore<DirSource>,
    date: NaiveDate,
    city: &str,
) -> Result<DayTimetable> {
    let raw = store
        .day(date)
        .with_context(|| format!("Loading prayer times for {}", date))?;
    Ok(adjust(&raw, city))
}

fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(config: &AppConfig, date: Option<NaiveDate>, city: Option<String>) -> Result<()> {
    let now = now_local();
    let today = now.date();
    let date = date.unwrap_or(today);
    let city = city.unwrap_or_else(|| config.location.city.clone());
    let twelve_hour = config.display.twelve_hour;

    let mut store = open_store(config)?;
    let timetable = load_day(&mut store, date, &city)?;
    let eval = evaluate_day(&timetable, now, date == today);

    println!();
    println_colored!(
        GOLD,
        "  Takvimi — {} ({}, {})",
        city,
        format_date_for_display(date),
        weekday_name(date.weekday())
    );
    println!();

    for status in eval.statuses() {
        print_status_line(&status, twelve_hour);
    }

    if let Some(events) = &timetable.islamic_events {
        println!();
        println_colored!(DIM, "  {}", events);
    }

    if let Some(report) = &eval.report {
        println!();
        print_next(report, twelve_hour);
    }
    println!();
    Ok(())
}

fn print_status_line(status: &PrayerStatus, twelve_hour: bool) {
    let prayer = status.prayer;
    let time_str = format_time(prayer.time, twelve_hour);
    let line = format!(
        "{:<18}{:<10}{}",
        prayer.label(),
        time_str,
        prayer.name.display_name()
    );
    if status.is_current {
        println_colored!(GOLD, "  ● {}", line);
    } else if status.is_next {
        println_colored!(AMBER, "  → {}", line);
    } else if status.is_past {
        println_colored!(DIM, "    {}", line);
    } else {
        println_colored!(BOLD, "    {}", line);
    }
}

fn print_next(report: &StatusReport, twelve_hour: bool) {
    let prefix = if report.next_is_tomorrow { "Nesër" } else { "Sot" };
    println_colored!(
        AMBER,
        "  {}: {} {} — koha e mbetur {}",
        prefix,
        report.next.label(),
        format_time(report.next.time, twelve_hour),
        format_remaining(&report.time_remaining)
    );
    if report.imsak_follows_isha() {
        println_colored!(DIM, "  Koha e Imsakut fillon pas Jacisë");
    }
}

// ─── Next ────────────────────────────────────────────────────────────────────

pub fn handle_next(config: &AppConfig, city: Option<String>) -> Result<()> {
    let now = now_local();
    let city = city.unwrap_or_else(|| config.location.city.clone());

    let mut store = open_store(config)?;
    let timetable = load_day(&mut store, now.date(), &city)?;
    let eval = evaluate_day(&timetable, now, true);

    if let Some(report) = &eval.report {
        println!();
        print_next(report, config.display.twelve_hour);
        println!();
    }
    Ok(())
}

// ─── Week ────────────────────────────────────────────────────────────────────

pub fn handle_week(config: &AppConfig, date: Option<NaiveDate>, city: Option<String>) -> Result<()> {
    let today = now_local().date();
    let selected = date.unwrap_or(today);
    let city = city.unwrap_or_else(|| config.location.city.clone());
    let twelve_hour = config.display.twelve_hour;

    let mut store = open_store(config)?;
    let week = store
        .week(selected)
        .with_context(|| format!("Loading the week around {}", selected))?;

    let dates = week_dates(selected);
    let (first, last) = (dates[0], dates[dates.len() - 1]);

    println!();
    println_colored!(
        GOLD,
        "  Takvimi — {} ({} – {})",
        city,
        format_date_short(first),
        format_date_short(last)
    );
    println!();
    println_colored!(
        DIM,
        "  {:<12}{:<9}{:<9}{:<9}{:<9}{:<9}{:<9}{:<9}",
        "",
        "Imsaku",
        "Sabahu",
        "Lindja",
        "Dreka",
        "Ikindia",
        "Akshami",
        "Jacia"
    );

    for (date, raw) in dates.into_iter().zip(week.iter()) {
        let info = DateInfo::new(date, selected, today);
        let timetable = adjust(raw, &city);
        let times: String = timetable
            .prayers()
            .iter()
            .map(|p| format!("{:<9}", format_time(p.time, twelve_hour)))
            .collect();
        let day = format!("{} {:>2} {}", info.weekday, info.day, info.month);
        let line = format!("{:<12}{}", day, times);
        if info.is_selected {
            println_colored!(GOLD, "  {}", line);
        } else if info.is_today {
            println_colored!(AMBER, "  {}", line);
        } else {
            println!("  {}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Qibla ───────────────────────────────────────────────────────────────────

fn compass_point(bearing: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    POINTS[(((bearing + 22.5) / 45.0) as usize) % 8]
}

pub fn handle_qibla(config: &AppConfig, lat: Option<f64>, lon: Option<f64>) -> Result<()> {
    let explicit = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
    };
    let coords = resolve_location(explicit, config.location.coordinates())
        .context("Resolving the Qibla origin")?;
    let bearing = bearing_to_kaaba(coords);

    println!();
    println_colored!(GOLD, "  Kibla");
    println!();
    println!(
        "  Nga ({:.4}, {:.4}): {:.1}° {}",
        coords.latitude,
        coords.longitude,
        bearing,
        compass_point(bearing)
    );
    println!();
    Ok(())
}

// ─── Cities ──────────────────────────────────────────────────────────────────

pub fn handle_cities() -> Result<()> {
    println!();
    println_colored!(
        DIM,
        "  {:<18}{:>6}{:>8}{:>7}{:>6}{:>9}{:>7}",
        "",
        "Sabahu",
        "Lindja",
        "Dreka",
        "Ikind",
        "Akshami",
        "Jacia"
    );
    for adj in known_cities() {
        let imsak_note = if is_kosovo_city(adj.city) { "  *" } else { "" };
        println!(
            "  {:<18}{:>6}{:>8}{:>7}{:>6}{:>9}{:>7}{}",
            adj.city,
            format_offset(adj.fajr),
            format_offset(adj.sunrise),
            format_offset(adj.dhuhr),
            format_offset(adj.asr),
            format_offset(adj.maghrib),
            format_offset(adj.isha),
            imsak_note
        );
    }
    println!();
    println_colored!(DIM, "  * Imsaku = Sabahu − 20 min");
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub struct ConfigUpdate {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub data_dir: Option<PathBuf>,
    pub year: Option<i32>,
    pub twelve_hour: Option<bool>,
}

impl ConfigUpdate {
    fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.lat.is_none()
            && self.lon.is_none()
            && self.data_dir.is_none()
            && self.year.is_none()
            && self.twelve_hour.is_none()
    }
}

pub fn handle_config(config: &mut AppConfig, update: ConfigUpdate) -> Result<()> {
    if update.is_empty() {
        let text = toml::to_string_pretty(config).context("Serializing config")?;
        println_colored!(DIM, "  # {}", AppConfig::config_path()?.display());
        println!("{}", text);
        return Ok(());
    }

    if let Some(city) = update.city {
        config.location.city = city;
    }
    if let Some(lat) = update.lat {
        config.location.latitude = Some(lat);
    }
    if let Some(lon) = update.lon {
        config.location.longitude = Some(lon);
    }
    if let Some(dir) = update.data_dir {
        config.data.dir = Some(dir);
    }
    if let Some(year) = update.year {
        config.data.supported_year = year;
    }
    if let Some(twelve_hour) = update.twelve_hour {
        config.display.twelve_hour = twelve_hour;
    }
    config.save()?;
    println_colored!(GOLD, "  ✓ Configuration saved");
    Ok(())
}
