use chrono::{Datelike, Duration, NaiveDate};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::data::cache::{Clock, SystemClock, TtlCache};
use crate::error::TimetableError;
use crate::models::{DailyTimes, DayTimetable};
use crate::utils::calendar::week_dates;
use crate::utils::time::parse_time;

/// The one year the bundled takvim covers.
pub const DEFAULT_SUPPORTED_YEAR: i32 = 2025;

// ─── Monthly JSON schema ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct MonthFile {
    data: HashMap<String, RawDay>,
}

#[derive(Debug, Deserialize)]
struct RawDay {
    kohet: RawTimes,
    #[serde(default)]
    dita_javes: String,
    #[serde(default, rename = "festat_fetare_dhe_shenime_te_tjera_astronomike")]
    festat: String,
}

#[derive(Debug, Deserialize)]
struct RawTimes {
    imsaku: String,
    sabahu: String,
    lindja_e_diellit: String,
    dreka: String,
    ikindia: String,
    akshami: String,
    jacia: String,
    #[serde(default)]
    gjatesia_e_dites: Option<String>,
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn convert_day(year: i32, month: u32, key: &str, raw: &RawDay) -> Result<DayTimetable, TimetableError> {
    let label = format!("{}-{:02}-{}", year, month, key);
    let invalid = |reason: String| TimetableError::InvalidData {
        date: label.clone(),
        reason,
    };

    let day: u32 = key
        .trim()
        .parse()
        .map_err(|_| invalid(format!("day key '{}' is not a number", key)))?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid("no such calendar date".to_string()))?;

    let time = |s: &str| parse_time(s).map_err(|e| invalid(e.to_string()));
    let k = &raw.kohet;
    let times = DailyTimes {
        imsak: time(&k.imsaku)?,
        fajr: time(&k.sabahu)?,
        sunrise: time(&k.lindja_e_diellit)?,
        dhuhr: time(&k.dreka)?,
        asr: time(&k.ikindia)?,
        maghrib: time(&k.akshami)?,
        isha: time(&k.jacia)?,
    };

    Ok(DayTimetable {
        date,
        weekday: raw.dita_javes.trim().to_string(),
        islamic_events: non_empty(&raw.festat),
        day_length: k.gjatesia_e_dites.as_deref().and_then(non_empty),
        times,
    })
}

/// Parse one `<MM>.json` file of the takvim into day timetables sorted by date.
pub fn parse_month(year: i32, month: u32, json: &str) -> Result<Vec<DayTimetable>, TimetableError> {
    let file: MonthFile = serde_json::from_str(json)?;
    let mut days = file
        .data
        .iter()
        .map(|(key, raw)| convert_day(year, month, key, raw))
        .collect::<Result<Vec<_>, _>>()?;
    days.sort_by_key(|d| d.date);
    Ok(days)
}

// ─── Sources ─────────────────────────────────────────────────────────────────

/// Where raw monthly JSON comes from.
pub trait MonthSource {
    fn load_month(&self, year: i32, month: u32) -> Result<String, TimetableError>;
}

/// Reads `<root>/<year>/<MM>.json`.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn month_path(&self, year: i32, month: u32) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("{:02}.json", month))
    }
}

impl MonthSource for DirSource {
    fn load_month(&self, year: i32, month: u32) -> Result<String, TimetableError> {
        let path = self.month_path(year, month);
        debug!("Reading takvim month from {:?}", path);
        Ok(std::fs::read_to_string(path)?)
    }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Validated, cached access to the takvim, keyed by `(year, month)`.
pub struct TimetableStore<S, C = SystemClock> {
    source: S,
    supported_year: i32,
    months: TtlCache<(i32, u32), Arc<Vec<DayTimetable>>, C>,
}

impl<S: MonthSource> TimetableStore<S, SystemClock> {
    /// Months stay cached for the life of the store.
    pub fn new(source: S, supported_year: i32) -> Self {
        Self::with_clock(source, supported_year, None, SystemClock)
    }
}

impl<S: MonthSource, C: Clock> TimetableStore<S, C> {
    pub fn with_clock(source: S, supported_year: i32, ttl: Option<Duration>, clock: C) -> Self {
        Self {
            source,
            supported_year,
            months: TtlCache::with_clock(ttl, clock),
        }
    }

    pub fn validate_date(&self, date: NaiveDate) -> Result<(), TimetableError> {
        self.validate_year(date.year())
    }

    fn validate_year(&self, year: i32) -> Result<(), TimetableError> {
        if year != self.supported_year {
            return Err(TimetableError::UnsupportedYear {
                requested: year,
                supported: self.supported_year,
            });
        }
        Ok(())
    }

    pub fn month(&mut self, year: i32, month: u32) -> Result<Arc<Vec<DayTimetable>>, TimetableError> {
        self.validate_year(year)?;
        let key = (year, month);
        if let Some(cached) = self.months.get(&key) {
            debug!("Takvim cache hit for {}-{:02}", year, month);
            return Ok(cached);
        }

        let json = self.source.load_month(year, month)?;
        let days = Arc::new(parse_month(year, month, &json)?);
        info!("Loaded {} days of takvim for {}-{:02}", days.len(), year, month);
        self.months.insert(key, Arc::clone(&days));
        Ok(days)
    }

    pub fn day(&mut self, date: NaiveDate) -> Result<DayTimetable, TimetableError> {
        self.validate_date(date)?;
        let month = self.month(date.year(), date.month())?;
        month
            .iter()
            .find(|d| d.date == date)
            .cloned()
            .ok_or(TimetableError::MissingDay(date))
    }

    /// Seven days centred on `center`. Every day must fall in the supported year.
    pub fn week(&mut self, center: NaiveDate) -> Result<Vec<DayTimetable>, TimetableError> {
        self.validate_date(center)?;
        week_dates(center)
            .into_iter()
            .map(|date| self.day(date))
            .collect()
    }
}
