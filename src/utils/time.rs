use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::error::ParseError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Parse a 24-hour `HH:MM` wall-clock string into minutes since midnight.
pub fn to_minutes_of_day(time: &str) -> Result<u32, ParseError> {
    let (h, m) = time
        .trim()
        .split_once(':')
        .ok_or_else(|| ParseError::Format(time.to_string()))?;
    let hour = parse_field(h).ok_or_else(|| ParseError::Format(time.to_string()))?;
    let minute = parse_field(m).ok_or_else(|| ParseError::Format(time.to_string()))?;
    if hour > 23 {
        return Err(ParseError::Hour {
            input: time.to_string(),
            hour,
        });
    }
    if minute > 59 {
        return Err(ParseError::Minute {
            input: time.to_string(),
            minute,
        });
    }
    Ok(hour * 60 + minute)
}

pub fn parse_time(time: &str) -> Result<NaiveTime, ParseError> {
    to_minutes_of_day(time).map(time_from_minutes)
}

/// Minutes since midnight, seconds ignored.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Build a wall-clock time from minutes, wrapping modulo one day.
pub fn time_from_minutes(minutes: u32) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt((minutes % MINUTES_PER_DAY) * 60, 0)
        .unwrap_or_default()
}

/// Shift a wall-clock time by a signed number of minutes, wrapping into `[0, 1440)`.
pub fn shift_minutes(time: NaiveTime, delta: i32) -> NaiveTime {
    let shifted = (minute_of_day(time) as i32 + delta).rem_euclid(MINUTES_PER_DAY as i32);
    time_from_minutes(shifted as u32)
}

pub fn minutes_to_time_string(minutes: u32) -> String {
    let m = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}

pub fn format_minutes_am_pm(minutes: u32) -> String {
    let m = minutes % MINUTES_PER_DAY;
    let (hour, minute) = (m / 60, m % 60);
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}

/// `"13:05"` → `"1:05 PM"`. Midnight and noon both show hour 12.
pub fn format_am_pm(time: &str) -> Result<String, ParseError> {
    to_minutes_of_day(time).map(format_minutes_am_pm)
}

/// Inverse of [`format_am_pm`]: `"12:30 AM"` → 30.
pub fn parse_am_pm(display: &str) -> Result<u32, ParseError> {
    let err = || ParseError::Format(display.to_string());
    let (clock, suffix) = display.trim().rsplit_once(' ').ok_or_else(err)?;
    let pm = match suffix.to_ascii_uppercase().as_str() {
        "AM" => false,
        "PM" => true,
        _ => return Err(err()),
    };
    let (h, m) = clock.split_once(':').ok_or_else(err)?;
    let hour = parse_field(h).ok_or_else(err)?;
    let minute = parse_field(m).ok_or_else(err)?;
    if !(1..=12).contains(&hour) {
        return Err(ParseError::Hour {
            input: display.to_string(),
            hour,
        });
    }
    if minute > 59 {
        return Err(ParseError::Minute {
            input: display.to_string(),
            minute,
        });
    }
    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    Ok(hour24 * 60 + minute)
}

/// Minutes from `from` forward to `to`, wrapping past midnight when `to` is earlier.
pub fn minutes_between(from: NaiveTime, to: NaiveTime) -> u32 {
    let diff = minute_of_day(to) as i32 - minute_of_day(from) as i32;
    diff.rem_euclid(MINUTES_PER_DAY as i32) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub hours: u32,
    pub minutes: u32,
}

impl TimeRemaining {
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl std::fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Whole minutes from `now` forward to `target`, wrapping past midnight.
/// Seconds in `now` are counted, so a partial minute rounds down.
pub fn time_remaining(now: NaiveTime, target: NaiveTime) -> TimeRemaining {
    const SECONDS_PER_DAY: i64 = MINUTES_PER_DAY as i64 * 60;
    let diff = target.num_seconds_from_midnight() as i64 - now.num_seconds_from_midnight() as i64;
    TimeRemaining::from_minutes((diff.rem_euclid(SECONDS_PER_DAY) / 60) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[rstest]
    #[case("00:00", 0)]
    #[case("04:05", 245)]
    #[case("4:05", 245)]
    #[case("23:59", 1439)]
    #[case(" 12:30 ", 750)]
    fn parses_wall_clock(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(to_minutes_of_day(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("1230")]
    #[case("ab:cd")]
    #[case("12:3x")]
    #[case("-1:30")]
    #[case("12:30:00")]
    #[case("123:00")]
    fn rejects_malformed(#[case] input: &str) {
        assert!(matches!(to_minutes_of_day(input), Err(ParseError::Format(_))));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(matches!(
            to_minutes_of_day("24:00"),
            Err(ParseError::Hour { hour: 24, .. })
        ));
        assert!(matches!(
            to_minutes_of_day("10:60"),
            Err(ParseError::Minute { minute: 60, .. })
        ));
    }

    #[rstest]
    #[case("00:00", "12:00 AM")]
    #[case("00:45", "12:45 AM")]
    #[case("09:07", "9:07 AM")]
    #[case("12:00", "12:00 PM")]
    #[case("13:05", "1:05 PM")]
    #[case("23:59", "11:59 PM")]
    fn formats_twelve_hour(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_am_pm(input).unwrap(), expected);
    }

    #[test]
    fn am_pm_round_trips_every_minute() {
        for m in 0..MINUTES_PER_DAY {
            let display = format_am_pm(&minutes_to_time_string(m)).unwrap();
            assert_eq!(parse_am_pm(&display), Ok(m), "minute {} shown as {}", m, display);
        }
    }

    #[test]
    fn minutes_between_wraps_past_midnight() {
        assert_eq!(minutes_between(t(10, 0), t(12, 30)), 150);
        assert_eq!(minutes_between(t(23, 50), t(0, 30)), 40);
        assert_eq!(minutes_between(t(8, 0), t(8, 0)), 0);
    }

    #[test]
    fn time_remaining_wraps_past_midnight() {
        assert_eq!(
            time_remaining(t(23, 50), t(0, 30)),
            TimeRemaining { hours: 0, minutes: 40 }
        );
        assert_eq!(
            time_remaining(t(20, 45), t(3, 10)),
            TimeRemaining { hours: 6, minutes: 25 }
        );
    }

    #[rstest]
    #[case(NaiveTime::from_hms_opt(12, 39, 30).unwrap(), t(12, 40), 0)]
    #[case(NaiveTime::from_hms_opt(12, 38, 1).unwrap(), t(12, 40), 1)]
    #[case(NaiveTime::from_hms_opt(23, 59, 59).unwrap(), t(0, 30), 30)]
    fn time_remaining_rounds_partial_minutes_down(
        #[case] now: NaiveTime,
        #[case] target: NaiveTime,
        #[case] expected: u32,
    ) {
        assert_eq!(time_remaining(now, target).total_minutes(), expected);
    }

    #[test]
    fn shift_wraps_both_directions() {
        assert_eq!(shift_minutes(t(0, 5), -20), t(23, 45));
        assert_eq!(shift_minutes(t(23, 58), 6), t(0, 4));
        assert_eq!(shift_minutes(t(4, 0), -7), t(3, 53));
    }
}
