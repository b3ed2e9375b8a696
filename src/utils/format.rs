use chrono::NaiveTime;

use crate::utils::time::{format_minutes_am_pm, minute_of_day, TimeRemaining};

/// Format a countdown as "Xh Ym", or "Ym" under an hour
pub fn format_remaining(remaining: &TimeRemaining) -> String {
    if remaining.total_minutes() == 0 {
        return "now".to_string();
    }
    if remaining.hours > 0 {
        format!("{}h {}m", remaining.hours, remaining.minutes)
    } else {
        format!("{}m", remaining.minutes)
    }
}

/// Format a NaiveTime to "HH:MM", or "h:mm AM" when `twelve_hour` is set
pub fn format_time(t: NaiveTime, twelve_hour: bool) -> String {
    if twelve_hour {
        format_minutes_am_pm(minute_of_day(t))
    } else {
        t.format("%H:%M").to_string()
    }
}

/// Signed minute offset as shown in the city table, e.g. "+6", "-7", "0"
pub fn format_offset(minutes: i32) -> String {
    if minutes > 0 {
        format!("+{}", minutes)
    } else {
        minutes.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_drops_zero_hours() {
        assert_eq!(format_remaining(&TimeRemaining::from_minutes(40)), "40m");
        assert_eq!(format_remaining(&TimeRemaining::from_minutes(125)), "2h 5m");
        assert_eq!(format_remaining(&TimeRemaining::from_minutes(0)), "now");
    }

    #[test]
    fn time_respects_clock_style() {
        let t = NaiveTime::from_hms_opt(17, 4, 0).unwrap();
        assert_eq!(format_time(t, false), "17:04");
        assert_eq!(format_time(t, true), "5:04 PM");
    }
}
