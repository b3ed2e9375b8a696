use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Albanian month names (index 0 = January)
const MONTH_NAMES: &[&str] = &[
    "janar",
    "shkurt",
    "mars",
    "prill",
    "maj",
    "qershor",
    "korrik",
    "gusht",
    "shtator",
    "tetor",
    "nëntor",
    "dhjetor",
];

const MONTH_SHORT: &[&str] = &[
    "jan", "shk", "mar", "pri", "maj", "qer", "korr", "gush", "sht", "tet", "nën", "dhj",
];

/// How many days either side of the selected date the week strip shows.
pub const WEEK_RADIUS: i64 = 3;

pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[month as usize - 1],
        _ => "i panjohur",
    }
}

pub fn month_short(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_SHORT[month as usize - 1],
        _ => "?",
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "e hënë",
        Weekday::Tue => "e martë",
        Weekday::Wed => "e mërkurë",
        Weekday::Thu => "e enjte",
        Weekday::Fri => "e premte",
        Weekday::Sat => "e shtunë",
        Weekday::Sun => "e diel",
    }
}

pub fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Hën",
        Weekday::Tue => "Mar",
        Weekday::Wed => "Mër",
        Weekday::Thu => "Enj",
        Weekday::Fri => "Pre",
        Weekday::Sat => "Sht",
        Weekday::Sun => "Die",
    }
}

/// "5 mars 2025"
pub fn format_date_for_display(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

/// "5 mar"
pub fn format_date_short(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_short(date.month()))
}

/// Seven consecutive dates centred on `center`.
pub fn week_dates(center: NaiveDate) -> Vec<NaiveDate> {
    (-WEEK_RADIUS..=WEEK_RADIUS)
        .map(|offset| center + Duration::days(offset))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInfo {
    pub date: NaiveDate,
    pub day: u32,
    pub weekday: &'static str,
    pub month: &'static str,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DateInfo {
    pub fn new(date: NaiveDate, selected: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            day: date.day(),
            weekday: weekday_short(date.weekday()),
            month: month_short(date.month()),
            is_today: date == today,
            is_selected: date == selected,
        }
    }
}
