use chrono::NaiveDate;
use thiserror::Error;

/// A wall-clock string that is not a valid `HH:MM` (or `h:mm AM`) time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Bad time '{0}': expected HH:MM")]
    Format(String),

    #[error("Bad time '{input}': hour {hour} out of range")]
    Hour { input: String, hour: u32 },

    #[error("Bad time '{input}': minute {minute} out of range")]
    Minute { input: String, minute: u32 },
}

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Prayer times are only available for year {supported} (requested {requested})")]
    UnsupportedYear { requested: i32, supported: i32 },

    #[error("Prayer times not found for {0}")]
    MissingDay(NaiveDate),

    #[error("Invalid timetable data for {date}: {reason}")]
    InvalidData { date: String, reason: String },

    #[error("Reading timetable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing timetable JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Location unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid coordinates ({latitude}, {longitude})")]
    Invalid { latitude: f64, longitude: f64 },
}
