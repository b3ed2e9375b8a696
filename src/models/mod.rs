pub mod location;
pub mod prayer;
pub mod timetable;

pub use location::Coordinates;
pub use prayer::{PrayerName, PrayerStatus, PrayerTime};
pub use timetable::{DailyTimes, DayTimetable};
