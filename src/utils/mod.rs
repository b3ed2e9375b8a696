pub mod calendar;
pub mod format;
pub mod time;
