//! Prayer times for Kosovo and Albania.
//!
//! The core is pure: [`prayer_times::adjust`] corrects a reference takvim for a
//! city, [`prayer_times::compute_statuses`] works out which prayer is past,
//! current and next, and [`prayer_times::bearing_to_kaaba`] gives the Qibla.
//! [`data`] loads the monthly takvim files and resolves the user's location.

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod prayer_times;
pub mod utils;

pub use error::{LocationError, ParseError, TimetableError};
