pub mod adjustment;
pub mod qibla;
pub mod status;

pub use adjustment::{adjust, is_kosovo_city, known_cities, CityAdjustment};
pub use qibla::{bearing_to_kaaba, needle_rotation, KAABA};
pub use status::{
    compute_statuses, evaluate_day, find_current_prayer, find_next_prayer, DayEvaluation,
    StatusReport,
};
