pub mod cache;
pub mod location;
pub mod takvimi;

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use location::{resolve_location, FixedLocation, LocationProvider, LocationService};
pub use takvimi::{parse_month, DirSource, MonthSource, TimetableStore, DEFAULT_SUPPORTED_YEAR};
