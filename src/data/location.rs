use chrono::Duration;
use log::{debug, warn};

use crate::data::cache::{Clock, SystemClock, TtlCache};
use crate::error::LocationError;
use crate::models::Coordinates;

/// How long a resolved position is reused before asking the provider again.
pub const LOCATION_TTL_MINUTES: i64 = 5;

pub trait LocationProvider {
    fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// A position known up front, e.g. from the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(pub Option<Coordinates>);

impl LocationProvider for FixedLocation {
    fn current_position(&self) -> Result<Coordinates, LocationError> {
        self.0
            .ok_or_else(|| LocationError::Unavailable("no coordinates configured".to_string()))
    }
}

pub struct LocationService<P, C = SystemClock> {
    provider: P,
    cache: TtlCache<(), Coordinates, C>,
}

impl<P: LocationProvider> LocationService<P, SystemClock> {
    pub fn new(provider: P) -> Self {
        Self::with_clock(provider, SystemClock)
    }
}

impl<P: LocationProvider, C: Clock> LocationService<P, C> {
    pub fn with_clock(provider: P, clock: C) -> Self {
        Self {
            provider,
            cache: TtlCache::with_clock(Some(Duration::minutes(LOCATION_TTL_MINUTES)), clock),
        }
    }

    /// Provider position, reusing a fresh cached one. Invalid coordinates are errors.
    pub fn try_resolve(&mut self) -> Result<Coordinates, LocationError> {
        if let Some(coords) = self.cache.get(&()) {
            debug!("Using cached location {:?}", coords);
            return Ok(coords);
        }
        let coords = self.provider.current_position()?;
        if !coords.is_valid() {
            return Err(LocationError::Invalid {
                latitude: coords.latitude,
                longitude: coords.longitude,
            });
        }
        self.cache.insert((), coords);
        Ok(coords)
    }

    /// Like [`try_resolve`](Self::try_resolve) but falls back to [`Coordinates::DEFAULT`].
    pub fn resolve(&mut self) -> Coordinates {
        match self.try_resolve() {
            Ok(coords) => coords,
            Err(e) => {
                warn!("{}; using default location", e);
                Coordinates::DEFAULT
            }
        }
    }
}

/// Coordinates given on the command line must be valid. Without them the
/// configured position is used, falling back to the default.
pub fn resolve_location(
    explicit: Option<Coordinates>,
    configured: Option<Coordinates>,
) -> Result<Coordinates, LocationError> {
    match explicit {
        Some(coords) => LocationService::new(FixedLocation(Some(coords))).try_resolve(),
        None => Ok(LocationService::new(FixedLocation(configured)).resolve()),
    }
}
