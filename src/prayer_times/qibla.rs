use crate::models::Coordinates;

pub const KAABA: Coordinates = Coordinates {
    latitude: 21.4225,
    longitude: 39.8262,
};

const DEGENERATE_EPSILON: f64 = 1e-12;

fn normalize_degrees(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Initial great-circle bearing from `observer` to the Kaaba, clockwise from
/// true north in `[0, 360)`.
///
/// An observer standing at the Kaaba has no direction; this returns `0.0`.
/// Non-finite input yields NaN, so validate coordinates first.
pub fn bearing_to_kaaba(observer: Coordinates) -> f64 {
    let lat1 = observer.latitude.to_radians();
    let lat2 = KAABA.latitude.to_radians();
    let delta_lng = (KAABA.longitude - observer.longitude).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    if y.abs() < DEGENERATE_EPSILON && x.abs() < DEGENERATE_EPSILON {
        return 0.0;
    }

    normalize_degrees(y.atan2(x).to_degrees())
}

/// How far to turn a compass needle so it points at `bearing` while the
/// device faces `heading` (both in degrees).
pub fn needle_rotation(bearing: f64, heading: f64) -> f64 {
    normalize_degrees(bearing - heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Coordinates::DEFAULT, 133.60)]
    #[case(Coordinates::new(42.6629, 21.1655), 137.85)]
    #[case(Coordinates::new(40.7128, -74.006), 58.48)]
    #[case(Coordinates::new(-33.86, 151.2), 277.51)]
    fn bearing_for_known_places(#[case] observer: Coordinates, #[case] expected: f64) {
        let bearing = bearing_to_kaaba(observer);
        assert!(
            (bearing - expected).abs() < 0.01,
            "expected {} got {}",
            expected,
            bearing
        );
    }

    #[test]
    fn at_the_kaaba_is_zero() {
        assert_eq!(bearing_to_kaaba(KAABA), 0.0);
    }

    #[test]
    fn due_north_and_south() {
        let south = Coordinates::new(10.0, KAABA.longitude);
        assert!(bearing_to_kaaba(south).abs() < 1e-9);
        let north = Coordinates::new(40.0, KAABA.longitude);
        assert!((bearing_to_kaaba(north) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn nan_propagates() {
        assert!(bearing_to_kaaba(Coordinates::new(f64::NAN, 10.0)).is_nan());
    }

    #[test]
    fn needle_wraps() {
        assert_eq!(needle_rotation(133.0, 140.0), 353.0);
        assert_eq!(needle_rotation(10.0, 10.0), 0.0);
    }

    #[test]
    fn bearing_stays_in_range() {
        for lat in (-80..=80).step_by(20) {
            for lng in (-180..=180).step_by(30) {
                let b = bearing_to_kaaba(Coordinates::new(lat as f64, lng as f64));
                assert!((0.0..360.0).contains(&b), "{} at ({}, {})", b, lat, lng);
            }
        }
    }
}
