use chrono::{DateTime, Utc};
use sunrise::{Coordinates, DawnType, SolarDay, SolarEvent};

use crate::geo::{self, GeoCoordinate};

/// Mean altitude of the station's orbit above the surface.
pub const STATION_ALTITUDE_KM: f64 = 408.0;

/// Minimum elevation worth calling a sighting; lower passes sit in the
/// horizon haze.
pub const MIN_ELEVATION_DEG: f64 = 10.0;

#[derive(Clone, Copy, Debug)]
pub struct VisibilityResult {
    pub distance_km: f64,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub is_night: bool,
    pub is_visible: bool,
}

/// Works out whether the station can be seen from `observer` at `time`,
/// given the station's current ground position.
pub fn assess(
    station: GeoCoordinate,
    observer: GeoCoordinate,
    time: DateTime<Utc>,
) -> VisibilityResult {
    let alpha = geo::central_angle(observer, station);
    let elevation_deg = elevation_angle(alpha);
    let is_night = is_dark(observer, time);

    VisibilityResult {
        distance_km: alpha * geo::EARTH_RADIUS_KM,
        elevation_deg,
        azimuth_deg: geo::bearing_deg(observer, station),
        is_night,
        is_visible: is_night && elevation_deg >= MIN_ELEVATION_DEG,
    }
}

/// Elevation of the station above the observer's horizon in degrees,
/// from the central angle between the observer and the station's
/// ground point. Zero angle puts the station at the zenith.
pub fn elevation_angle(central_angle: f64) -> f64 {
    let r = geo::EARTH_RADIUS_KM;
    let orbit = r + STATION_ALTITUDE_KM;

    // Law of cosines across the Earth-center/observer/station triangle,
    // then law of sines for the angle at the station. The asin argument
    // can overshoot 1.0 in the last bit.
    let slant = (r.powi(2) + orbit.powi(2) - 2.0 * r * orbit * central_angle.cos()).sqrt();
    let gamma = (central_angle.sin() * r / slant).clamp(-1.0, 1.0).asin();

    (std::f64::consts::FRAC_PI_2 - central_angle - gamma).to_degrees()
}

/// True when the sky over `position` is dark at `time`: before civil
/// dawn or after civil dusk on that UTC date.
pub fn is_dark(position: GeoCoordinate, time: DateTime<Utc>) -> bool {
    let coordinates =
        Coordinates::new(position.latitude(), position.longitude()).expect("valid coordinates");
    let date = time.date_naive();

    let dawn = SolarDay::new(coordinates, date).event_time(SolarEvent::Dawn(DawnType::Civil));
    let dusk = SolarDay::new(coordinates, date).event_time(SolarEvent::Dusk(DawnType::Civil));

    time < dawn || time > dusk
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coord(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    fn madrid() -> GeoCoordinate {
        coord(40.4168, -3.7038)
    }

    #[test]
    fn station_at_the_zenith_has_ninety_degrees_of_elevation() {
        assert!((elevation_angle(0.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn elevation_matches_known_values() {
        assert!((elevation_angle(10_f64.to_radians()) - 14.53).abs() < 0.01);
        // Just past the geometric horizon for a 408 km orbit.
        assert!(elevation_angle(20_f64.to_radians()) < 0.0);
        assert!((elevation_angle(std::f64::consts::PI) - -90.0).abs() < 1e-9);
    }

    #[test]
    fn noon_is_not_dark() {
        let noon = Utc.with_ymd_and_hms(2000, 8, 4, 12, 0, 0).unwrap();
        assert!(!is_dark(coord(51.8615899, 4.3580323), noon));
    }

    #[test]
    fn late_night_and_early_morning_are_dark() {
        let position = coord(51.8615899, 4.3580323);
        let late = Utc.with_ymd_and_hms(2000, 8, 4, 23, 30, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2000, 8, 4, 2, 0, 0).unwrap();
        assert!(is_dark(position, late));
        assert!(is_dark(position, early));
    }

    #[test]
    fn daytime_rules_out_a_sighting() {
        let noon = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let result = assess(coord(0.0, 0.0), madrid(), noon);

        assert!((result.distance_km - 4_509.75).abs() < 0.01);
        assert!((result.elevation_deg - -15.48).abs() < 0.01);
        assert!((result.azimuth_deg - 174.30).abs() < 0.01);
        assert!(!result.is_night);
        assert!(!result.is_visible);
    }

    #[test]
    fn overhead_pass_on_a_dark_sky_is_visible() {
        let night = Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap();
        let result = assess(madrid(), madrid(), night);

        assert!((result.elevation_deg - 90.0).abs() < 1e-9);
        assert!(result.is_night);
        assert!(result.is_visible);
    }

    #[test]
    fn below_the_horizon_at_night_is_not_visible() {
        let night = Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap();
        let result = assess(coord(-40.4168, 176.2962), madrid(), night);

        assert!((result.distance_km - std::f64::consts::PI * geo::EARTH_RADIUS_KM).abs() < 0.01);
        assert!((result.elevation_deg - -90.0).abs() < 0.01);
        assert!(!result.is_visible);
    }
}
