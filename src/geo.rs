use thiserror::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum InputError {
    #[error("latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),
}

/// A point on the Earth's surface in degrees. Construction validates
/// the ranges, so a held value is always a real place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InputError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InputError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InputError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

/// Central angle between two surface points in radians.
pub fn central_angle(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    // https://en.wikipedia.org/wiki/Haversine_formula
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (b.longitude - a.longitude).to_radians() / 2.0;

    let h = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);

    // Antipodal points can push the root past 1.0 in the last bit,
    // which would leave asin's domain.
    2.0 * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Great-circle distance in kilometers.
pub fn distance_km(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    central_angle(a, b) * EARTH_RADIUS_KM
}

/// Initial great-circle bearing from one point toward another, in
/// degrees clockwise from north, normalized to [0, 360).
pub fn bearing_deg(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let (lat1, lat2) = (from.latitude.to_radians(), to.latitude.to_radians());
    let dlon = (to.longitude - from.longitude).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Eight-point compass label for a bearing in [0, 360].
pub fn cardinal(bearing: f64) -> &'static str {
    const POINTS: [&str; 9] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW", "N"];
    POINTS[(bearing / 45.0).round() as usize]
}
