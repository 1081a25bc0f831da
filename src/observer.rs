use chrono::{DateTime, Utc};

use crate::geo::{GeoCoordinate, InputError};

#[cfg(feature = "web")]
use {
    crate::station::{http_client, NetworkError},
    serde::Deserialize,
    tracing::info,
};

/// Whoever is looking up, and when.
#[derive(Clone, Debug)]
pub struct Observer {
    pub position: GeoCoordinate,
    pub time: DateTime<Utc>,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            position: GeoCoordinate::default(),
            time: Utc::now(),
        }
    }
}

#[cfg(feature = "web")]
#[derive(Deserialize)]
struct IpInfo {
    loc: String,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InputError> {
        Ok(Self {
            position: GeoCoordinate::new(latitude, longitude)?,
            time: Utc::now(),
        })
    }

    /// Locates the observer from their public IP address.
    #[cfg(feature = "web")]
    pub fn from_ip() -> Result<Self, NetworkError> {
        let info: IpInfo = http_client()?
            .get("https://ipinfo.io/json")
            .send()?
            .error_for_status()?
            .json()?;

        let mut loc_parts = info.loc.split_terminator(',').map(|s| s.parse::<f64>());
        let (Some(Ok(lat)), Some(Ok(lon))) = (loc_parts.next(), loc_parts.next()) else {
            return Err(NetworkError::MalformedCoordinate(info.loc));
        };
        info!("Got a location of {lat}, {lon} from https://ipinfo.io");

        Ok(Self {
            position: GeoCoordinate::new(lat, lon)?,
            time: Utc::now(),
        })
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_an_observer_off_the_globe() {
        assert_eq!(
            Observer::new(40.4168, -200.0).unwrap_err(),
            InputError::LongitudeOutOfRange(-200.0)
        );
    }

    #[test]
    fn with_time_pins_the_observation() {
        let time = Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap();
        let observer = Observer::new(40.4168, -3.7038).unwrap().with_time(time);
        assert_eq!(observer.time, time);
    }
}
