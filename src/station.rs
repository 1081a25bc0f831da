use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::geo::{GeoCoordinate, InputError};

/// Where the station currently is, per https://open-notify.org.
pub const POSITION_URL: &str = "http://api.open-notify.org/iss-now.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response contained an unparsable coordinate: {0:?}")]
    MalformedCoordinate(String),
    #[error("response carried an off-globe position: {0}")]
    InvalidPosition(#[from] InputError),
    #[error("response carried an unrepresentable timestamp: {0}")]
    InvalidTimestamp(i64),
}

/// The station's current ground position and the moment of the fix.
#[derive(Clone, Debug)]
pub struct Station {
    pub position: GeoCoordinate,
    pub timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
struct PositionResponse {
    iss_position: RawPosition,
    timestamp: i64,
}

#[derive(Deserialize)]
struct RawPosition {
    latitude: RawCoordinate,
    longitude: RawCoordinate,
}

// The API serves coordinates as strings; take numbers as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl RawCoordinate {
    fn degrees(&self) -> Result<f64, NetworkError> {
        match self {
            RawCoordinate::Number(value) => Ok(*value),
            RawCoordinate::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| NetworkError::MalformedCoordinate(text.clone())),
        }
    }
}

impl Station {
    pub fn fetch() -> Result<Self, NetworkError> {
        Self::fetch_from(POSITION_URL)
    }

    pub fn fetch_from(url: &str) -> Result<Self, NetworkError> {
        let response: PositionResponse = http_client()?
            .get(url)
            .send()?
            .error_for_status()?
            .json()?;

        let position = GeoCoordinate::new(
            response.iss_position.latitude.degrees()?,
            response.iss_position.longitude.degrees()?,
        )?;
        let timestamp = DateTime::from_timestamp(response.timestamp, 0)
            .ok_or(NetworkError::InvalidTimestamp(response.timestamp))?;

        info!(
            "Station is over {:.2}, {:.2} as of {timestamp}",
            position.latitude(),
            position.longitude()
        );

        Ok(Self {
            position,
            timestamp,
        })
    }
}

pub(crate) fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}
