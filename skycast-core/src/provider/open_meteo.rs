use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::Error;
use crate::model::{Coordinates, ForecastPayload};

use super::ForecastProvider;

const API_BASE: &str = "https://api.open-meteo.com/v1/forecast";

/// Current-instant fields requested from the service.
const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                              weather_code,wind_speed_10m,wind_direction_10m,is_day";

/// Daily aggregate fields requested from the service.
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,weather_code,precipitation_probability_max";

/// Keyless Open-Meteo forecast client.
#[derive(Debug, Clone, Default)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Fixed query parameter set: the timezone is resolved by the service
    /// from the coordinates, and the horizon is always 7 days.
    fn query_params(coords: Coordinates) -> [(&'static str, String); 6] {
        [
            ("latitude", coords.latitude.to_string()),
            ("longitude", coords.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", "7".to_string()),
        ]
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoProvider {
    async fn fetch_forecast(&self, coords: Coordinates) -> Result<ForecastPayload, Error> {
        debug!("fetching forecast for ({}, {})", coords.latitude, coords.longitude);

        let res = self
            .http
            .get(API_BASE)
            .query(&Self::query_params(coords))
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = res.status();
        if !status.is_success() {
            let text = status.canonical_reason().unwrap_or_else(|| status.as_str());
            return Err(Error::RemoteService { status: text.to_string() });
        }

        let body = res.text().await.map_err(Error::Transport)?;
        let payload: ForecastPayload = serde_json::from_str(&body).map_err(Error::Decode)?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_are_the_fixed_request_shape() {
        let coords = Coordinates { latitude: 48.8566, longitude: 2.3522 };
        let params = OpenMeteoProvider::query_params(coords);

        assert_eq!(params[0], ("latitude", "48.8566".to_string()));
        assert_eq!(params[1], ("longitude", "2.3522".to_string()));
        assert_eq!(
            params[2].1,
            "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,\
             wind_speed_10m,wind_direction_10m,is_day"
        );
        assert_eq!(
            params[3].1,
            "temperature_2m_max,temperature_2m_min,weather_code,precipitation_probability_max"
        );
        assert_eq!(params[4], ("timezone", "auto".to_string()));
        assert_eq!(params[5], ("forecast_days", "7".to_string()));
    }

    #[test]
    fn payload_parses_from_service_json() {
        let body = r#"{
            "latitude": 51.5,
            "longitude": -0.12,
            "timezone": "Europe/London",
            "current": {
                "temperature_2m": 15.6,
                "relative_humidity_2m": 70,
                "apparent_temperature": 14.2,
                "weather_code": 2,
                "wind_speed_10m": 11.4,
                "wind_direction_10m": 200,
                "is_day": 1
            },
            "daily": {
                "time": ["2026-08-26", "2026-08-27"],
                "temperature_2m_max": [20.1, 21.3],
                "temperature_2m_min": [11.0, 12.4],
                "weather_code": [61, 3],
                "precipitation_probability_max": [55, 10]
            }
        }"#;

        let payload: ForecastPayload = serde_json::from_str(body).expect("payload should parse");
        assert_eq!(payload.timezone, "Europe/London");
        assert_eq!(payload.current.weather_code, 2);
        assert_eq!(payload.daily.time.len(), 2);
        assert_eq!(payload.daily.precipitation_probability_max[0], 55);
    }
}
