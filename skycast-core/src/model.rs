use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees.
///
/// Bounds (-90..=90, -180..=180) are assumed, not enforced, matching the
/// upstream forecast service's own validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A registry entry: country plus its capital's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, unique within the registry.
    pub code: &'static str,
    pub name: &'static str,
    pub capital: &'static str,
    pub coordinates: Coordinates,
}

/// Resolved coordinates plus a display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: Option<String>,
}

impl Location {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates { latitude: self.latitude, longitude: self.longitude }
    }
}

/// Current instant fields as delivered by the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature_2m: f64,
    pub relative_humidity_2m: u8,
    pub apparent_temperature: f64,
    pub weather_code: u16,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: u16,
    /// 1 while the sun is up at the queried location, 0 otherwise.
    pub is_day: u8,
}

/// Daily aggregates as parallel arrays; the same index across all arrays
/// refers to the same day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<u16>,
    pub precipitation_probability_max: Vec<u8>,
}

/// Raw forecast response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub current: CurrentWeather,
    pub daily: DailyForecast,
}

/// Normalized, display-ready weather summary.
///
/// Temperatures and wind speed are rounded to whole numbers; humidity,
/// wind direction and precipitation chances pass through as delivered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherDisplay {
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u8,
    pub wind_speed: i32,
    /// Wind direction in degrees.
    pub wind_direction: u16,
    pub condition: String,
    pub condition_icon: String,
    pub is_day: bool,
    pub forecast: Vec<ForecastDay>,
    pub location: String,
}

/// One entry of the 7-day outlook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// ISO date string as delivered by the service.
    pub date: String,
    /// "Today", "Tomorrow", or an abbreviated weekday name.
    pub day_name: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub condition_icon: String,
    /// Maximum precipitation probability for the day, percent.
    pub precip_chance: u8,
}
