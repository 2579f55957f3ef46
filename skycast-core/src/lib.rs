//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - The country registry and nearest-country resolution
//! - The Open-Meteo forecast client
//! - Weather-code translation and payload normalization
//! - Geolocation as an injected platform capability
//! - Theme preference handling
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod error;
pub mod geo;
pub mod location;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod state;
pub mod theme;

pub use config::Config;
pub use error::Error;
pub use geo::{GeoOptions, GeolocationSource, IpLookupSource, current_location};
pub use location::{closest_country, countries, country_by_code, default_location, location_name};
pub use model::{Coordinates, Country, ForecastDay, ForecastPayload, Location, WeatherDisplay};
pub use normalize::normalize;
pub use provider::{ForecastProvider, OpenMeteoProvider};
pub use state::{DisplayState, RequestToken};
pub use theme::ThemeName;
