//! Forecast data sources.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Error;
use crate::model::{Coordinates, ForecastPayload};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Something that can produce a raw forecast payload for coordinates.
///
/// One production implementation exists ([`OpenMeteoProvider`]); the trait is
/// the seam for tests and for callers that inject their own source.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Single network round trip; no retry, no client-side timeout. Callers
    /// layer their own policy if they need one.
    async fn fetch_forecast(&self, coords: Coordinates) -> Result<ForecastPayload, Error>;
}
