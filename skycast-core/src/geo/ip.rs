use std::sync::Mutex;
use std::time::Instant;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::error::Error;
use crate::model::Coordinates;

use super::{GeoOptions, GeolocationSource};

const LOOKUP_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    latitude: f64,
    longitude: f64,
}

/// Geolocation via the machine's public IP address.
///
/// This is the CLI's stand-in for a device positioning capability: coarse,
/// but good enough to pick the nearest registry entry. A fix is cached and
/// reused while younger than [`GeoOptions::maximum_age`].
#[derive(Debug, Default)]
pub struct IpLookupSource {
    http: Client,
    cached: Mutex<Option<(Instant, Coordinates)>>,
}

impl IpLookupSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn cached_fix(&self, options: &GeoOptions) -> Option<Coordinates> {
        let cached = self.cached.lock().ok()?;
        let (taken_at, coords) = (*cached)?;
        (taken_at.elapsed() < options.maximum_age).then_some(coords)
    }

    fn store_fix(&self, coords: Coordinates) {
        if let Ok(mut cached) = self.cached.lock() {
            *cached = Some((Instant::now(), coords));
        }
    }
}

#[async_trait]
impl GeolocationSource for IpLookupSource {
    async fn position(&self, options: &GeoOptions) -> Result<Coordinates, Error> {
        if let Some(coords) = self.cached_fix(options) {
            debug!("reusing cached IP fix");
            return Ok(coords);
        }

        let res = self
            .http
            .get(LOOKUP_URL)
            .send()
            .await
            .map_err(|e| Error::PermissionOrTimeout { reason: e.to_string() })?;

        let status = res.status();
        if !status.is_success() {
            return Err(Error::PermissionOrTimeout {
                reason: format!("IP lookup failed with status {status}"),
            });
        }

        let parsed: IpLookupResponse = res
            .json()
            .await
            .map_err(|e| Error::PermissionOrTimeout { reason: e.to_string() })?;

        let coords = Coordinates { latitude: parsed.latitude, longitude: parsed.longitude };
        self.store_fix(coords);

        Ok(coords)
    }
}
