//! Geolocation capability and the adapter that turns a fix into a named
//! [`Location`].
//!
//! The platform capability is an injected trait object, so the pipeline
//! never sniffs its environment; a platform without any capability is
//! represented by [`NoGeolocation`].

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Error;
use crate::location;
use crate::model::{Coordinates, Location};

pub mod ip;

pub use ip::IpLookupSource;

/// Options handed to the platform capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoOptions {
    /// Upper bound on the wait for a fix.
    pub timeout: Duration,
    /// A cached fix no older than this may be reused.
    pub maximum_age: Duration,
}

impl Default for GeoOptions {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(10), maximum_age: Duration::from_secs(300) }
    }
}

/// A platform capability that can produce the device's coordinates.
#[async_trait]
pub trait GeolocationSource: Send + Sync + Debug {
    async fn position(&self, options: &GeoOptions) -> Result<Coordinates, Error>;
}

/// The capability of a platform that has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

#[async_trait]
impl GeolocationSource for NoGeolocation {
    async fn position(&self, _options: &GeoOptions) -> Result<Coordinates, Error> {
        Err(Error::Unsupported)
    }
}

/// Resolve the device's location: one attempt, bounded by
/// [`GeoOptions::timeout`], no polling and no retry.
///
/// On success the coordinates are named through the nearest-country
/// resolver ("<capital>, <country name>").
pub async fn current_location(
    source: &dyn GeolocationSource,
    options: &GeoOptions,
) -> Result<Location, Error> {
    let coords = tokio::time::timeout(options.timeout, source.position(options))
        .await
        .map_err(|_| Error::PermissionOrTimeout { reason: "position request timed out".to_string() })??;

    let closest = location::closest_country(coords);

    Ok(Location {
        latitude: coords.latitude,
        longitude: coords.longitude,
        name: format!("{}, {}", closest.capital, closest.name),
        country: Some(closest.code.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedSource(Coordinates);

    #[async_trait]
    impl GeolocationSource for FixedSource {
        async fn position(&self, _options: &GeoOptions) -> Result<Coordinates, Error> {
            Ok(self.0)
        }
    }

    #[derive(Debug)]
    struct DeniedSource;

    #[async_trait]
    impl GeolocationSource for DeniedSource {
        async fn position(&self, _options: &GeoOptions) -> Result<Coordinates, Error> {
            Err(Error::PermissionOrTimeout { reason: "user denied the request".to_string() })
        }
    }

    #[derive(Debug)]
    struct StalledSource;

    #[async_trait]
    impl GeolocationSource for StalledSource {
        async fn position(&self, _options: &GeoOptions) -> Result<Coordinates, Error> {
            std::future::pending().await
        }
    }

    #[test]
    fn default_options_match_the_platform_contract() {
        let options = GeoOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.maximum_age, Duration::from_secs(300));
    }

    #[tokio::test]
    async fn successful_fix_is_named_via_the_registry() {
        let source = FixedSource(Coordinates { latitude: 48.9, longitude: 2.3 });
        let location = current_location(&source, &GeoOptions::default())
            .await
            .expect("fix should resolve");

        assert_eq!(location.name, "Paris, France");
        assert_eq!(location.country.as_deref(), Some("FR"));
        assert_eq!(location.latitude, 48.9);
    }

    #[tokio::test]
    async fn missing_capability_is_unsupported() {
        let err = current_location(&NoGeolocation, &GeoOptions::default())
            .await
            .expect_err("must fail");
        assert!(matches!(err, Error::Unsupported));
    }

    #[tokio::test]
    async fn denial_propagates() {
        let err = current_location(&DeniedSource, &GeoOptions::default())
            .await
            .expect_err("must fail");
        assert!(matches!(err, Error::PermissionOrTimeout { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_source_times_out() {
        let err = current_location(&StalledSource, &GeoOptions::default())
            .await
            .expect_err("must time out");
        assert!(matches!(err, Error::PermissionOrTimeout { .. }));
    }
}
