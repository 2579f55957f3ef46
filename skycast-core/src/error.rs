use thiserror::Error;

/// Failure taxonomy for the pipeline.
///
/// The pipeline never retries or recovers internally; every variant
/// propagates to the caller, and every operation can be re-invoked with the
/// same inputs.
#[derive(Debug, Error)]
pub enum Error {
    /// The forecast service could not be reached at all (DNS, timeout,
    /// connection reset).
    #[error("weather service unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The forecast service answered with a non-success HTTP status.
    #[error("weather service error: {status}")]
    RemoteService { status: String },

    /// The response body did not match the expected payload shape.
    #[error("malformed weather payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// No geolocation capability is available on this platform.
    #[error("geolocation not supported")]
    Unsupported,

    /// The geolocation capability was denied or did not answer in time.
    #[error("geolocation error: {reason}")]
    PermissionOrTimeout { reason: String },

    /// A caller-supplied country code is not in the registry.
    #[error("unknown country code '{code}'")]
    UnknownCountry { code: String },
}
