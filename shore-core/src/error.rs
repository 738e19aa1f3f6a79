//! Error types.
//!
//! Three kinds of failure exist in the app:
//! - startup failures, reported as `anyhow::Error` from `Controller::initialize`
//! - activation failures (`ActivationError`), when the map or weather widget
//!   cannot be brought up
//! - lookup misses, which are not errors at all: operations return `None`

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// The request could not be sent or the body could not be read.
    #[cfg(feature = "api")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status code.
    #[error("Status error: {0} from {1}")]
    Status(u16, String),
    /// The body was not the expected JSON shape.
    #[error("Malformed {0} payload: {1}")]
    Malformed(&'static str, String),
    /// The source has no data for this read (simulated source only).
    #[error("No {0} data available")]
    Unavailable(&'static str),
}

pub type WeatherResult<T> = Result<T, WeatherError>;

/// A lazily activated subsystem failed to come up. Never retried.
#[derive(Error, Debug)]
pub enum ActivationError {
    #[error("Map activation failed: {0}")]
    Map(String),
    #[error("Weather activation failed: {0}")]
    Weather(#[from] WeatherError),
}
