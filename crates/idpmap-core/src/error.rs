//! Error types for idpmap

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    // Load errors
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Invalid GeoJSON: {reason}")]
    InvalidGeoJson { reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Scaling errors
    #[error("Invalid radius bounds: min {min} must be positive and below max {max}")]
    InvalidRadiusBounds { min: f64, max: f64 },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
