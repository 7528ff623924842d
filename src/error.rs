use thiserror::Error;

/// Errors raised at the edges of the crate
///
/// Individual records never produce errors; a record that cannot be
/// located is simply left out of radius results.
#[derive(Debug, Error)]
pub enum ListingGeoError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] validator::ValidationErrors),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Failed to decode listings: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
