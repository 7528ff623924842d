use tracing_subscriber::EnvFilter;
use crate::config::LoggingSettings;
use crate::error::ListingGeoError;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set. Format `pretty`
/// gives human-readable output, anything else JSON lines. Fails if a
/// global subscriber is already installed.
pub fn init(settings: &LoggingSettings) -> Result<(), ListingGeoError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| ListingGeoError::Logging(e.to_string()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.json().try_init()
    };

    result.map_err(|e| ListingGeoError::Logging(e.to_string()))
}
