//! CLI error type.

use thiserror::Error;

use mapstitch::config::ConfigError;
use mapstitch::coord::CoordError;
use mapstitch::grid::GridError;
use mapstitch::logging::LoggingError;
use mapstitch::output::OutputError;
use mapstitch::provider::ProviderError;
use mapstitch::stitch::StitchError;

/// Errors that end the program with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid coordinates: {0}")]
    Coord(#[from] CoordError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Failed to set up HTTP client: {0}")]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Stitch(#[from] StitchError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("Confirmation prompt failed: {0}")]
    Prompt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message_passes_through() {
        let err: CliError = ConfigError::MissingApiKey("GOOGLE_MAPS_API_KEY").into();
        assert_eq!(
            err.to_string(),
            "Please set your GOOGLE_MAPS_API_KEY environment variable"
        );
    }

    #[test]
    fn test_coord_error_is_prefixed() {
        let err: CliError = CoordError::InvalidLatitude(91.0).into();
        assert!(err.to_string().starts_with("Invalid coordinates:"));
    }
}
