//! Error types for AetherFlow

use thiserror::Error;

/// Main error type for AetherFlow operations
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The Gemini backend was selected but no API key is configured
    #[error("Missing API key: set GEMINI_API_KEY or choose the offline resolver")]
    MissingApiKey,

    /// Request to the theme service failed
    #[error("Transport error: {0}")]
    Transport(String),

    /// The theme service answered with something we cannot use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Template name outside the six known presets
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// Resolver backend name not recognized
    #[error("Unknown resolver: {0}")]
    UnknownResolver(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Settings could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::Serialization(err.to_string())
    }
}

/// Result type alias using ThemeError
pub type ThemeResult<T> = Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ThemeError::UnknownTemplate("SPIRAL".to_string());
        assert_eq!(format!("{}", err), "Unknown template: SPIRAL");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ThemeError = io_err.into();
        assert!(matches!(err, ThemeError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: ThemeError = json_err.into();
        assert!(matches!(err, ThemeError::Serialization(_)));
    }
}
