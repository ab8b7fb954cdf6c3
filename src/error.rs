use thiserror::Error;

/// Unified error type for version-gate operations
#[derive(Error, Debug)]
pub enum VersionGateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("GitHub request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-gate
pub type Result<T> = std::result::Result<T, VersionGateError>;

impl VersionGateError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionGateError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionGateError::Version(msg.into())
    }

    /// Create an API error with context
    pub fn api(msg: impl Into<String>) -> Self {
        VersionGateError::Api(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionGateError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersionGateError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(VersionGateError::version("test")
            .to_string()
            .contains("Version"));
        assert!(VersionGateError::api("test").to_string().contains("API"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionGateError::config("x"), "Configuration error"),
            (VersionGateError::version("x"), "Version parsing error"),
            (VersionGateError::api("x"), "GitHub API error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            VersionGateError::config(""),
            VersionGateError::version(""),
            VersionGateError::api(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }
}
