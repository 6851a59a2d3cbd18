//! Fixture errors.

/// Fixture result
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Fixture errors
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Unsupported architecture: {0} has no alignment check flag")]
    UnsupportedArch(&'static str),

    #[error("Alignment check not enforced")]
    NotEnforced,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FixtureError::UnsupportedArch("aarch64").to_string(),
            "Unsupported architecture: aarch64 has no alignment check flag"
        );
        assert_eq!(FixtureError::NotEnforced.to_string(), "Alignment check not enforced");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: FixtureError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, FixtureError::Io(_)));
        assert_eq!(err.to_string(), "IO error: closed");
    }
}
