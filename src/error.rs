use thiserror::Error;

/// Main error type for releval
#[derive(Error, Debug)]
pub enum RelevalError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenient Result type using RelevalError
pub type Result<T> = std::result::Result<T, RelevalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RelevalError::Config("unknown knowledge base".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("unknown knowledge base"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RelevalError = io_err.into();
        assert!(matches!(err, RelevalError::Io(_)));
    }
}
