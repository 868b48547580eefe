use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForumError {
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ForumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ForumError::InvalidRoute("/users".to_string());
        assert_eq!(err.to_string(), "Invalid route: /users");

        let err = ForumError::Config("tick rate must be positive".to_string());
        assert_eq!(err.to_string(), "Configuration error: tick rate must be positive");
    }

    #[test]
    fn test_io_conversion() {
        fn read() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(read(), Err(ForumError::Io(_))));
    }
}
