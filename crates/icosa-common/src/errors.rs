use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum IcosaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("geometry.size = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: geometry.size = 0 is out of range"
        );
    }

    #[test]
    fn icosa_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: IcosaError = config_err.into();
        assert!(matches!(err, IcosaError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn icosa_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: IcosaError = io_err.into();
        assert!(matches!(err, IcosaError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn icosa_error_other_variants() {
        let err = IcosaError::Renderer("surface has zero area".into());
        assert_eq!(err.to_string(), "renderer error: surface has zero area");

        let err = IcosaError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
