use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface disposed: {0}")]
    Disposed(String),

    #[error("host surface error: {0}")]
    Host(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DocViewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("language service error: {0}")]
    Service(String),

    #[error("{0}")]
    Other(String),
}
