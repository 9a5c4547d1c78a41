pub mod advisories;
pub mod commands;
pub mod errors;

pub use advisories::{Advisory, AdvisoryQueue};
pub use commands::Command;
pub use errors::{ConfigError, DocViewError, SurfaceError};

pub type Result<T> = std::result::Result<T, DocViewError>;
