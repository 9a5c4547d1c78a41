//! docview configuration system.
//!
//! TOML-based configuration with live reload. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docview_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod loader;
pub mod reload;
pub mod schema;
pub mod validation;

mod template;

// Re-export core types for convenience
pub use reload::{ConfigWatcher, ReloadManager};
pub use schema::{AppearanceConfig, AssetConfig, DocViewConfig, LogLevel, LoggingConfig};

use docview_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// file on first run.
pub fn load_config() -> Result<DocViewConfig, ConfigError> {
    loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DocViewConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = DocViewConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"appearance\""));
        assert!(json.contains("\"assets\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = DocViewConfig::default();
        let json = config_to_json(&config);
        let parsed: DocViewConfig = serde_json::from_str(&json).unwrap();
        assert!(!parsed.appearance.dark_mode);
        assert_eq!(parsed.assets.root, "docview://assets");
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }
}
