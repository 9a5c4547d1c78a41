//! Configuration validation.
//!
//! Collects all problems into a single `ConfigError` so callers can log
//! one warning per load.

use docview_common::ConfigError;

use crate::schema::DocViewConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DocViewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_assets(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// The asset root must be usable as a URL prefix inside an href attribute:
/// non-empty, no whitespace, no HTML-significant characters.
fn validate_assets(errors: &mut Vec<String>, config: &DocViewConfig) {
    let root = &config.assets.root;
    if root.trim().is_empty() {
        errors.push("assets.root must not be empty".into());
        return;
    }
    if root.chars().any(|c| c.is_whitespace()) {
        errors.push(format!("assets.root {root:?} contains whitespace"));
    }
    for forbidden in ['<', '>', '`'] {
        if root.contains(forbidden) {
            errors.push(format!("assets.root {root:?} contains {forbidden:?}"));
        }
    }
}
