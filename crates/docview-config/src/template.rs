//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# docview configuration
# Only override what you want to change -- missing fields use defaults.

[appearance]
# dark_mode = false      # selects the dark or light stylesheet variant

[assets]
# root = "docview://assets"   # base URL for stylesheets in rendered pages

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DocViewConfig;

    #[test]
    fn default_config_toml_is_valid() {
        let content = default_config_toml();
        let config: DocViewConfig = toml::from_str(&content).unwrap();
        assert!(!config.appearance.dark_mode);
        assert_eq!(config.assets.root, "docview://assets");
    }
}
