mod cli;

use std::io::Read;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use docview_common::{ConfigError, DocViewError};
use docview_config::{config_to_json, DocViewConfig, LogLevel};
use docview_render::{render, RenderOptions};

fn main() {
    let args = cli::parse();

    // Config informs the default log filter, so it is resolved before the
    // subscriber is up; load failures are reported right after.
    let (config, config_err) = load_effective_config(args.config_override());

    let (log_directive, bad_level) = resolve_log_directive(args.log_level.as_deref(), &config);
    // stdout carries the rendered document, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "docview=info".parse().unwrap()),
            ),
        )
        .init();

    if let Some(e) = config_err {
        tracing::warn!("config load failed, using defaults: {e}");
    }
    if let Some(value) = bad_level {
        tracing::warn!("unknown log level {value:?}, using {log_directive}");
    }

    let result = match args.command {
        cli::Command::Render { file, dark, .. } => run_render(file.as_deref(), dark, &config),
        cli::Command::Config { .. } => {
            println!("{}", config_to_json(&config));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Pick the subscriber directive: the CLI flag wins, then the config
/// level. An unrecognized flag value falls back to the config level and
/// comes back separately so it can be reported once the subscriber is up.
fn resolve_log_directive(
    flag: Option<&str>,
    config: &DocViewConfig,
) -> (String, Option<String>) {
    let level = flag.and_then(LogLevel::from_flag);
    match (flag, level) {
        (Some(_), Some(level)) => (format!("docview={}", level.as_str()), None),
        (Some(value), None) => (
            format!("docview={}", config.logging.level.as_str()),
            Some(value.to_string()),
        ),
        (None, _) => (format!("docview={}", config.logging.level.as_str()), None),
    }
}

fn load_effective_config(path: Option<&Path>) -> (DocViewConfig, Option<ConfigError>) {
    let result = match path {
        Some(path) => docview_config::loader::load_from_path(path),
        None => docview_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (DocViewConfig::default(), Some(e)),
    }
}

fn run_render(file: Option<&Path>, dark: bool, config: &DocViewConfig) -> docview_common::Result<()> {
    let raw = read_input(file)?;
    if raw.trim().is_empty() {
        // Same skip rule as the pane: nothing documentable, nothing shown.
        return Err(DocViewError::Other(
            "nothing to render: the input is empty".into(),
        ));
    }

    let options = RenderOptions {
        dark_mode: dark || config.appearance.dark_mode,
        asset_root: config.assets.root.clone(),
    };
    let page = render(&raw, &options);
    println!("{}", page.html);
    Ok(())
}

fn read_input(file: Option<&Path>) -> docview_common::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| DocViewError::Other(format!("failed to read {}: {e}", path.display()))),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
