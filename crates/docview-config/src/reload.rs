//! Live config reload.
//!
//! Watches the config file for changes with the `notify` crate, debounces
//! change bursts, and publishes reloaded configs on a
//! [`tokio::sync::watch`] channel.

use std::path::{Path, PathBuf};
use std::time::Duration;

use docview_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use crate::loader;
use crate::schema::DocViewConfig;

/// Editors doing atomic save produce several events per save; bursts
/// within this window collapse into one reload signal.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Watches a config file for changes and sends a debounced signal per burst.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    /// Watch the config file, sending `()` on `tx` for every debounced change.
    ///
    /// Runs until the receiving side is dropped. The parent directory is
    /// watched rather than the file itself so atomic saves (write + rename)
    /// and late file creation are both picked up.
    pub async fn watch(&self, tx: mpsc::Sender<()>) -> Result<(), ConfigError> {
        let watch_dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone());
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting config file watcher for {}", self.path.display());

        // Bridge the sync notify callback into async
        let (raw_tx, mut raw_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    let is_our_file = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));
                    if is_our_file {
                        debug!("config file change detected");
                        let _ = raw_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        // Debounce loop: wait for the first signal, coalesce the rest of
        // the burst, then emit exactly one reload signal.
        while raw_rx.recv().await.is_some() {
            let debounce = tokio::time::sleep(DEBOUNCE_WINDOW);
            tokio::pin!(debounce);

            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = raw_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).await.is_err() {
                debug!("no receiver for config reload signal");
                break;
            }
        }

        Ok(())
    }
}

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs via a
/// [`tokio::sync::watch`] channel.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from the given path and start watching it.
    ///
    /// Returns the initial config and a watch receiver that yields an
    /// updated config whenever the file changes on disk. A missing or
    /// broken file falls back to defaults rather than failing startup.
    pub async fn start(config_path: PathBuf) -> (DocViewConfig, watch::Receiver<DocViewConfig>) {
        let initial_config = match loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                DocViewConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        let manager = ReloadManager { config_path };
        tokio::spawn(async move {
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    /// Internal watch loop that reloads config on file changes.
    async fn run_watch_loop(&self, config_tx: watch::Sender<DocViewConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = mpsc::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        while change_rx.recv().await.is_some() {
            info!("reloading config from {}", self.config_path.display());
            match loader::load_from_path(&self.config_path) {
                Ok(config) => {
                    if config_tx.send(config).is_err() {
                        info!("all config receivers dropped, stopping reload manager");
                        break;
                    }
                }
                Err(e) => {
                    warn!("config reload failed: {e}");
                }
            }
        }
    }
}
