//! The documentation viewer.
//!
//! One viewer per editor window: it routes palette commands, fetches
//! documentation for a cursor position, renders it, and drives the pane
//! through [`PaneController`]. Navigation replays rendered pages from
//! history without touching the service again.

use std::sync::Arc;

use tracing::{debug, info, warn};

use docview_common::{Advisory, AdvisoryQueue, Command};
use docview_config::DocViewConfig;
use docview_render::{render, Page, RenderOptions};
use docview_service::{
    DocFetcher, DocSource, FetchOutcome, PositionQuery, SERVICE_UNAVAILABLE_ADVISORY,
};

use crate::controller::{PaneController, PaneSnapshot};
use crate::history::NavigationHistory;
use crate::messages::{is_page_method_allowed, PageMessage};
use crate::surface::{PaneEvent, PaneHost, ViewSurface};

pub struct DocViewer {
    controller: PaneController,
    history: NavigationHistory,
    fetcher: DocFetcher,
    config: DocViewConfig,
    advisories: AdvisoryQueue,
}

impl DocViewer {
    pub fn new(host: Box<dyn PaneHost>, source: Arc<dyn DocSource>, config: DocViewConfig) -> Self {
        Self {
            controller: PaneController::new(host),
            history: NavigationHistory::new(),
            fetcher: DocFetcher::new(source),
            config,
            advisories: AdvisoryQueue::new(),
        }
    }

    /// Swap in a new configuration. Takes effect at the next render; pages
    /// already in history keep the appearance they were rendered with.
    pub fn set_config(&mut self, config: DocViewConfig) {
        self.config = config;
    }

    /// Route a palette command.
    pub async fn dispatch(&mut self, command: Command, query: Option<PositionQuery>) {
        debug!(command = command.id(), "command dispatched");
        match command {
            Command::ShowPane => self.show_pane(),
            Command::ShowDocumentation => match query {
                Some(query) => self.show_documentation(&query).await,
                None => warn!("show-documentation dispatched without a position"),
            },
            Command::BrowseBack => self.browse_back(),
            Command::BrowseForward => self.browse_forward(),
        }
    }

    /// Open the pane, or reveal it if it exists but is hidden.
    pub fn show_pane(&mut self) {
        self.controller.show();
    }

    /// Fetch documentation for `query` and show it.
    ///
    /// An empty result leaves everything untouched. An unavailable service
    /// queues an advisory and leaves everything untouched.
    pub async fn show_documentation(&mut self, query: &PositionQuery) {
        match self.fetcher.fetch(query).await {
            FetchOutcome::Doc(body) => {
                let page = self.render_body(&body);
                self.history.push_fresh(page.clone());
                self.controller.show();
                self.controller.display(&page);
                info!(
                    document = %query.document,
                    back_len = self.history.back_len(),
                    "documentation shown"
                );
            }
            FetchOutcome::Empty => {
                debug!(document = %query.document, "nothing to show, pane untouched");
            }
            FetchOutcome::Unavailable => {
                self.advisories
                    .push(Advisory::new("Documentation", SERVICE_UNAVAILABLE_ADVISORY));
            }
        }
    }

    /// Step back in history and replay the page. Silent no-op when the
    /// pane is gone or there is nowhere to go.
    pub fn browse_back(&mut self) {
        if !self.controller.is_open() {
            debug!("browse back with no pane");
            return;
        }
        if let Some(page) = self.history.go_back() {
            self.controller.display(&page);
        }
    }

    /// Step forward in history and replay the page. Silent no-op when the
    /// pane is gone or there is nowhere to go.
    pub fn browse_forward(&mut self) {
        if !self.controller.is_open() {
            debug!("browse forward with no pane");
            return;
        }
        if let Some(page) = self.history.go_forward() {
            self.controller.display(&page);
        }
    }

    /// Apply a pane event from the host.
    pub fn handle_event(&mut self, event: PaneEvent) {
        if let Some(body) = self.controller.handle_event(event) {
            self.handle_page_message(&body);
        }
    }

    /// Rebuild the pane from a snapshot: re-render the saved markup under
    /// the current configuration and seed history with it as the only
    /// entry.
    pub fn restore(&mut self, surface: Box<dyn ViewSurface>, snapshot: &PaneSnapshot) {
        let page = self.render_body(&snapshot.inner);
        self.history = NavigationHistory::new();
        self.history.push_fresh(page.clone());
        self.controller.restore(surface, &page);
        info!(body_len = snapshot.inner.len(), "pane restored from snapshot");
    }

    /// Snapshot of the current page for the host to persist.
    pub fn snapshot(&self) -> Option<PaneSnapshot> {
        self.controller.snapshot()
    }

    pub fn is_pane_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn is_pane_active(&self) -> bool {
        self.controller.is_active()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Pending advisories for the host to surface.
    pub fn advisories(&mut self) -> Vec<&Advisory> {
        self.advisories.visible()
    }

    /// Validate a message posted by the rendered page. Search requests are
    /// accepted and logged; nothing is routed anywhere yet. Anything else
    /// is rejected.
    fn handle_page_message(&mut self, body: &str) {
        let message = match PageMessage::from_json(body) {
            Some(message) => message,
            None => {
                warn!(body_len = body.len(), "page message rejected: failed to parse");
                return;
            }
        };
        if !is_page_method_allowed(&message.method) {
            warn!(method = %message.method, "page message rejected: unknown method");
            return;
        }
        debug!(
            word = %message.params.word,
            module = %message.params.module,
            "in-page search request accepted"
        );
    }

    fn render_body(&self, body: &str) -> Page {
        render(
            body,
            &RenderOptions {
                dark_mode: self.config.appearance.dark_mode,
                asset_root: self.config.assets.root.clone(),
            },
        )
    }
}
