//! Pane lifecycle.
//!
//! A controller owns at most one live pane instance. An instance moves
//! hidden -> visible and back as the host reveals it, and once disposed it
//! is gone: the next `show` builds a fresh instance. Each content update
//! replaces the page's message listener, so at most one subscription is
//! live per pane.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use docview_render::Page;

use crate::surface::{PaneEvent, PaneHost, Subscription, ViewSurface};

struct ActivePane {
    surface: Box<dyn ViewSurface>,
    message_sub: Option<Subscription>,
    visible: bool,
    focused: bool,
    last_page: Option<Page>,
}

/// What survives of a pane across host restarts: the raw documentation
/// markup of the page it was showing. Everything else is re-derived, so a
/// restored page picks up the current appearance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneSnapshot {
    pub inner: String,
}

/// Owns the single documentation pane and reports its state to the host.
pub struct PaneController {
    host: Box<dyn PaneHost>,
    pane: Option<ActivePane>,
}

impl PaneController {
    pub fn new(host: Box<dyn PaneHost>) -> Self {
        Self { host, pane: None }
    }

    /// Whether a pane instance currently exists, visible or not.
    pub fn is_open(&self) -> bool {
        self.pane.is_some()
    }

    /// Whether the pane is both visible and focused.
    pub fn is_active(&self) -> bool {
        match &self.pane {
            Some(pane) => pane.visible && pane.focused,
            None => false,
        }
    }

    /// Create the pane if none exists, then reveal it if hidden.
    ///
    /// Visibility itself only changes when the host reports it through
    /// [`PaneEvent::ViewStateChanged`].
    pub fn show(&mut self) {
        if self.pane.is_none() {
            debug!("creating documentation pane");
            let surface = self.host.create_surface();
            self.pane = Some(ActivePane {
                surface,
                message_sub: None,
                visible: false,
                focused: false,
                last_page: None,
            });
            self.host.set_pane_active(false);
        }
        if let Some(pane) = self.pane.as_mut() {
            if !pane.visible {
                if let Err(e) = pane.surface.reveal() {
                    warn!(error = %e, "failed to reveal pane");
                }
            }
        }
    }

    /// Replace the pane's content with `page` and re-subscribe to its
    /// messages, releasing the previous subscription first.
    pub fn display(&mut self, page: &Page) {
        let pane = match self.pane.as_mut() {
            Some(pane) => pane,
            None => {
                warn!("display without a pane instance");
                return;
            }
        };
        if let Err(e) = pane.surface.set_html(&page.html) {
            warn!(error = %e, "failed to update pane content");
            return;
        }
        pane.message_sub.take();
        pane.message_sub = Some(pane.surface.subscribe_messages());
        pane.last_page = Some(page.clone());
        debug!(body_len = page.body.len(), "pane content replaced");
    }

    /// Adopt a host-recreated surface and show `page` on it.
    ///
    /// The adopted pane starts hidden; the host reveals it as part of its
    /// own layout restoration and reports the change as an event.
    pub fn restore(&mut self, surface: Box<dyn ViewSurface>, page: &Page) {
        if let Some(mut old) = self.pane.take() {
            warn!("restore over a live pane, disposing the old instance");
            old.message_sub.take();
            old.surface.dispose();
        }
        self.pane = Some(ActivePane {
            surface,
            message_sub: None,
            visible: false,
            focused: false,
            last_page: None,
        });
        self.host.set_pane_active(false);
        self.display(page);
    }

    /// Apply a host event. Returns the body of a page message when one
    /// should be handled by the caller.
    pub fn handle_event(&mut self, event: PaneEvent) -> Option<String> {
        match event {
            PaneEvent::ViewStateChanged { visible, focused } => {
                let pane = match self.pane.as_mut() {
                    Some(pane) => pane,
                    None => {
                        debug!("view state change with no pane instance");
                        return None;
                    }
                };
                pane.visible = visible;
                pane.focused = focused;
                let active = visible && focused;
                self.host.set_pane_active(active);
                debug!(visible, focused, "pane view state changed");
                None
            }
            PaneEvent::Disposed => {
                if let Some(mut pane) = self.pane.take() {
                    pane.message_sub.take();
                    pane.surface.dispose();
                    self.host.set_pane_active(false);
                    debug!("pane disposed");
                }
                None
            }
            PaneEvent::Message { body } => match &self.pane {
                Some(pane) if pane.message_sub.is_some() => Some(body),
                Some(_) => {
                    warn!("page message with no live listener dropped");
                    None
                }
                None => {
                    warn!("page message for a disposed pane dropped");
                    None
                }
            },
        }
    }

    /// Snapshot of the current page, if the pane exists and has shown one.
    pub fn snapshot(&self) -> Option<PaneSnapshot> {
        self.pane
            .as_ref()
            .and_then(|pane| pane.last_page.as_ref())
            .map(|page| PaneSnapshot {
                inner: page.body.clone(),
            })
    }
}
