//! Seams between the pane controller and the host window system.
//!
//! The actual panel/webview belongs to the host. The controller drives it
//! through [`ViewSurface`] and reports pane activity back through
//! [`PaneHost`]; events flow the other way as [`PaneEvent`] values fed in
//! by whoever pumps the host's event loop. Visibility and focus are
//! host-owned state, so the controller tracks them purely from events.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use docview_common::SurfaceError;

/// Events a host surface reports back to the controller.
#[derive(Debug, Clone)]
pub enum PaneEvent {
    /// Visibility or focus changed.
    ViewStateChanged { visible: bool, focused: bool },
    /// A raw message arrived from inside the page.
    Message { body: String },
    /// The surface was closed by the user or the host.
    Disposed,
}

/// Scoped handle to a live in-page message listener.
///
/// Dropping the handle releases the listener. The controller keeps at
/// most one alive at a time, releasing the old one before installing the
/// next.
#[derive(Debug)]
pub struct Subscription {
    live: Arc<AtomicUsize>,
}

impl Subscription {
    /// Create a handle tracked by the given live-listener counter.
    pub fn new(live: Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        Self { live }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A host view the documentation pane renders into.
///
/// One surface per pane generation: a disposed surface is never revived,
/// the host hands out a fresh one on the next show.
pub trait ViewSurface: Send {
    /// Replace the page content.
    fn set_html(&mut self, html: &str) -> Result<(), SurfaceError>;

    /// Bring the surface to the foreground.
    fn reveal(&mut self) -> Result<(), SurfaceError>;

    /// Install the in-page message listener and return its handle.
    fn subscribe_messages(&mut self) -> Subscription;

    /// Tear the surface down host-side. Idempotent.
    fn dispose(&mut self);
}

/// Host-side services the controller needs beyond a single surface.
pub trait PaneHost: Send {
    /// Create a fresh surface for a new pane generation.
    fn create_surface(&mut self) -> Box<dyn ViewSurface>;

    /// Report the "documentation pane is active" context flag the host
    /// uses to conditionally enable the back/forward commands.
    fn set_pane_active(&mut self, active: bool);
}
