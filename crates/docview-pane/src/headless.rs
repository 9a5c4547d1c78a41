//! In-memory surface and host backends.
//!
//! Used by the tests throughout this crate and by embedders that have no
//! webview backend. State lives behind `Arc`s so probes stay usable after
//! the surface or host has been moved into a controller.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use docview_common::SurfaceError;

use crate::surface::{PaneHost, Subscription, ViewSurface};

#[derive(Debug, Default)]
struct SurfaceState {
    html: String,
    reveal_count: usize,
    disposed: bool,
}

/// A surface that records what a real host panel would be told to do.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    state: Arc<Mutex<SurfaceState>>,
    live_listeners: Arc<AtomicUsize>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe sharing this surface's state, usable after the surface has
    /// been handed off.
    pub fn probe(&self) -> SurfaceProbe {
        SurfaceProbe {
            state: Arc::clone(&self.state),
            live_listeners: Arc::clone(&self.live_listeners),
        }
    }
}

impl ViewSurface for HeadlessSurface {
    fn set_html(&mut self, html: &str) -> Result<(), SurfaceError> {
        let mut state = self.state.lock().unwrap();
        if state.disposed {
            return Err(SurfaceError::Disposed("set_html".into()));
        }
        state.html = html.to_string();
        Ok(())
    }

    fn reveal(&mut self) -> Result<(), SurfaceError> {
        let mut state = self.state.lock().unwrap();
        if state.disposed {
            return Err(SurfaceError::Disposed("reveal".into()));
        }
        state.reveal_count += 1;
        Ok(())
    }

    fn subscribe_messages(&mut self) -> Subscription {
        Subscription::new(Arc::clone(&self.live_listeners))
    }

    fn dispose(&mut self) {
        self.state.lock().unwrap().disposed = true;
    }
}

/// Read-only view of a [`HeadlessSurface`].
#[derive(Debug, Clone)]
pub struct SurfaceProbe {
    state: Arc<Mutex<SurfaceState>>,
    live_listeners: Arc<AtomicUsize>,
}

impl SurfaceProbe {
    /// The HTML most recently set on the surface.
    pub fn html(&self) -> String {
        self.state.lock().unwrap().html.clone()
    }

    /// How many times the surface was revealed.
    pub fn reveal_count(&self) -> usize {
        self.state.lock().unwrap().reveal_count
    }

    /// Whether the surface has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state.lock().unwrap().disposed
    }

    /// Live message listeners on the surface. A well-behaved controller
    /// keeps this at 0 or 1.
    pub fn live_listeners(&self) -> usize {
        self.live_listeners.load(Ordering::SeqCst)
    }
}

/// Host that hands out headless surfaces and records the context flag.
///
/// Cheap to clone; clones share state, so tests keep one handle and move
/// another into the viewer.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    pane_active: Arc<Mutex<Option<bool>>>,
    surfaces: Arc<Mutex<Vec<SurfaceProbe>>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported value of the pane-active context flag, if any.
    pub fn pane_active(&self) -> Option<bool> {
        *self.pane_active.lock().unwrap()
    }

    /// Probes for every surface created so far, oldest first.
    pub fn surfaces(&self) -> Vec<SurfaceProbe> {
        self.surfaces.lock().unwrap().clone()
    }

    /// Probe for the most recently created surface.
    pub fn current_surface(&self) -> Option<SurfaceProbe> {
        self.surfaces.lock().unwrap().last().cloned()
    }

    /// How many surfaces have been created over this host's lifetime.
    pub fn surfaces_created(&self) -> usize {
        self.surfaces.lock().unwrap().len()
    }
}

impl PaneHost for HeadlessHost {
    fn create_surface(&mut self) -> Box<dyn ViewSurface> {
        let surface = HeadlessSurface::new();
        self.surfaces.lock().unwrap().push(surface.probe());
        Box::new(surface)
    }

    fn set_pane_active(&mut self, active: bool) {
        *self.pane_active.lock().unwrap() = Some(active);
    }
}
