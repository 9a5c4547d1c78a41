//! Documentation pane: navigation history, pane lifecycle, and the
//! command-level viewer hosts embed.
//!
//! The crate is host-agnostic. The actual panel/webview sits behind the
//! [`surface::ViewSurface`] and [`surface::PaneHost`] traits; [`headless`]
//! carries an in-memory implementation for tests and for embedders
//! without a webview backend.

pub mod controller;
pub mod headless;
pub mod history;
pub mod messages;
pub mod surface;
pub mod viewer;

pub use controller::{PaneController, PaneSnapshot};
pub use headless::{HeadlessHost, HeadlessSurface, SurfaceProbe};
pub use history::NavigationHistory;
pub use messages::{is_page_method_allowed, PageMessage, SearchParams};
pub use surface::{PaneEvent, PaneHost, Subscription, ViewSurface};
pub use viewer::DocViewer;
