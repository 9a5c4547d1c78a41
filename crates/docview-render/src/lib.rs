//! Documentation page rendering.
//!
//! Turns raw documentation bodies from the language service into complete
//! HTML pages: a fixed template, dark/light stylesheet selection, and a
//! script bridge that reports clicks on marked cross-reference links back
//! to the controller. Rendering is deterministic: identical input and
//! options produce identical output.

pub mod escape;
pub mod page;
pub mod template;

pub use escape::escape_html;
pub use page::Page;
pub use template::{render, RenderOptions, LINK_BRIDGE_SCRIPT, PAGE_TITLE};
