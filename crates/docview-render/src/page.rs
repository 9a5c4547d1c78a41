//! Rendered page type.

use serde::{Deserialize, Serialize};

/// A rendered documentation page.
///
/// `html` is the complete document handed to the view surface. `body` is
/// the raw documentation markup the page was rendered from; pane snapshots
/// keep the body so a restore can re-render it under whatever config is
/// current at restore time. Pages carry no URL or identity key; navigation
/// history treats them purely positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub html: String,
    pub body: String,
}
