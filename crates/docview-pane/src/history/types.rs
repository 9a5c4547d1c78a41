//! Core types for documentation navigation history.

use docview_render::Page;

/// Back/forward history over rendered documentation pages.
///
/// The back stack is oldest-first and its last element is always the
/// currently displayed page: once anything has been shown the stack is
/// non-empty, and going back needs at least two entries. The forward
/// stack holds pages navigated back away from. Pages are tracked purely
/// positionally; two identical fetches occupy two slots.
///
/// Both stacks are unbounded and live for the process session only.
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    pub(super) back: Vec<Page>,
    pub(super) forward: Vec<Page>,
}

impl NavigationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a back step is possible (a page exists before the current one).
    pub fn can_go_back(&self) -> bool {
        self.back.len() >= 2
    }

    /// Whether a forward step is possible.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// The currently displayed page, if anything has been shown.
    pub fn current(&self) -> Option<&Page> {
        self.back.last()
    }

    /// How many pages the back stack holds, current page included.
    pub fn back_len(&self) -> usize {
        self.back.len()
    }

    /// How many pages the forward stack holds.
    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }
}
