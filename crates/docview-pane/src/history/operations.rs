//! Mutating operations on NavigationHistory: fresh pushes and replay.

use docview_render::Page;
use tracing::debug;

use super::NavigationHistory;

impl NavigationHistory {
    /// Record a freshly fetched page as the new current page.
    ///
    /// Fresh content invalidates redo history: the forward stack is
    /// cleared unconditionally. Pure back/forward movement never clears it.
    pub fn push_fresh(&mut self, page: Page) {
        self.back.push(page);
        self.forward.clear();
        debug!(back_len = self.back.len(), "fresh page pushed");
    }

    /// Step back, returning the page to redisplay.
    ///
    /// The current page moves onto the forward stack; the new back-stack
    /// top stays in place as the new current page. Returns `None` and
    /// changes nothing when there is nowhere to go.
    pub fn go_back(&mut self) -> Option<Page> {
        if !self.can_go_back() {
            return None;
        }
        let current = self.back.pop()?;
        self.forward.push(current);
        let target = self.back.last().cloned();
        debug!(
            back_len = self.back.len(),
            forward_len = self.forward.len(),
            "navigated back"
        );
        target
    }

    /// Step forward after a back step, returning the page to redisplay.
    ///
    /// The page leaves the forward stack and becomes the current page on
    /// top of the back stack. Returns `None` and changes nothing when the
    /// forward stack is empty.
    pub fn go_forward(&mut self) -> Option<Page> {
        let page = self.forward.pop()?;
        self.back.push(page.clone());
        debug!(
            back_len = self.back.len(),
            forward_len = self.forward.len(),
            "navigated forward"
        );
        Some(page)
    }
}
