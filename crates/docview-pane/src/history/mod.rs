//! Back/forward navigation over rendered documentation pages.
//!
//! Both directions keep one invariant: after every operation the top of
//! the back stack is the page currently on screen. Going back moves the
//! current page to the forward stack and redisplays the entry below it;
//! going forward mirrors that. A fresh fetch drops all forward entries.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use docview_render::Page;

    fn page(tag: &str) -> Page {
        Page {
            html: format!("<html><body>{tag}</body></html>"),
            body: tag.to_string(),
        }
    }

    // -- Fresh pushes --

    #[test]
    fn new_history_is_empty() {
        let history = NavigationHistory::new();
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
        assert!(history.current().is_none());
        assert_eq!(history.back_len(), 0);
        assert_eq!(history.forward_len(), 0);
    }

    #[test]
    fn first_push_becomes_current_without_back() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        assert_eq!(history.current(), Some(&page("one")));
        assert_eq!(history.back_len(), 1);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn push_fresh_always_clears_forward() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        history.push_fresh(page("two"));
        history.go_back();
        assert!(history.can_go_forward());

        history.push_fresh(page("three"));
        assert!(!history.can_go_forward());
        assert_eq!(history.forward_len(), 0);
        assert_eq!(history.current(), Some(&page("three")));
    }

    #[test]
    fn duplicate_pages_occupy_separate_slots() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("same"));
        history.push_fresh(page("same"));
        assert_eq!(history.back_len(), 2);
        assert!(history.can_go_back());
    }

    // -- Back --

    #[test]
    fn go_back_returns_previous_page() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        history.push_fresh(page("two"));

        assert_eq!(history.go_back(), Some(page("one")));
        assert_eq!(history.current(), Some(&page("one")));
        assert_eq!(history.back_len(), 1);
        assert_eq!(history.forward_len(), 1);
    }

    #[test]
    fn go_back_on_empty_history_is_noop() {
        let mut history = NavigationHistory::new();
        assert_eq!(history.go_back(), None);
        assert_eq!(history.back_len(), 0);
        assert_eq!(history.forward_len(), 0);
    }

    #[test]
    fn go_back_on_single_page_is_noop() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        assert_eq!(history.go_back(), None);
        assert_eq!(history.back_len(), 1);
        assert_eq!(history.forward_len(), 0);
        assert_eq!(history.current(), Some(&page("one")));
    }

    #[test]
    fn repeated_back_stops_at_oldest_page() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        history.push_fresh(page("two"));
        history.push_fresh(page("three"));

        assert_eq!(history.go_back(), Some(page("two")));
        assert_eq!(history.go_back(), Some(page("one")));
        assert_eq!(history.go_back(), None);
        assert_eq!(history.back_len(), 1);
        assert_eq!(history.forward_len(), 2);
    }

    // -- Forward --

    #[test]
    fn go_forward_without_back_is_noop() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        assert_eq!(history.go_forward(), None);
        assert_eq!(history.back_len(), 1);
    }

    #[test]
    fn back_then_forward_restores_current_page() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        history.push_fresh(page("two"));

        let before = history.current().cloned();
        history.go_back();
        assert_eq!(history.go_forward(), before);
        assert_eq!(history.current(), Some(&page("two")));
        assert_eq!(history.forward_len(), 0);
    }

    #[test]
    fn forward_replays_in_navigation_order() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        history.push_fresh(page("two"));
        history.push_fresh(page("three"));
        history.go_back();
        history.go_back();

        assert_eq!(history.go_forward(), Some(page("two")));
        assert_eq!(history.go_forward(), Some(page("three")));
        assert_eq!(history.go_forward(), None);
    }

    // -- Invariant --

    #[test]
    fn back_stack_top_is_always_current() {
        let mut history = NavigationHistory::new();
        history.push_fresh(page("one"));
        history.push_fresh(page("two"));
        history.push_fresh(page("three"));

        let shown = history.go_back().unwrap();
        assert_eq!(history.current(), Some(&shown));

        let shown = history.go_forward().unwrap();
        assert_eq!(history.current(), Some(&shown));

        history.push_fresh(page("four"));
        assert_eq!(history.current(), Some(&page("four")));
    }
}
