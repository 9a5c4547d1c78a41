//! User-facing advisories.
//!
//! Every failure in this system degrades to a no-op or a short advisory
//! the host surfaces; there are no error dialogs and no severity tiers.
//! Advisories expire on their own and the queue is bounded, so repeated
//! commands against an unreachable service cannot pile up stale messages.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long an advisory stays visible before it expires on its own.
pub const ADVISORY_TTL: Duration = Duration::from_secs(8);

/// How many advisories the queue holds before the oldest is dropped.
const QUEUE_CAPACITY: usize = 16;

/// A transient message for the host to surface to the user.
#[derive(Debug, Clone)]
pub struct Advisory {
    pub title: String,
    pub body: String,
    created_at: Instant,
}

impl Advisory {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
        }
    }

    /// Whether this advisory has outlived [`ADVISORY_TTL`].
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= ADVISORY_TTL
    }
}

/// Pending advisories, oldest first.
///
/// Expired entries are swept on every access, and a push over capacity
/// drops the oldest entry rather than the new one.
#[derive(Debug)]
pub struct AdvisoryQueue {
    items: VecDeque<Advisory>,
}

impl AdvisoryQueue {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(QUEUE_CAPACITY),
        }
    }

    pub fn push(&mut self, advisory: Advisory) {
        self.sweep();
        if self.items.len() >= QUEUE_CAPACITY {
            self.items.pop_front();
        }
        self.items.push_back(advisory);
    }

    /// Advisories still worth showing.
    pub fn visible(&mut self) -> Vec<&Advisory> {
        self.sweep();
        self.items.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn sweep(&mut self) {
        self.items.retain(|advisory| !advisory.is_expired());
    }
}

impl Default for AdvisoryQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisory(body: &str) -> Advisory {
        Advisory::new("Documentation", body)
    }

    fn expired_advisory(body: &str) -> Advisory {
        Advisory {
            created_at: Instant::now() - ADVISORY_TTL - Duration::from_secs(1),
            ..advisory(body)
        }
    }

    #[test]
    fn fresh_advisory_is_not_expired() {
        assert!(!advisory("service down").is_expired());
        assert!(expired_advisory("old news").is_expired());
    }

    #[test]
    fn visible_returns_pushed_advisories_in_order() {
        let mut queue = AdvisoryQueue::new();
        assert!(queue.is_empty());

        queue.push(advisory("first"));
        queue.push(advisory("second"));

        let visible = queue.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].body, "first");
        assert_eq!(visible[1].body, "second");
    }

    #[test]
    fn expired_advisories_are_swept_on_access() {
        let mut queue = AdvisoryQueue::new();
        queue.push(expired_advisory("stale"));
        queue.push(advisory("current"));

        let visible = queue.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].body, "current");
    }

    #[test]
    fn push_over_capacity_drops_oldest() {
        let mut queue = AdvisoryQueue::new();
        for i in 0..20 {
            queue.push(advisory(&format!("advisory {i}")));
        }

        let visible = queue.visible();
        assert_eq!(visible.len(), 16);
        assert_eq!(visible[0].body, "advisory 4");
        assert_eq!(visible[15].body, "advisory 19");
    }

    #[test]
    fn push_sweeps_expired_before_dropping_fresh_entries() {
        let mut queue = AdvisoryQueue::new();
        for _ in 0..16 {
            queue.push(expired_advisory("stale"));
        }

        queue.push(advisory("current"));

        let visible = queue.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].body, "current");
    }
}
