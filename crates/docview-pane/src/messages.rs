//! Messages posted by the rendered page back to the host.
//!
//! The bridge script in every rendered page posts one JSON shape when a
//! marked documentation link is clicked. Anything that does not parse as
//! that shape, or names a method outside the allowlist, is rejected and
//! logged by the caller.

use serde::{Deserialize, Serialize};

/// Methods a rendered page is allowed to call on the host.
const ALLOWED_PAGE_METHODS: &[&str] = &["search"];

/// Whether `method` is one a page may invoke.
pub fn is_page_method_allowed(method: &str) -> bool {
    ALLOWED_PAGE_METHODS.contains(&method)
}

/// A request posted from the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMessage {
    pub method: String,
    pub params: SearchParams,
}

/// Payload of a link-click search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub word: String,
    pub module: String,
}

impl PageMessage {
    /// Parse a raw message body. Returns `None` when the body is not the
    /// expected shape.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bridge_payload() {
        let raw = r#"{"method":"search","params":{"word":"zip","module":"archive"}}"#;
        let msg = PageMessage::from_json(raw).unwrap();
        assert_eq!(msg.method, "search");
        assert_eq!(msg.params.word, "zip");
        assert_eq!(msg.params.module, "archive");
    }

    #[test]
    fn rejects_garbage() {
        assert!(PageMessage::from_json("not json").is_none());
        assert!(PageMessage::from_json("{}").is_none());
        assert!(PageMessage::from_json(r#"{"method":"search"}"#).is_none());
    }

    #[test]
    fn allowlist_admits_search_only() {
        assert!(is_page_method_allowed("search"));
        assert!(!is_page_method_allowed("eval"));
        assert!(!is_page_method_allowed("Search"));
        assert!(!is_page_method_allowed(""));
    }
}
