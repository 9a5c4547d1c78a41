//! Documentation fetching for the viewer.
//!
//! The language service itself is an external collaborator. This crate
//! defines the seam ([`DocSource`]), the position-derived request shape,
//! and a fetcher that classifies results so the viewer never has to treat
//! a service failure as a fault.

pub mod fetcher;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use fetcher::{DocFetcher, FetchOutcome, SERVICE_UNAVAILABLE_ADVISORY};

/// Method name of the outbound documentation request.
pub const DOC_REQUEST_METHOD: &str = "getDocAt";

/// Position-derived parameters of a documentation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionQuery {
    /// Identifier of the open document, as the host names it.
    pub document: String,
    /// Zero-based line of the cursor.
    pub line: u32,
    /// Zero-based character offset within the line.
    pub character: u32,
}

/// A language service that can resolve documentation at a position.
///
/// Implementations typically forward [`DOC_REQUEST_METHOD`] over whatever
/// transport the host uses to reach its language service. An empty string
/// is the correct answer for a position with nothing documentable.
#[async_trait]
pub trait DocSource: Send + Sync {
    async fn doc_at(&self, query: &PositionQuery) -> Result<String, ServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("malformed response: {0}")]
    Protocol(String),

    #[error("request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_method_is_stable() {
        assert_eq!(DOC_REQUEST_METHOD, "getDocAt");
    }

    #[test]
    fn position_query_wire_shape() {
        let query = PositionQuery {
            document: "scripts/recipes.zs".into(),
            line: 3,
            character: 14,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "document": "scripts/recipes.zs",
                "line": 3,
                "character": 14,
            })
        );
    }

    #[test]
    fn service_error_display() {
        let err = ServiceError::Unavailable("not started".into());
        assert_eq!(err.to_string(), "service unavailable: not started");

        let err = ServiceError::Protocol("missing result field".into());
        assert_eq!(err.to_string(), "malformed response: missing result field");

        let err = ServiceError::Timeout;
        assert_eq!(err.to_string(), "request timed out");
    }
}
