//! Result classification for documentation requests.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{DocSource, PositionQuery};

/// Advisory surfaced when the language service cannot be reached.
///
/// Fixed text: there is no retry machinery, the user re-invokes the
/// command once the service is up.
pub const SERVICE_UNAVAILABLE_ADVISORY: &str =
    "The documentation service is not available yet. Wait a moment and run the command again.";

/// What a fetch resolved to, from the viewer's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The service returned a documentation body.
    Doc(String),
    /// The position has nothing documentable; skip silently.
    Empty,
    /// The service failed or is not running; surface the advisory.
    Unavailable,
}

/// Fetches documentation through a [`DocSource`].
pub struct DocFetcher {
    source: Arc<dyn DocSource>,
}

impl DocFetcher {
    pub fn new(source: Arc<dyn DocSource>) -> Self {
        Self { source }
    }

    /// Request documentation for `query` and classify the result.
    ///
    /// Service errors degrade to [`FetchOutcome::Unavailable`] and are
    /// never propagated upward. Whitespace-only bodies count as empty.
    pub async fn fetch(&self, query: &PositionQuery) -> FetchOutcome {
        match self.source.doc_at(query).await {
            Ok(doc) if doc.trim().is_empty() => {
                debug!(
                    document = %query.document,
                    line = query.line,
                    character = query.character,
                    "no documentation at position"
                );
                FetchOutcome::Empty
            }
            Ok(doc) => {
                debug!(
                    document = %query.document,
                    line = query.line,
                    body_len = doc.len(),
                    "documentation fetched"
                );
                FetchOutcome::Doc(doc)
            }
            Err(e) => {
                warn!(error = %e, "documentation service unavailable");
                FetchOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceError;
    use async_trait::async_trait;

    struct FixedSource(&'static str);

    #[async_trait]
    impl DocSource for FixedSource {
        async fn doc_at(&self, _query: &PositionQuery) -> Result<String, ServiceError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource(ServiceError);

    #[async_trait]
    impl DocSource for FailingSource {
        async fn doc_at(&self, _query: &PositionQuery) -> Result<String, ServiceError> {
            Err(match &self.0 {
                ServiceError::Unavailable(msg) => ServiceError::Unavailable(msg.clone()),
                ServiceError::Protocol(msg) => ServiceError::Protocol(msg.clone()),
                ServiceError::Timeout => ServiceError::Timeout,
            })
        }
    }

    fn query() -> PositionQuery {
        PositionQuery {
            document: "scripts/recipes.zs".into(),
            line: 3,
            character: 14,
        }
    }

    #[tokio::test]
    async fn doc_body_passes_through() {
        let fetcher = DocFetcher::new(Arc::new(FixedSource("<h1>zip</h1>")));
        assert_eq!(
            fetcher.fetch(&query()).await,
            FetchOutcome::Doc("<h1>zip</h1>".into())
        );
    }

    #[tokio::test]
    async fn empty_body_classified_as_empty() {
        let fetcher = DocFetcher::new(Arc::new(FixedSource("")));
        assert_eq!(fetcher.fetch(&query()).await, FetchOutcome::Empty);
    }

    #[tokio::test]
    async fn whitespace_body_classified_as_empty() {
        let fetcher = DocFetcher::new(Arc::new(FixedSource("  \n\t ")));
        assert_eq!(fetcher.fetch(&query()).await, FetchOutcome::Empty);
    }

    #[tokio::test]
    async fn unavailable_service_degrades() {
        let fetcher = DocFetcher::new(Arc::new(FailingSource(ServiceError::Unavailable(
            "not started".into(),
        ))));
        assert_eq!(fetcher.fetch(&query()).await, FetchOutcome::Unavailable);
    }

    #[tokio::test]
    async fn timeout_degrades_to_unavailable() {
        let fetcher = DocFetcher::new(Arc::new(FailingSource(ServiceError::Timeout)));
        assert_eq!(fetcher.fetch(&query()).await, FetchOutcome::Unavailable);
    }

    #[test]
    fn advisory_mentions_waiting() {
        assert!(SERVICE_UNAVAILABLE_ADVISORY.contains("Wait"));
    }
}
