//! Chat client for the streaming search endpoint.
//!
//! One `ask` is one turn: open the stream for the query and drive a fresh
//! [`StreamSession`] over it until the stream ends.

use std::sync::Arc;

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::session::{SessionOutcome, StreamSession};
use crate::traits::{Headers, HttpClient, Presenter};

/// Client for asking questions of the search server.
///
/// The transport is injected, so tests run against
/// [`MockHttpClient`](crate::adapters::mock::MockHttpClient).
pub struct ChatClient {
    config: ChatConfig,
    http: Arc<dyn HttpClient>,
}

impl ChatClient {
    pub fn new(config: ChatConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Ask `query` and stream the answer into `presenter`.
    ///
    /// The query is trimmed first; an empty query sends nothing.
    pub async fn ask<P: Presenter>(
        &self,
        query: &str,
        presenter: P,
    ) -> Result<SessionOutcome, ChatError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ChatError::EmptyQuery);
        }

        let url = self.config.stream_url(query);
        tracing::info!("Asking {} ({} chars)", self.config.endpoint, query.len());

        let source = self.http.get_stream(&url, &Headers::new()).await;
        let outcome = StreamSession::new(presenter).run(source).await;

        tracing::info!("Turn finished: {:?}", outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse, PresenterCall, RecordingPresenter};

    fn client_with(mock: &MockHttpClient) -> ChatClient {
        ChatClient::new(ChatConfig::default(), Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_empty_query_sends_nothing() {
        let mock = MockHttpClient::new();
        let client = client_with(&mock);
        let presenter = RecordingPresenter::new();

        let result = client.ask("   \n", presenter.clone()).await;

        assert_eq!(result, Err(ChatError::EmptyQuery));
        assert!(mock.get_requests().is_empty());
        assert!(presenter.calls().is_empty());
    }

    #[tokio::test]
    async fn test_ask_requests_trimmed_query() {
        let mock = MockHttpClient::with_default(MockResponse::chunks([
            "data: \"hi\"\n\n",
            "data: {\"type\":\"done\"}\n\n",
        ]));
        let client = client_with(&mock);
        let presenter = RecordingPresenter::new();

        let outcome = client.ask("  what is sse?  ", presenter.clone()).await;

        assert_eq!(outcome, Ok(SessionOutcome::Completed));
        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "http://localhost:8080/rag_search?q=what%20is%20sse%3F"
        );
        assert_eq!(
            presenter.calls(),
            vec![PresenterCall::Content("<p>hi</p>".to_string())]
        );
    }

    #[tokio::test]
    async fn test_ask_reports_transport_failure() {
        let mock = MockHttpClient::with_default(MockResponse::Error(
            crate::traits::HttpError::ConnectionFailed("refused".to_string()),
        ));
        let client = client_with(&mock);
        let presenter = RecordingPresenter::new();

        let outcome = client.ask("q", presenter.clone()).await;

        assert!(matches!(outcome, Ok(SessionOutcome::Failed(_))));
        assert_eq!(presenter.error_count(), 1);
        assert_eq!(presenter.content_count(), 0);
    }
}
