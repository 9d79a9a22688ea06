//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that returns predefined byte
//! streams or errors and records every request it receives.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::traits::{ByteStream, Headers, HttpClient, HttpError};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Open successfully and yield these chunks
    Stream(Vec<Bytes>),
    /// Yield these chunks, then fail the read
    StreamThenError(Vec<Bytes>, HttpError),
    /// Fail before the stream opens
    Error(HttpError),
}

impl MockResponse {
    /// Stream of chunks from string slices.
    pub fn chunks<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockResponse::Stream(
            parts
                .into_iter()
                .map(|s| Bytes::from(s.into()))
                .collect(),
        )
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use ragchat::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_default_response(MockResponse::chunks(["data: \"hi\"\n", "data: {\"type\":\"done\"}\n"]));
///
/// let stream = client.get_stream("http://localhost/rag_search?q=x", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL prefix
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Client that answers every URL with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        let client = Self::new();
        client.set_default_response(response);
        client
    }

    /// Set a response for URLs starting with `url`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self
            .default_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record_request(&self, url: &str, headers: &Headers) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
            });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins
        let prefixed = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefixed.is_some() {
            return prefixed;
        }

        self.default_response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_stream(&self, url: &str, headers: &Headers) -> Result<ByteStream, HttpError> {
        self.record_request(url, headers);

        match self.get_response(url) {
            Some(MockResponse::Stream(chunks)) => {
                let stream = futures::stream::iter(chunks.into_iter().map(Ok));
                Ok(Box::pin(stream))
            }
            Some(MockResponse::StreamThenError(chunks, err)) => {
                let items: Vec<Result<Bytes, HttpError>> = chunks
                    .into_iter()
                    .map(Ok)
                    .chain(std::iter::once(Err(err)))
                    .collect();
                Ok(Box::pin(futures::stream::iter(items)))
            }
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    async fn collect(stream: ByteStream) -> Vec<Result<Bytes, HttpError>> {
        stream.collect().await
    }

    #[test]
    fn test_mock_http_client_new() {
        let client = MockHttpClient::new();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_stream_with_chunks() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/stream",
            MockResponse::chunks(["chunk1", "chunk2", "chunk3"]),
        );

        let stream = client
            .get_stream("https://example.com/stream", &Headers::new())
            .await
            .unwrap();
        let chunks = collect(stream).await;

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], Ok(Bytes::from("chunk1")));
        assert_eq!(chunks[2], Ok(Bytes::from("chunk3")));
    }

    #[tokio::test]
    async fn test_stream_then_error() {
        let client = MockHttpClient::with_default(MockResponse::StreamThenError(
            vec![Bytes::from("a")],
            HttpError::Io("reset".to_string()),
        ));

        let stream = client
            .get_stream("https://example.com/any", &Headers::new())
            .await
            .unwrap();
        let items = collect(stream).await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[1], Err(HttpError::Io("reset".to_string())));
    }

    #[tokio::test]
    async fn test_open_error() {
        let client = MockHttpClient::with_default(MockResponse::Error(HttpError::ServerError {
            status: 503,
            message: "Unavailable".to_string(),
        }));

        let result = client
            .get_stream("https://example.com/x", &Headers::new())
            .await;

        assert!(matches!(
            result,
            Err(HttpError::ServerError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client
            .get_stream("https://example.com/missing", &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_prefix_match() {
        let client = MockHttpClient::new();
        client.set_response("https://example.com/api", MockResponse::chunks(["short"]));
        client.set_response(
            "https://example.com/api/search",
            MockResponse::chunks(["long"]),
        );

        let stream = client
            .get_stream("https://example.com/api/search?q=1", &Headers::new())
            .await
            .unwrap();
        assert_eq!(collect(stream).await, vec![Ok(Bytes::from("long"))]);
    }

    #[tokio::test]
    async fn test_headers_recorded() {
        let client = MockHttpClient::with_default(MockResponse::chunks(Vec::<String>::new()));
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        let _ = client
            .get_stream("https://example.com/sse", &headers)
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(requests[0].url, "https://example.com/sse");
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"text/event-stream".to_string())
        );

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let client = MockHttpClient::with_default(MockResponse::chunks(["x"]));
        let cloned = client.clone();

        let _ = cloned
            .get_stream("https://example.com", &Headers::new())
            .await
            .unwrap();

        assert_eq!(client.get_requests().len(), 1);
    }
}
