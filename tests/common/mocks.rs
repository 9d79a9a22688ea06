//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `ragchat::adapters::mock` and adds a builder for
//! configuring streamed responses.

pub use ragchat::adapters::mock::{
    MockHttpClient, MockResponse, PresenterCall, RecordedRequest, RecordingPresenter,
};
#[allow(unused_imports)]
pub use ragchat::traits::{Headers, HttpClient, HttpError};

use bytes::Bytes;

/// Configuration for setting up mock HTTP responses.
#[allow(dead_code)]
pub struct MockHttpConfig {
    client: MockHttpClient,
}

#[allow(dead_code)]
impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Every URL answers with `body` split into the given chunks.
    pub fn with_stream(self, chunks: Vec<String>) -> Self {
        self.client
            .set_default_response(MockResponse::chunks(chunks));
        self
    }

    /// Every URL answers with a non-OK status.
    pub fn with_status_error(self, status: u16, message: &str) -> Self {
        self.client
            .set_default_response(MockResponse::Error(HttpError::ServerError {
                status,
                message: message.to_string(),
            }));
        self
    }

    /// Chunks followed by a read failure.
    pub fn with_broken_stream(self, chunks: Vec<String>, error: HttpError) -> Self {
        self.client.set_default_response(MockResponse::StreamThenError(
            chunks.into_iter().map(Bytes::from).collect(),
            error,
        ));
        self
    }

    /// Builds and returns the configured mock client.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
