//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable byte streams
//! - [`RecordingPresenter`] - presenter that logs every call

pub mod http;
pub mod presenter;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use presenter::{PresenterCall, RecordingPresenter};
