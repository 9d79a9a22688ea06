//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ViewPresenter`] - presenter that maintains a [`MessageView`](crate::view::MessageView)
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable byte streams
//! - [`mock::RecordingPresenter`] - Records presenter calls

pub mod mock;
pub mod reqwest_http;
pub mod view_presenter;

pub use mock::{MockHttpClient, RecordingPresenter};
pub use reqwest_http::ReqwestHttpClient;
pub use view_presenter::ViewPresenter;
