//! Client layer for locally hosted language model servers.
//!
//! The `inference` crate defines a [`TextGenerator`] trait along with the
//! concrete [`LocalClient`] implementation. Utilities are provided for
//! resolving the server's wire dialect and for recovering structured JSON
//! from free-form completions.

pub mod adapter;
pub mod client;
pub mod dialect;
pub mod error;
pub mod extract;
pub mod traits;

pub use adapter::{
    generate_content, ContentConfig, ContentItem, ContentPart, ContentRequest, ContentResponse,
    Contents,
};
pub use client::{LocalClient, TextRequest};
pub use dialect::Dialect;
pub use error::{ExtractionStage, InferenceError};
pub use traits::TextGenerator;
