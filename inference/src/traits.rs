use async_trait::async_trait;
use serde_json::Value;

use crate::client::{LocalClient, TextRequest};
use crate::error::InferenceError;

/// Anything that can turn a [`TextRequest`] into a completion.
///
/// The router and orchestrator are written against this trait so a hosted
/// provider client or a test fake can stand in for [`LocalClient`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, request: &TextRequest) -> Result<String, InferenceError>;

    async fn generate_json(&self, request: &TextRequest) -> Result<Value, InferenceError>;
}

#[async_trait]
impl TextGenerator for LocalClient {
    async fn generate_text(&self, request: &TextRequest) -> Result<String, InferenceError> {
        LocalClient::generate_text(self, request).await
    }

    async fn generate_json(&self, request: &TextRequest) -> Result<Value, InferenceError> {
        LocalClient::generate_json(self, request).await
    }
}
