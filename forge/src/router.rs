//! Capability-based routing of prompts to local models.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use inference::{InferenceError, TextGenerator, TextRequest};

use crate::registry::{Capability, Registry};

/// Resolves a capable model from the registry and forwards the prompt to the
/// generator. Failures propagate unchanged; the router adds no retry.
pub struct Router {
    registry: Registry,
    generator: Arc<dyn TextGenerator>,
}

impl Router {
    pub fn new(registry: Registry, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            registry,
            generator,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Route a prompt to a model capable of `task` and return the completion.
    pub async fn route_to_model(
        &self,
        task: Capability,
        prompt: &str,
    ) -> Result<String, InferenceError> {
        let model = self.registry.find_model_for(task);
        info!(?task, %model, "routing task to local model");
        self.generator
            .generate_text(&TextRequest::new(model, prompt))
            .await
    }

    /// Structured variant of [`route_to_model`](Router::route_to_model) for
    /// callers that need a parsed JSON result.
    pub async fn route_to_model_json(
        &self,
        task: Capability,
        prompt: &str,
    ) -> Result<Value, InferenceError> {
        let model = self.registry.find_model_for(task);
        info!(?task, %model, "routing JSON task to local model");
        self.generator
            .generate_json(&TextRequest::new(model, prompt))
            .await
    }
}
