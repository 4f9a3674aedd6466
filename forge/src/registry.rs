//! Static table of local model descriptors.
//!
//! Descriptors are declared once at process start; capability lookup scans in
//! declaration order and takes the first match. A missing specialist never
//! blocks the pipeline: lookup falls back to [`DEFAULT_MODEL`], which is
//! policy, not an error.

use tracing::warn;

/// Task category a model is declared suited for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Reasoning,
    Code,
    Design,
}

/// Generic small model used when no descriptor matches a capability.
pub const DEFAULT_MODEL: &str = "llama3.2:3b";

/// One local model: identifier, approximate footprint, declared capabilities.
#[derive(Clone, Debug)]
pub struct ModelSpec {
    pub name: String,
    pub disk_gb: f32,
    pub min_vram_gb: f32,
    pub capabilities: Vec<Capability>,
}

impl ModelSpec {
    pub fn new(
        name: impl Into<String>,
        disk_gb: f32,
        min_vram_gb: f32,
        capabilities: Vec<Capability>,
    ) -> Self {
        debug_assert!(!capabilities.is_empty());
        Self {
            name: name.into(),
            disk_gb,
            min_vram_gb,
            capabilities,
        }
    }
}

/// Ordered list of model descriptors, first-match-wins.
#[derive(Clone, Debug)]
pub struct Registry {
    models: Vec<ModelSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    pub fn with_model(mut self, model: ModelSpec) -> Self {
        self.models.push(model);
        self
    }

    pub fn models(&self) -> &[ModelSpec] {
        &self.models
    }

    /// First descriptor whose capability set contains `task`.
    pub fn lookup(&self, task: Capability) -> Option<&ModelSpec> {
        self.models
            .iter()
            .find(|m| m.capabilities.contains(&task))
    }

    /// Model name to use for `task`, substituting [`DEFAULT_MODEL`] when no
    /// descriptor matches.
    pub fn find_model_for(&self, task: Capability) -> &str {
        match self.lookup(task) {
            Some(spec) => &spec.name,
            None => {
                warn!(?task, fallback = DEFAULT_MODEL, "no capable model, substituting default");
                DEFAULT_MODEL
            }
        }
    }

    /// Narrow the table to models that fit within `vram_gb` of accelerator
    /// memory, preserving declaration order.
    pub fn retain_within(&self, vram_gb: f32) -> Registry {
        Registry {
            models: self
                .models
                .iter()
                .filter(|m| m.min_vram_gb <= vram_gb)
                .cloned()
                .collect(),
        }
    }
}

impl Default for Registry {
    /// Built-in model table covering all three capabilities.
    fn default() -> Self {
        Registry::new()
            .with_model(ModelSpec::new(
                "deepseek-r1:14b",
                9.0,
                12.0,
                vec![Capability::Reasoning],
            ))
            .with_model(ModelSpec::new(
                "qwen2.5-coder:7b",
                4.7,
                8.0,
                vec![Capability::Code],
            ))
            .with_model(ModelSpec::new(
                "llama3.1:8b",
                4.9,
                8.0,
                vec![Capability::Design, Capability::Reasoning],
            ))
            .with_model(ModelSpec::new(
                "qwen2.5-coder:1.5b",
                1.0,
                2.0,
                vec![Capability::Code],
            ))
            .with_model(ModelSpec::new(
                "llama3.2:3b",
                2.0,
                4.0,
                vec![Capability::Design],
            ))
    }
}
