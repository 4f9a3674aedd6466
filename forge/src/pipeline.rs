//! End-to-end local-only generation flow.
//!
//! Composition root chaining hardware-tier selection, blueprint
//! orchestration, asset-prompt generation and code generation. Coarse status
//! strings go to a caller-supplied callback before each phase; the first
//! error aborts the run.

use std::env;
use std::sync::Arc;

use tracing::info;

use inference::{InferenceError, LocalClient, TextGenerator};

use crate::blueprint::{generate_blueprint, Blueprint};
use crate::registry::Capability;
use crate::router::Router;
use crate::tier::HardwareTier;

/// Everything one pipeline run produces.
#[derive(Clone, Debug)]
pub struct LocalBuild {
    pub tier: HardwareTier,
    pub blueprint: Blueprint,
    pub asset_prompts: String,
    pub code: String,
}

pub struct Pipeline {
    tier: HardwareTier,
    router: Router,
}

fn asset_prompt(design: &str) -> String {
    format!(
        "From the following design rationale, write one image-generation \
         prompt per visual asset the game needs (sprites, tiles, UI).\n\n\
         Design rationale:\n{design}"
    )
}

fn code_prompt(architecture: &str) -> String {
    format!(
        "Implement a playable prototype of the following architecture as a \
         single self-contained HTML5 canvas game.\n\nArchitecture:\n\
         {architecture}"
    )
}

impl Pipeline {
    pub fn new(tier: HardwareTier, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            tier,
            router: Router::new(tier.registry(), generator),
        }
    }

    /// Build a pipeline from `LOCAL_LLM_URL` and `LOCAL_VRAM_GB`.
    pub fn from_env() -> Self {
        let vram = env::var("LOCAL_VRAM_GB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8.0);
        Self::new(
            HardwareTier::detect(vram),
            Arc::new(LocalClient::from_env()),
        )
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Run the whole flow for one game concept.
    pub async fn run(
        &self,
        concept: &str,
        on_status: impl Fn(&str),
    ) -> Result<LocalBuild, InferenceError> {
        info!(tier = ?self.tier, "starting local pipeline");
        on_status(&format!("running fully local on {:?} tier", self.tier));

        on_status("generating blueprint");
        let blueprint = generate_blueprint(&self.router, concept).await?;

        on_status("generating asset prompts");
        let asset_prompts = self
            .router
            .route_to_model(Capability::Design, &asset_prompt(&blueprint.design))
            .await?;

        on_status("generating code");
        let code = self
            .router
            .route_to_model(Capability::Code, &code_prompt(&blueprint.architecture))
            .await?;

        on_status("done");
        Ok(LocalBuild {
            tier: self.tier,
            blueprint,
            asset_prompts,
            code,
        })
    }
}
