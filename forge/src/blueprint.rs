//! Three-stage blueprint orchestration.
//!
//! Each stage embeds the previous stage's raw text in its prompt, so the
//! stages are sequential by data dependence and must never be parallelized.
//! A failed stage aborts the whole run with the originating error; there are
//! no partial blueprints.

use inference::InferenceError;

use crate::registry::Capability;
use crate::router::Router;

/// Raw text output of one orchestration run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blueprint {
    pub design: String,
    pub mechanics: String,
    pub architecture: String,
}

pub(crate) fn design_prompt(concept: &str) -> String {
    format!(
        "You are a game designer. Describe the core design rationale for the \
         following game concept: player fantasy, tone, and the single loop \
         that makes it fun.\n\nConcept:\n{concept}"
    )
}

pub(crate) fn mechanics_prompt(design: &str) -> String {
    format!(
        "Given the following design rationale, specify the concrete game \
         mechanics: rules, resources, win and loss conditions.\n\nDesign \
         rationale:\n{design}"
    )
}

pub(crate) fn architecture_prompt(mechanics: &str) -> String {
    format!(
        "Given the following mechanics specification, plan the technical \
         architecture: systems, data structures, and update loop.\n\n\
         Mechanics:\n{mechanics}"
    )
}

/// Run the design → mechanics → architecture chain for `concept`.
pub async fn generate_blueprint(
    router: &Router,
    concept: &str,
) -> Result<Blueprint, InferenceError> {
    let design = router
        .route_to_model(Capability::Design, &design_prompt(concept))
        .await?;
    let mechanics = router
        .route_to_model(Capability::Reasoning, &mechanics_prompt(&design))
        .await?;
    let architecture = router
        .route_to_model(Capability::Code, &architecture_prompt(&mechanics))
        .await?;
    Ok(Blueprint {
        design,
        mechanics,
        architecture,
    })
}
