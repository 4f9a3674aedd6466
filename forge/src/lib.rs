//! Capability-based routing and staged orchestration over local models.
//!
//! The `forge` crate selects among candidate local models by declared
//! capability, routes prompts through the [`inference`] client layer, and
//! composes multiple model calls into the staged blueprint pipeline behind
//! [`Pipeline`].

pub mod blueprint;
pub mod pipeline;
pub mod registry;
pub mod router;
pub mod tier;

pub use blueprint::{generate_blueprint, Blueprint};
pub use pipeline::{LocalBuild, Pipeline};
pub use registry::{Capability, ModelSpec, Registry, DEFAULT_MODEL};
pub use router::Router;
pub use tier::HardwareTier;
