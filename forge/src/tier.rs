//! Hardware-tier selection.
//!
//! Lower tiers narrow the model table to specs that fit the accelerator
//! memory budget, so constrained machines route to smaller models without
//! any caller change.

use crate::registry::Registry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardwareTier {
    /// 24 GB of accelerator memory or more.
    Full,
    /// 8 to 24 GB.
    Balanced,
    /// Under 8 GB.
    Lite,
}

impl HardwareTier {
    /// Classify a machine by available accelerator memory in GB.
    pub fn detect(vram_gb: f32) -> Self {
        if vram_gb >= 24.0 {
            HardwareTier::Full
        } else if vram_gb >= 8.0 {
            HardwareTier::Balanced
        } else {
            HardwareTier::Lite
        }
    }

    fn vram_budget(self) -> f32 {
        match self {
            HardwareTier::Full => f32::INFINITY,
            HardwareTier::Balanced => 12.0,
            HardwareTier::Lite => 4.0,
        }
    }

    /// The default model table narrowed to this tier's memory budget.
    pub fn registry(self) -> Registry {
        Registry::default().retain_within(self.vram_budget())
    }
}
