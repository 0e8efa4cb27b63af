//! High-level runtime engine settings
//!
//! Selects how pairwise gravity is evaluated when building the force set
//! used by a `SimulationLoop`

use crate::configuration::config::EngineConfig;
use crate::simulation::forces::{AccelSet, OrderedPairGravity, SymmetricPairGravity};
use crate::simulation::params::Parameters;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub symmetric_forces: bool, // false = every ordered pair, true = i < j with negation
}

impl Engine {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        Self {
            symmetric_forces: cfg.symmetric_forces,
        }
    }

    /// Force set for this engine's gravity variant
    pub fn build_forces(&self, params: &Parameters) -> AccelSet {
        if self.symmetric_forces {
            AccelSet::new().with(SymmetricPairGravity {
                G: params.G,
                softening: params.softening,
            })
        } else {
            AccelSet::new().with(OrderedPairGravity {
                G: params.G,
                softening: params.softening,
            })
        }
    }
}
