use crate::error::{
    ensure_at_least, ensure_mutation_rate, ensure_positive, ensure_selection_strength, ConfigError,
    Result,
};
use serde::{Deserialize, Serialize};

/// Inputs of a hawk-dove run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HawkDoveParameters {
    pub generations: usize,
    /// Starting hawk share, strictly inside (0, 1)
    pub initial_hawk_share: f64,
    /// V: value of the contested resource
    pub resource_value: f64,
    /// C: cost paid by the loser of an escalated fight
    pub conflict_cost: f64,
    pub mutation_rate: f64,
    pub selection_strength: f64,
}

impl Default for HawkDoveParameters {
    fn default() -> Self {
        Self {
            generations: 180,
            initial_hawk_share: 0.72,
            resource_value: 2.0,
            conflict_cost: 6.0,
            mutation_rate: 0.01,
            selection_strength: 0.5,
        }
    }
}

impl HawkDoveParameters {
    /// Longer run from a lower hawk share, used by the experiment suite
    pub fn suite() -> Self {
        Self {
            generations: 240,
            initial_hawk_share: 0.65,
            selection_strength: 0.45,
            ..Self::default()
        }
    }

    /// Resource worth more than a fight: hawks sweep the population
    pub fn cheap_conflict() -> Self {
        Self {
            resource_value: 4.0,
            conflict_cost: 2.0,
            initial_hawk_share: 0.2,
            ..Self::default()
        }
    }

    /// Hawk share at the evolutionarily stable state, `clamp(V / C, 0, 1)`
    pub fn ess_share(&self) -> f64 {
        (self.resource_value / self.conflict_cost).clamp(0.0, 1.0)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_at_least("generations", 1, self.generations)?;
        if !(self.initial_hawk_share > 0.0 && self.initial_hawk_share < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "initial_hawk_share",
                range: "(0, 1)",
                value: self.initial_hawk_share,
            });
        }
        ensure_positive("resource_value", self.resource_value)?;
        ensure_positive("conflict_cost", self.conflict_cost)?;
        ensure_mutation_rate(self.mutation_rate)?;
        ensure_selection_strength(self.selection_strength)?;
        Ok(())
    }
}
