use crate::error::{
    ensure_at_least, ensure_mutation_rate, ensure_non_negative, ensure_positive,
    ensure_selection_strength, ConfigError, Result,
};
use serde::{Deserialize, Serialize};

/// Allowed drift of the initial shares from summing to one
pub const SHARE_TOLERANCE: f64 = 1.0e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagHuntParameters {
    pub generations: usize,
    /// Pairs sampled per generation
    pub interactions_per_generation: usize,
    pub selection_strength: f64,
    pub mutation_rate: f64,
    /// Each partner's payoff when both hunt stag
    pub stag_payoff: f64,
    /// Safe payoff of hunting hare
    pub hare_payoff: f64,
    /// Payoff of hunting stag alone
    pub failed_stag_payoff: f64,
    /// Paid by a signaler every encounter
    pub signal_cost: f64,
    pub initial_signaler_share: f64,
    pub initial_follower_share: f64,
    pub initial_loner_share: f64,
    pub seed: u64,
}

impl Default for StagHuntParameters {
    fn default() -> Self {
        Self {
            generations: 240,
            interactions_per_generation: 7500,
            selection_strength: 0.72,
            mutation_rate: 0.018,
            stag_payoff: 5.0,
            hare_payoff: 2.0,
            failed_stag_payoff: 0.0,
            signal_cost: 0.8,
            initial_signaler_share: 0.12,
            initial_follower_share: 0.58,
            initial_loner_share: 0.30,
            seed: 2028,
        }
    }
}

impl StagHuntParameters {
    /// Shorter run with the same payoffs
    pub fn quick() -> Self {
        Self {
            generations: 120,
            interactions_per_generation: 2000,
            ..Self::default()
        }
    }

    /// Signals too expensive to pay off
    pub fn costly_signals() -> Self {
        Self { signal_cost: 2.5, ..Self::default() }
    }

    pub fn initial_shares(&self) -> [f64; 3] {
        [self.initial_signaler_share, self.initial_follower_share, self.initial_loner_share]
    }

    pub fn validate(&self) -> Result<()> {
        ensure_at_least("generations", 1, self.generations)?;
        ensure_at_least("interactions_per_generation", 1, self.interactions_per_generation)?;
        ensure_selection_strength(self.selection_strength)?;
        ensure_mutation_rate(self.mutation_rate)?;
        if !(self.stag_payoff > self.hare_payoff) {
            return Err(ConfigError::StagNotDominant {
                stag: self.stag_payoff,
                hare: self.hare_payoff,
            });
        }
        ensure_positive("hare_payoff", self.hare_payoff)?;
        if self.failed_stag_payoff > self.hare_payoff {
            return Err(ConfigError::FailedStagAboveHare {
                failed: self.failed_stag_payoff,
                hare: self.hare_payoff,
            });
        }
        ensure_non_negative("signal_cost", self.signal_cost)?;
        ensure_non_negative("initial_signaler_share", self.initial_signaler_share)?;
        ensure_non_negative("initial_follower_share", self.initial_follower_share)?;
        ensure_non_negative("initial_loner_share", self.initial_loner_share)?;
        let sum: f64 = self.initial_shares().iter().sum();
        if (sum - 1.0).abs() > SHARE_TOLERANCE {
            return Err(ConfigError::ShareSum { expected: "1", sum });
        }
        Ok(())
    }
}
