use crate::error::{
    ensure_at_least, ensure_mutation_rate, ensure_non_negative, ensure_positive,
    ensure_selection_strength, ConfigError, Result,
};
use serde::{Deserialize, Serialize};

/// Inputs of a public goods run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicGoodsParameters {
    pub generations: usize,
    /// Players drawn per sampled group
    pub group_size: usize,
    /// Groups sampled per generation
    pub interactions_per_generation: usize,
    /// r: pot multiplier, must exceed 1
    pub multiplier: f64,
    /// c: paid by each cooperator into the pot
    pub contribution_cost: f64,
    /// sigma: fixed income of a loner
    pub loner_payoff: f64,
    pub mutation_rate: f64,
    pub selection_strength: f64,
    pub initial_cooperator_share: f64,
    /// Loners take whatever the two initial shares leave over
    pub initial_defector_share: f64,
    pub seed: u64,
}

impl Default for PublicGoodsParameters {
    fn default() -> Self {
        Self {
            generations: 220,
            group_size: 5,
            interactions_per_generation: 6000,
            multiplier: 3.2,
            contribution_cost: 1.0,
            loner_payoff: 1.2,
            mutation_rate: 0.02,
            selection_strength: 0.4,
            initial_cooperator_share: 0.52,
            initial_defector_share: 0.33,
            seed: 2025,
        }
    }
}

impl PublicGoodsParameters {
    /// Settings of the full experiment suite
    pub fn suite() -> Self {
        Self {
            generations: 250,
            interactions_per_generation: 8000,
            multiplier: 3.0,
            mutation_rate: 0.015,
            selection_strength: 0.45,
            initial_cooperator_share: 0.5,
            initial_defector_share: 0.35,
            seed: 2026,
            ..Self::default()
        }
    }

    /// Small, fast run for smoke tests and benches
    pub fn quick() -> Self {
        Self {
            generations: 40,
            interactions_per_generation: 800,
            ..Self::default()
        }
    }

    pub fn initial_loner_share(&self) -> f64 {
        (1.0 - self.initial_cooperator_share - self.initial_defector_share).max(0.0)
    }

    pub fn initial_shares(&self) -> [f64; 3] {
        [self.initial_cooperator_share, self.initial_defector_share, self.initial_loner_share()]
    }

    pub fn validate(&self) -> Result<()> {
        ensure_at_least("generations", 1, self.generations)?;
        ensure_at_least("group_size", 2, self.group_size)?;
        ensure_at_least("interactions_per_generation", 1, self.interactions_per_generation)?;
        if !(self.multiplier > 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "multiplier",
                range: "(1, inf)",
                value: self.multiplier,
            });
        }
        ensure_positive("contribution_cost", self.contribution_cost)?;
        ensure_non_negative("loner_payoff", self.loner_payoff)?;
        ensure_mutation_rate(self.mutation_rate)?;
        ensure_selection_strength(self.selection_strength)?;
        ensure_non_negative("initial_cooperator_share", self.initial_cooperator_share)?;
        ensure_non_negative("initial_defector_share", self.initial_defector_share)?;
        let sum = self.initial_cooperator_share + self.initial_defector_share;
        if sum > 1.0 {
            return Err(ConfigError::ShareSum { expected: "at most 1", sum });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_valid() {
        assert!(PublicGoodsParameters::default().validate().is_ok());
        assert!(PublicGoodsParameters::suite().validate().is_ok());
        assert!(PublicGoodsParameters::quick().validate().is_ok());
    }

    #[test]
    fn test_loner_share_is_remainder() {
        let params = PublicGoodsParameters::default();
        assert!((params.initial_loner_share() - 0.15).abs() < 1e-12);
        let shares = params.initial_shares();
        assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_overfull_shares() {
        let params = PublicGoodsParameters {
            initial_cooperator_share: 0.7,
            initial_defector_share: 0.4,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::ShareSum { .. })));
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            PublicGoodsParameters { group_size: 1, ..Default::default() },
            PublicGoodsParameters { multiplier: 1.0, ..Default::default() },
            PublicGoodsParameters { contribution_cost: 0.0, ..Default::default() },
            PublicGoodsParameters { loner_payoff: -0.1, ..Default::default() },
            PublicGoodsParameters { interactions_per_generation: 0, ..Default::default() },
            PublicGoodsParameters { initial_defector_share: -0.1, ..Default::default() },
        ];
        for params in bad {
            assert!(params.validate().is_err(), "{:?}", params);
        }
    }
}
