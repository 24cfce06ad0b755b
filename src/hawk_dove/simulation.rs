//! Closed-form expected payoffs plus the shared replicator-mutator step

use super::parameters::HawkDoveParameters;
use crate::dynamics::ReplicatorMutator;
use crate::error::Result;
use log::{debug, info};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

const HAWK: usize = 0;
const DOVE: usize = 1;

/// Snapshot of one generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HawkDoveGeneration {
    pub generation: usize,
    pub hawk_share: f64,
    pub dove_share: f64,
    pub hawk_payoff: f64,
    pub dove_payoff: f64,
    pub average_payoff: f64,
}

/// Full trajectory, generation 0 through the final generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HawkDoveResult {
    pub generations: Vec<HawkDoveGeneration>,
}

impl HawkDoveResult {
    pub fn first(&self) -> Option<&HawkDoveGeneration> {
        self.generations.first()
    }

    pub fn last(&self) -> Option<&HawkDoveGeneration> {
        self.generations.last()
    }
}

#[derive(Debug, Clone)]
pub struct HawkDoveSimulation {
    params: HawkDoveParameters,
    /// Row player's payoff against (hawk, dove)
    payoff_matrix: Matrix2<f64>,
    dynamics: ReplicatorMutator,
}

impl HawkDoveSimulation {
    pub fn new(params: HawkDoveParameters) -> Result<Self> {
        params.validate()?;
        let v = params.resource_value;
        let c = params.conflict_cost;
        let payoff_matrix = Matrix2::new((v - c) / 2.0, v, 0.0, v / 2.0);
        let dynamics =
            ReplicatorMutator::new(params.selection_strength, params.mutation_rate).bounded();
        Ok(Self { params, payoff_matrix, dynamics })
    }

    pub fn params(&self) -> &HawkDoveParameters {
        &self.params
    }

    /// Expected payoff of (hawk, dove) against a population with `hawk_share` hawks
    pub fn expected_payoffs(&self, hawk_share: f64) -> [f64; 2] {
        let payoffs = self.payoff_matrix * Vector2::new(hawk_share, 1.0 - hawk_share);
        [payoffs[HAWK], payoffs[DOVE]]
    }

    pub fn run(&self) -> HawkDoveResult {
        let total = self.params.generations;
        info!(
            "Hawk-dove: V={} C={} | {} generations | hawks0={:.3} | k={} mu={}",
            self.params.resource_value,
            self.params.conflict_cost,
            total,
            self.params.initial_hawk_share,
            self.params.selection_strength,
            self.params.mutation_rate,
        );

        let mut shares = [self.params.initial_hawk_share, 1.0 - self.params.initial_hawk_share];
        let mut history = Vec::with_capacity(total + 1);

        for generation in 0..=total {
            let payoffs = self.expected_payoffs(shares[HAWK]);
            let average = Vector2::from(shares).dot(&Vector2::from(payoffs));

            history.push(HawkDoveGeneration {
                generation,
                hawk_share: shares[HAWK],
                dove_share: shares[DOVE],
                hawk_payoff: payoffs[HAWK],
                dove_payoff: payoffs[DOVE],
                average_payoff: average,
            });

            if generation % 20 == 0 {
                debug!("  gen {:>4}: hawks={:.4} avg={:.4}", generation, shares[HAWK], average);
            }
            if generation == total {
                break;
            }
            shares = self.dynamics.step(&shares, &payoffs, average);
        }

        info!(
            "Hawk-dove complete: final hawk share {:.4} (ESS {:.4})",
            shares[HAWK],
            self.params.ess_share()
        );
        HawkDoveResult { generations: history }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::fingerprint;
    use proptest::prelude::*;

    #[test]
    fn test_snapshot_count() {
        let sim = HawkDoveSimulation::new(HawkDoveParameters {
            generations: 10,
            ..Default::default()
        })
        .unwrap();
        let result = sim.run();
        assert_eq!(result.generations.len(), 11);
        assert_eq!(result.first().unwrap().generation, 0);
        assert_eq!(result.last().unwrap().generation, 10);
        assert_eq!(result.first().unwrap().hawk_share, 0.72);
    }

    #[test]
    fn test_expected_payoffs_closed_form() {
        let sim = HawkDoveSimulation::new(HawkDoveParameters::default()).unwrap();
        // V=2, C=6: hawk gets -2 vs hawk, 2 vs dove; dove gets 0 vs hawk, 1 vs dove
        let [hawk, dove] = sim.expected_payoffs(0.25);
        assert!((hawk - (0.25 * -2.0 + 0.75 * 2.0)).abs() < 1e-12);
        assert!((dove - 0.75).abs() < 1e-12);
        // payoffs equalise at the ESS
        let [hawk, dove] = sim.expected_payoffs(1.0 / 3.0);
        assert!((hawk - dove).abs() < 1e-12);
    }

    #[test]
    fn test_converges_near_ess() {
        let params = HawkDoveParameters::suite();
        let ess = params.ess_share();
        let result = HawkDoveSimulation::new(params).unwrap().run();
        let last = result.last().unwrap();
        assert!((last.hawk_share - ess).abs() < 0.02, "hawk share {}", last.hawk_share);
    }

    #[test]
    fn test_cheap_conflict_hawks_take_over() {
        let params = HawkDoveParameters {
            generations: 60,
            mutation_rate: 0.0,
            ..HawkDoveParameters::cheap_conflict()
        };
        let result = HawkDoveSimulation::new(params).unwrap().run();
        let last = result.last().unwrap();
        assert!(last.hawk_share > 0.999);
        assert!(last.hawk_share < 1.0);
        assert!(last.dove_share > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let a = HawkDoveSimulation::new(HawkDoveParameters::default()).unwrap().run();
        let b = HawkDoveSimulation::new(HawkDoveParameters::default()).unwrap().run();
        assert_eq!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
    }

    proptest! {
        #[test]
        fn shares_stay_on_simplex(
            hawks in 0.01f64..0.99,
            v in 0.1f64..10.0,
            c in 0.1f64..10.0,
            mu in 0.0f64..0.49,
            k in 0.05f64..1.0,
        ) {
            let params = HawkDoveParameters {
                generations: 40,
                initial_hawk_share: hawks,
                resource_value: v,
                conflict_cost: c,
                mutation_rate: mu,
                selection_strength: k,
            };
            let result = HawkDoveSimulation::new(params).unwrap().run();
            for g in &result.generations {
                prop_assert!(g.hawk_share >= 0.0 && g.dove_share >= 0.0);
                prop_assert!((g.hawk_share + g.dove_share - 1.0).abs() < 1e-6);
            }
        }
    }
}
