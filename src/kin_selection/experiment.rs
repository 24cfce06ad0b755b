use super::agent::KinStrategy;
use super::parameters::KinSelectionParameters;
use super::simulation::{KinSelectionResult, KinSelectionSimulation};
use crate::error::Result;
use crate::experiment::{first_generation, generation_label, percent, Experiment, ExperimentReport};
use crate::fingerprint::fingerprint;
use serde::Serialize;

/// Altruist share that counts as having taken over the population
pub const TAKEOVER_SHARE: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct KinSelectionExperiment {
    simulation: KinSelectionSimulation,
}

impl KinSelectionExperiment {
    pub fn new(params: KinSelectionParameters, seed: u64) -> Result<Self> {
        Ok(Self { simulation: KinSelectionSimulation::new(params, seed)? })
    }
}

impl Experiment for KinSelectionExperiment {
    type Report = KinSelectionReport;

    fn id(&self) -> &'static str {
        "kin-selection"
    }

    fn display_name(&self) -> &'static str {
        "Kin Selection"
    }

    fn run(&self) -> KinSelectionReport {
        let result = self.simulation.run();
        let takeover_generation = first_generation(
            &result.generations,
            |g| g.generation,
            |g| g.share(KinStrategy::Altruist) >= TAKEOVER_SHARE,
        );

        let (mut inclusive_advantage, mut direct_penalty) = (0.0, 0.0);
        if let Some(last) = result.last() {
            if let (Some(a), Some(s)) =
                (last.snapshot(KinStrategy::Altruist), last.snapshot(KinStrategy::Selfish))
            {
                inclusive_advantage = a.average_inclusive_fitness - s.average_inclusive_fitness;
                direct_penalty = a.average_direct_fitness - s.average_direct_fitness;
            }
        }

        KinSelectionReport {
            params: self.simulation.params().clone(),
            seed: self.simulation.seed(),
            result,
            takeover_generation,
            inclusive_advantage,
            direct_penalty,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KinSelectionReport {
    pub params: KinSelectionParameters,
    pub seed: u64,
    pub result: KinSelectionResult,
    /// First generation with altruist share at or above [`TAKEOVER_SHARE`]
    pub takeover_generation: Option<usize>,
    /// Final altruist minus selfish mean inclusive fitness
    pub inclusive_advantage: f64,
    /// Final altruist minus selfish mean direct fitness
    pub direct_penalty: f64,
}

impl ExperimentReport for KinSelectionReport {
    fn section_title(&self) -> &'static str {
        "Kin Selection: when helping relatives pays"
    }

    fn summary_lines(&self) -> Vec<String> {
        let p = &self.params;
        let (Some(first), Some(last)) = (self.result.first(), self.result.last()) else {
            return Vec::new();
        };
        let hamilton = if p.satisfies_hamilton() { "holds" } else { "fails" };
        vec![
            format!(
                "Setup: {} agents in families of {}, b={:.1}, c={:.1}, r={:.2}, mutation {:.2}, seed {}; Hamilton's rule rb > c {} ({:.2} vs {:.2}).",
                p.population_size,
                p.family_size,
                p.benefit,
                p.cost,
                p.relatedness,
                p.mutation_rate,
                self.seed,
                hamilton,
                p.relatedness * p.benefit,
                p.cost,
            ),
            format!(
                "Dynamics: altruists {:.1}% at generation {} -> {:.1}% at generation {}; reached {:.0}% at {}.",
                percent(first.share(KinStrategy::Altruist)),
                first.generation,
                percent(last.share(KinStrategy::Altruist)),
                last.generation,
                percent(TAKEOVER_SHARE),
                generation_label(self.takeover_generation),
            ),
            format!(
                "Final fitness gap (altruist - selfish): inclusive {:+.2}, direct {:+.2}.",
                self.inclusive_advantage, self.direct_penalty,
            ),
        ]
    }

    fn history_fingerprint(&self) -> std::result::Result<String, serde_json::Error> {
        fingerprint(&self.result.generations)
    }
}
