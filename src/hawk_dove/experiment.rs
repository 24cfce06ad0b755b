use super::parameters::HawkDoveParameters;
use super::simulation::{HawkDoveResult, HawkDoveSimulation};
use crate::error::Result;
use crate::experiment::{first_generation, generation_label, percent, Experiment, ExperimentReport};
use crate::fingerprint::fingerprint;
use serde::Serialize;

/// Half-width of the window around the ESS that counts as stabilized
pub const ESS_TOLERANCE: f64 = 0.02;

#[derive(Debug, Clone)]
pub struct HawkDoveExperiment {
    simulation: HawkDoveSimulation,
}

impl HawkDoveExperiment {
    pub fn new(params: HawkDoveParameters) -> Result<Self> {
        Ok(Self { simulation: HawkDoveSimulation::new(params)? })
    }
}

impl Experiment for HawkDoveExperiment {
    type Report = HawkDoveReport;

    fn id(&self) -> &'static str {
        "hawk-dove"
    }

    fn display_name(&self) -> &'static str {
        "Hawk-Dove Conflict"
    }

    fn run(&self) -> HawkDoveReport {
        let params = self.simulation.params().clone();
        let result = self.simulation.run();
        let ess_share = params.ess_share();
        let stabilization_generation = first_generation(
            &result.generations,
            |g| g.generation,
            |g| (g.hawk_share - ess_share).abs() <= ESS_TOLERANCE,
        );
        HawkDoveReport { params, result, ess_share, stabilization_generation }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HawkDoveReport {
    pub params: HawkDoveParameters,
    pub result: HawkDoveResult,
    pub ess_share: f64,
    /// First generation within [`ESS_TOLERANCE`] of the ESS
    pub stabilization_generation: Option<usize>,
}

impl ExperimentReport for HawkDoveReport {
    fn section_title(&self) -> &'static str {
        "Hawk-Dove: a mixed equilibrium under resource conflict"
    }

    fn summary_lines(&self) -> Vec<String> {
        let p = &self.params;
        let (Some(first), Some(last)) = (self.result.first(), self.result.last()) else {
            return Vec::new();
        };
        vec![
            format!(
                "Setup: V={:.1}, C={:.1}, initial hawks {:.1}%, selection {:.2}, mutation {:.2}; theoretical hawk equilibrium V/C={:.1}%.",
                p.resource_value,
                p.conflict_cost,
                percent(first.hawk_share),
                p.selection_strength,
                p.mutation_rate,
                percent(self.ess_share),
            ),
            format!(
                "Dynamics: hawks {:.1}% -> {:.1}% by generation {}, doves {:.1}% -> {:.1}%, average payoff {:.2} -> {:.2}.",
                percent(first.hawk_share),
                percent(last.hawk_share),
                last.generation,
                percent(first.dove_share),
                percent(last.dove_share),
                first.average_payoff,
                last.average_payoff,
            ),
            format!(
                "Entered the ±{:.0}% equilibrium window at {}.",
                percent(ESS_TOLERANCE),
                generation_label(self.stabilization_generation),
            ),
            format!(
                "Hawk meets hawk: {:.2}; hawk meets dove: {:.2}.",
                (p.resource_value - p.conflict_cost) / 2.0,
                p.resource_value,
            ),
        ]
    }

    fn history_fingerprint(&self) -> std::result::Result<String, serde_json::Error> {
        fingerprint(&self.result.generations)
    }
}
