use super::parameters::StagHuntParameters;
use super::simulation::{StagHuntGeneration, StagHuntResult, StagHuntSimulation};
use crate::error::Result;
use crate::experiment::{
    first_generation, generation_label, peak_by, percent, Experiment, ExperimentReport,
};
use crate::fingerprint::fingerprint;
use serde::Serialize;

/// Signaler share that marks the signaling breakthrough
pub const BREAKTHROUGH_SHARE: f64 = 0.25;
/// Stag conversion rate that marks the coordination flip
pub const COORDINATION_FLIP_RATE: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct StagHuntExperiment {
    simulation: StagHuntSimulation,
}

impl StagHuntExperiment {
    pub fn new(params: StagHuntParameters) -> Result<Self> {
        Ok(Self { simulation: StagHuntSimulation::new(params)? })
    }
}

impl Experiment for StagHuntExperiment {
    type Report = StagHuntReport;

    fn id(&self) -> &'static str {
        "stag-hunt-signal"
    }

    fn display_name(&self) -> &'static str {
        "Stag Hunt with Signals"
    }

    fn run(&self) -> StagHuntReport {
        let result = self.simulation.run();
        let peak_coordination = peak_by(&result.generations, |g| g.stag_success_rate).cloned();
        let breakthrough_generation = first_generation(
            &result.generations,
            |g| g.generation,
            |g| g.signaler_share >= BREAKTHROUGH_SHARE,
        );
        let coordination_flip_generation = first_generation(
            &result.generations,
            |g| g.generation,
            |g| g.stag_conversion_rate >= COORDINATION_FLIP_RATE,
        );
        StagHuntReport {
            params: self.simulation.params().clone(),
            result,
            peak_coordination,
            breakthrough_generation,
            coordination_flip_generation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StagHuntReport {
    pub params: StagHuntParameters,
    pub result: StagHuntResult,
    /// Generation with the highest stag success rate
    pub peak_coordination: Option<StagHuntGeneration>,
    pub breakthrough_generation: Option<usize>,
    pub coordination_flip_generation: Option<usize>,
}

impl ExperimentReport for StagHuntReport {
    fn section_title(&self) -> &'static str {
        "Stag Hunt: costly signals and the path to coordination"
    }

    fn summary_lines(&self) -> Vec<String> {
        let p = &self.params;
        let (Some(first), Some(last), Some(peak)) =
            (self.result.first(), self.result.last(), self.peak_coordination.as_ref())
        else {
            return Vec::new();
        };
        vec![
            format!(
                "Setup: stag {:.1}, hare {:.1}, failed stag {:.1}, signal cost {:.1}; initial signalers {:.1}%, followers {:.1}%, loners {:.1}%; {} pairs per generation, selection {:.2}, mutation {:.3}.",
                p.stag_payoff,
                p.hare_payoff,
                p.failed_stag_payoff,
                p.signal_cost,
                percent(p.initial_signaler_share),
                percent(p.initial_follower_share),
                percent(p.initial_loner_share),
                p.interactions_per_generation,
                p.selection_strength,
                p.mutation_rate,
            ),
            format!(
                "Dynamics: signalers {:.1}% -> {:.1}%, followers {:.1}% -> {:.1}%, loners {:.1}% -> {:.1}%; population payoff {:.2} -> {:.2}.",
                percent(first.signaler_share),
                percent(last.signaler_share),
                percent(first.follower_share),
                percent(last.follower_share),
                percent(first.loner_share),
                percent(last.loner_share),
                first.population_payoff,
                last.population_payoff,
            ),
            format!(
                "Coordination: stag success {:.1}% -> {:.1}%, signal activation {:.1}% -> {:.1}%, peak success {:.1}% at generation {}.",
                percent(first.stag_success_rate),
                percent(last.stag_success_rate),
                percent(first.signal_activation_rate),
                percent(last.signal_activation_rate),
                percent(peak.stag_success_rate),
                peak.generation,
            ),
            format!(
                "Signalers reached {:.0}% at {}; stag conversion reached {:.0}% at {}.",
                percent(BREAKTHROUGH_SHARE),
                generation_label(self.breakthrough_generation),
                percent(COORDINATION_FLIP_RATE),
                generation_label(self.coordination_flip_generation),
            ),
        ]
    }

    fn history_fingerprint(&self) -> std::result::Result<String, serde_json::Error> {
        fingerprint(&self.result.generations)
    }
}
