use super::parameters::PublicGoodsParameters;
use super::simulation::{PublicGoodsGeneration, PublicGoodsResult, PublicGoodsSimulation};
use crate::error::Result;
use crate::experiment::{
    first_generation, generation_label, peak_by, percent, Experiment, ExperimentReport,
};
use crate::fingerprint::fingerprint;
use serde::Serialize;

/// Defector share at or below which free riding counts as suppressed
pub const DEFECTOR_COLLAPSE_SHARE: f64 = 0.2;

#[derive(Debug, Clone)]
pub struct PublicGoodsExperiment {
    simulation: PublicGoodsSimulation,
}

impl PublicGoodsExperiment {
    pub fn new(params: PublicGoodsParameters) -> Result<Self> {
        Ok(Self { simulation: PublicGoodsSimulation::new(params)? })
    }
}

impl Experiment for PublicGoodsExperiment {
    type Report = PublicGoodsReport;

    fn id(&self) -> &'static str {
        "public-goods"
    }

    fn display_name(&self) -> &'static str {
        "Voluntary Public Goods"
    }

    fn run(&self) -> PublicGoodsReport {
        let result = self.simulation.run();
        let peak_cooperation = peak_by(&result.generations, |g| g.cooperator_share).cloned();
        let suppression_generation = first_generation(
            &result.generations,
            |g| g.generation,
            |g| g.defector_share <= DEFECTOR_COLLAPSE_SHARE,
        );
        PublicGoodsReport {
            params: self.simulation.params().clone(),
            result,
            peak_cooperation,
            suppression_generation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicGoodsReport {
    pub params: PublicGoodsParameters,
    pub result: PublicGoodsResult,
    /// Generation with the highest cooperator share (earliest on ties)
    pub peak_cooperation: Option<PublicGoodsGeneration>,
    /// First generation with defector share at or below [`DEFECTOR_COLLAPSE_SHARE`]
    pub suppression_generation: Option<usize>,
}

impl ExperimentReport for PublicGoodsReport {
    fn section_title(&self) -> &'static str {
        "Public Goods: cooperation, free riding and opting out"
    }

    fn summary_lines(&self) -> Vec<String> {
        let p = &self.params;
        let (Some(first), Some(last), Some(peak)) =
            (self.result.first(), self.result.last(), self.peak_cooperation.as_ref())
        else {
            return Vec::new();
        };
        vec![
            format!(
                "Setup: groups of {}, multiplier r={:.1}, contribution {:.1}, loner payoff {:.1}; initial shares cooperators {:.1}%, free riders {:.1}%, loners {:.1}%; selection {:.2}, mutation {:.3}.",
                p.group_size,
                p.multiplier,
                p.contribution_cost,
                p.loner_payoff,
                percent(p.initial_cooperator_share),
                percent(p.initial_defector_share),
                percent(p.initial_loner_share()),
                p.selection_strength,
                p.mutation_rate,
            ),
            format!(
                "Dynamics: population payoff {:.2} -> {:.2}; cooperators {:.1}% -> {:.1}%, free riders end at {:.1}%, loners at {:.1}%.",
                first.population_payoff,
                last.population_payoff,
                percent(first.cooperator_share),
                percent(last.cooperator_share),
                percent(last.defector_share),
                percent(last.loner_share),
            ),
            format!(
                "Peak cooperation at generation {} ({:.1}%); free riders first at or below {:.0}% at {}.",
                peak.generation,
                percent(peak.cooperator_share),
                percent(DEFECTOR_COLLAPSE_SHARE),
                generation_label(self.suppression_generation),
            ),
            format!(
                "Final payoffs: cooperator {:.2}, free rider {:.2}, loner {:.2}.",
                last.cooperator_payoff, last.defector_payoff, last.loner_payoff,
            ),
        ]
    }

    fn history_fingerprint(&self) -> std::result::Result<String, serde_json::Error> {
        fingerprint(&self.result.generations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_consistent_with_history() {
        let report = PublicGoodsExperiment::new(PublicGoodsParameters::quick()).unwrap().run();
        let peak = report.peak_cooperation.as_ref().unwrap();
        assert!(report
            .result
            .generations
            .iter()
            .all(|g| g.cooperator_share <= peak.cooperator_share));
        if let Some(generation) = report.suppression_generation {
            assert!(report.result.generations[generation].defector_share <= DEFECTOR_COLLAPSE_SHARE);
        }
        assert_eq!(report.summary_lines().len(), 4);
    }
}
