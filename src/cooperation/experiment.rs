use super::result::TournamentResult;
use super::tournament::{CooperationTournament, TournamentConfig};
use crate::error::Result;
use crate::experiment::{percent, Experiment, ExperimentReport};
use crate::fingerprint::fingerprint;
use serde::Serialize;

/// Repeated prisoner's dilemma tournament experiment
#[derive(Debug, Clone)]
pub struct CooperationExperiment {
    tournament: CooperationTournament,
}

impl CooperationExperiment {
    pub fn new(config: TournamentConfig) -> Result<Self> {
        Ok(Self {
            tournament: CooperationTournament::new(config)?,
        })
    }

    pub fn config(&self) -> &TournamentConfig {
        self.tournament.config()
    }
}

impl Experiment for CooperationExperiment {
    type Report = CooperationReport;

    fn id(&self) -> &'static str {
        "cooperation-tournament"
    }

    fn display_name(&self) -> &'static str {
        "Cooperation Tournament"
    }

    fn run(&self) -> CooperationReport {
        CooperationReport {
            config: self.config().clone(),
            result: self.tournament.run(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CooperationReport {
    pub config: TournamentConfig,
    pub result: TournamentResult,
}

impl ExperimentReport for CooperationReport {
    fn section_title(&self) -> &'static str {
        "The Evolution of Cooperation: an iterated prisoner's dilemma tournament"
    }

    fn summary_lines(&self) -> Vec<String> {
        let settings = &self.config.settings;
        let p = &settings.payoffs;
        let mut lines = vec![format!(
            "Setup: {} turns per match with {:.1}% execution noise, R={} T={} P={} S={}; {} agents per strategy, {} random pairing rounds.",
            settings.rounds,
            percent(settings.noise_probability),
            p.reward,
            p.temptation,
            p.punishment,
            p.sucker,
            self.config.agents_per_strategy,
            self.config.encounter_rounds,
        )];

        for (rank, perf) in self.result.strategy_performances.iter().enumerate() {
            lines.push(format!(
                "{}. {}: mean {:.1} ({:.2}/turn), cooperation {:.1}%, mutual cooperation {:.1}%, best {:.0}, worst {:.0}, sd {:.1}",
                rank + 1,
                perf.strategy.display_name(),
                perf.stats.mean_score,
                perf.stats.mean_score_per_round,
                percent(perf.stats.mean_cooperation_rate),
                percent(perf.stats.mean_mutual_cooperation_rate),
                perf.stats.best_match_score,
                perf.stats.worst_match_score,
                perf.stats.score_std_dev,
            ));
        }

        if let Some(top) = self.result.top_agent() {
            lines.push(format!(
                "Top agent: {} with mean {:.1} over {} matches.",
                top.agent_id, top.stats.mean_score, top.stats.matches
            ));
        }
        lines
    }

    fn history_fingerprint(&self) -> std::result::Result<String, serde_json::Error> {
        fingerprint(&self.result.match_outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cooperation::MatchSettings;

    #[test]
    fn test_report_lists_every_strategy() {
        let experiment = CooperationExperiment::new(TournamentConfig {
            agents_per_strategy: 2,
            encounter_rounds: 2,
            settings: MatchSettings { rounds: 10, ..MatchSettings::default() },
            ..TournamentConfig::default()
        })
        .unwrap();
        assert_eq!(experiment.id(), "cooperation-tournament");
        let report = experiment.run();
        // setup line + 8 strategies + top agent
        assert_eq!(report.summary_lines().len(), 10);
        assert!(report.history_fingerprint().is_ok());
    }
}
