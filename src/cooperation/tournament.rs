//! Repeated prisoner's dilemma tournament
//!
//! Every outer round shuffles all agents and pairs neighbours, so each agent
//! plays exactly one match per round regardless of strategy. Matches are a
//! fixed number of turns with execution noise applied after each decision.

use super::action::Action;
use super::result::{
    sort_by_mean_score, AgentPerformance, MatchOutcome, StrategyPerformance, TournamentResult,
};
use super::settings::MatchSettings;
use super::strategy::CooperationStrategy;
use crate::error::{ensure_at_least, ConfigError, Result};
use crate::rng::{chance, seeded, SimRng};
use crate::stats::ScoreAccumulator;
use log::{debug, info};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Full configuration of a tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub settings: MatchSettings,
    pub strategies: Vec<CooperationStrategy>,
    pub seed: u64,
    pub agents_per_strategy: usize,
    pub encounter_rounds: usize,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            settings: MatchSettings::default(),
            strategies: CooperationStrategy::ALL.to_vec(),
            seed: 2025,
            agents_per_strategy: 12,
            encounter_rounds: 30,
        }
    }
}

impl TournamentConfig {
    pub fn total_agents(&self) -> usize {
        self.agents_per_strategy * self.strategies.len()
    }

    pub fn validate(&self) -> Result<()> {
        self.settings.validate()?;
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        for (i, strategy) in self.strategies.iter().enumerate() {
            if self.strategies[..i].contains(strategy) {
                return Err(ConfigError::DuplicateStrategy(strategy.display_name().to_string()));
            }
        }
        ensure_at_least("agents_per_strategy", 1, self.agents_per_strategy)?;
        ensure_at_least("encounter_rounds", 1, self.encounter_rounds)?;
        let total = self.total_agents();
        if total % 2 != 0 {
            return Err(ConfigError::OddAgentCount(total));
        }
        Ok(())
    }
}

/// A tournament agent and its running totals
#[derive(Debug)]
struct Participant {
    id: String,
    strategy: CooperationStrategy,
    strategy_index: usize,
    accumulator: ScoreAccumulator,
}

/// Realized play of one match, before it is folded into accumulators
#[derive(Debug, Clone)]
pub struct MatchPlay {
    pub history_a: Vec<Action>,
    pub history_b: Vec<Action>,
    pub score_a: f64,
    pub score_b: f64,
    pub cooperation_rate_a: f64,
    pub cooperation_rate_b: f64,
    pub mutual_cooperation_rate: f64,
}

/// Play `settings.rounds` turns between two strategies.
///
/// Draw order per turn: A decides, B decides, A's noise draw, B's noise draw.
pub fn play_match(
    settings: &MatchSettings,
    strategy_a: CooperationStrategy,
    strategy_b: CooperationStrategy,
    rng: &mut SimRng,
) -> MatchPlay {
    let mut history_a = Vec::with_capacity(settings.rounds);
    let mut history_b = Vec::with_capacity(settings.rounds);
    let mut score_a = 0.0;
    let mut score_b = 0.0;
    let mut cooperations_a = 0usize;
    let mut cooperations_b = 0usize;
    let mut mutual = 0usize;

    for round in 0..settings.rounds {
        let intended_a = strategy_a.decide(round, &history_a, &history_b, rng);
        let intended_b = strategy_b.decide(round, &history_b, &history_a, rng);
        let action_a = apply_noise(intended_a, settings.noise_probability, rng);
        let action_b = apply_noise(intended_b, settings.noise_probability, rng);

        history_a.push(action_a);
        history_b.push(action_b);

        let (pa, pb) = settings.payoffs.payoff(action_a, action_b);
        score_a += pa;
        score_b += pb;

        if action_a.is_cooperate() {
            cooperations_a += 1;
        }
        if action_b.is_cooperate() {
            cooperations_b += 1;
        }
        if action_a.is_cooperate() && action_b.is_cooperate() {
            mutual += 1;
        }
    }

    let rounds = settings.rounds as f64;
    MatchPlay {
        history_a,
        history_b,
        score_a,
        score_b,
        cooperation_rate_a: cooperations_a as f64 / rounds,
        cooperation_rate_b: cooperations_b as f64 / rounds,
        mutual_cooperation_rate: mutual as f64 / rounds,
    }
}

fn apply_noise(action: Action, noise: f64, rng: &mut SimRng) -> Action {
    if chance(rng, noise) {
        action.opposite()
    } else {
        action
    }
}

/// Validated tournament, ready to run
#[derive(Debug, Clone)]
pub struct CooperationTournament {
    config: TournamentConfig,
}

impl CooperationTournament {
    pub fn new(config: TournamentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Run the tournament from a fresh generator seeded with `config.seed`
    pub fn run(&self) -> TournamentResult {
        let config = &self.config;
        let mut rng = seeded(config.seed);
        let mut participants = self.create_participants();
        let mut strategy_totals = vec![ScoreAccumulator::default(); config.strategies.len()];
        let mut outcomes = Vec::with_capacity(config.encounter_rounds * participants.len() / 2);

        info!(
            "Tournament: {} strategies x {} agents | {} encounter rounds | {} turns/match | noise={:.3} | seed={}",
            config.strategies.len(),
            config.agents_per_strategy,
            config.encounter_rounds,
            config.settings.rounds,
            config.settings.noise_probability,
            config.seed,
        );

        for round in 0..config.encounter_rounds {
            participants.shuffle(&mut rng);
            for pair in participants.chunks_exact_mut(2) {
                let (left, right) = pair.split_at_mut(1);
                let (a, b) = (&mut left[0], &mut right[0]);
                let play = play_match(&config.settings, a.strategy, b.strategy, &mut rng);

                a.accumulator.add(play.score_a, play.cooperation_rate_a, play.mutual_cooperation_rate);
                b.accumulator.add(play.score_b, play.cooperation_rate_b, play.mutual_cooperation_rate);
                strategy_totals[a.strategy_index].add(
                    play.score_a,
                    play.cooperation_rate_a,
                    play.mutual_cooperation_rate,
                );
                strategy_totals[b.strategy_index].add(
                    play.score_b,
                    play.cooperation_rate_b,
                    play.mutual_cooperation_rate,
                );

                outcomes.push(MatchOutcome {
                    participant_a: a.id.clone(),
                    participant_b: b.id.clone(),
                    strategy_a: a.strategy,
                    strategy_b: b.strategy,
                    score_a: play.score_a,
                    score_b: play.score_b,
                    cooperation_rate_a: play.cooperation_rate_a,
                    cooperation_rate_b: play.cooperation_rate_b,
                    mutual_cooperation_rate: play.mutual_cooperation_rate,
                });
            }
            debug!("  encounter round {:>3} done ({} matches so far)", round, outcomes.len());
        }

        let rounds = config.settings.rounds;
        let mut agent_performances: Vec<AgentPerformance> = participants
            .iter()
            .map(|p| AgentPerformance {
                agent_id: p.id.clone(),
                strategy: p.strategy,
                stats: p.accumulator.summarize(rounds),
            })
            .collect();
        sort_by_mean_score(&mut agent_performances, |p| &p.stats);

        let mut strategy_performances: Vec<StrategyPerformance> = config
            .strategies
            .iter()
            .zip(&strategy_totals)
            .map(|(&strategy, totals)| StrategyPerformance {
                strategy,
                agents: config.agents_per_strategy,
                stats: totals.summarize(rounds),
            })
            .collect();
        sort_by_mean_score(&mut strategy_performances, |p| &p.stats);

        if let Some(top) = strategy_performances.first() {
            info!(
                "Tournament complete: {} matches | top strategy '{}' mean={:.2} coop={:.3}",
                outcomes.len(),
                top.strategy.display_name(),
                top.stats.mean_score,
                top.stats.mean_cooperation_rate,
            );
        }

        TournamentResult {
            agent_performances,
            strategy_performances,
            match_outcomes: outcomes,
            rounds_per_match: rounds,
        }
    }

    fn create_participants(&self) -> Vec<Participant> {
        let config = &self.config;
        let mut participants = Vec::with_capacity(config.total_agents());
        for (strategy_index, &strategy) in config.strategies.iter().enumerate() {
            for i in 0..config.agents_per_strategy {
                participants.push(Participant {
                    id: format!("{}#{}", strategy.display_name(), i + 1),
                    strategy,
                    strategy_index,
                    accumulator: ScoreAccumulator::default(),
                });
            }
        }
        participants
    }
}
