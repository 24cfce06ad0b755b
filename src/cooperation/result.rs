//! Tournament output records
//!
//! Everything here is produced once by a tournament run and only read
//! afterwards by reporting code.

use super::strategy::CooperationStrategy;
use crate::stats::PerformanceStats;
use serde::{Deserialize, Serialize};

/// One pairwise match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub participant_a: String,
    pub participant_b: String,
    pub strategy_a: CooperationStrategy,
    pub strategy_b: CooperationStrategy,
    pub score_a: f64,
    pub score_b: f64,
    pub cooperation_rate_a: f64,
    pub cooperation_rate_b: f64,
    pub mutual_cooperation_rate: f64,
}

/// Final record of a single agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPerformance {
    /// `"<strategy display name>#<index>"`
    pub agent_id: String,
    pub strategy: CooperationStrategy,
    pub stats: PerformanceStats,
}

/// Aggregate over every agent playing a strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyPerformance {
    pub strategy: CooperationStrategy,
    pub agents: usize,
    pub stats: PerformanceStats,
}

/// Result of a tournament run: leaderboards plus the full match log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResult {
    /// Sorted by descending mean score
    pub agent_performances: Vec<AgentPerformance>,
    /// Sorted by descending mean score
    pub strategy_performances: Vec<StrategyPerformance>,
    /// In play order
    pub match_outcomes: Vec<MatchOutcome>,
    pub rounds_per_match: usize,
}

impl TournamentResult {
    pub fn top_agent(&self) -> Option<&AgentPerformance> {
        self.agent_performances.first()
    }

    pub fn top_strategy(&self) -> Option<&StrategyPerformance> {
        self.strategy_performances.first()
    }

    pub fn strategy(&self, strategy: CooperationStrategy) -> Option<&StrategyPerformance> {
        self.strategy_performances.iter().find(|p| p.strategy == strategy)
    }
}

/// Stable sort, highest mean score first
pub(crate) fn sort_by_mean_score<T>(items: &mut [T], stats: impl Fn(&T) -> &PerformanceStats) {
    items.sort_by(|a, b| stats(b).mean_score.total_cmp(&stats(a).mean_score));
}
