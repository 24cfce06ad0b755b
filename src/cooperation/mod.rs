//! Cooperation — agent-based iterated prisoner's dilemma tournament
//!
//! Agents carry a fixed strategy and a running score accumulator; random
//! pairings each round guarantee equal match counts, and execution noise
//! turns clean strategies into realistic, error-prone players.

mod action;
mod experiment;
mod result;
mod settings;
mod strategy;
mod tournament;

pub use action::Action;
pub use experiment::{CooperationExperiment, CooperationReport};
pub use result::{AgentPerformance, MatchOutcome, StrategyPerformance, TournamentResult};
pub use settings::{MatchSettings, PayoffMatrix};
pub use strategy::{CooperationStrategy, DecisionRule, FORGIVE_PROBABILITY, RANDOM_COOPERATION};
pub use tournament::{play_match, CooperationTournament, MatchPlay, TournamentConfig};
