//! Match settings — rounds, execution noise and the R/T/P/S payoff matrix

use super::action::Action;
use crate::error::{ensure_at_least, ensure_probability, Result};
use serde::{Deserialize, Serialize};

/// Symmetric prisoner's dilemma payoffs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoffMatrix {
    /// R: both cooperate
    pub reward: f64,
    /// T: defecting against a cooperator
    pub temptation: f64,
    /// P: both defect
    pub punishment: f64,
    /// S: cooperating against a defector
    pub sucker: f64,
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self {
            reward: 3.0,
            temptation: 5.0,
            punishment: 1.0,
            sucker: 0.0,
        }
    }
}

impl PayoffMatrix {
    /// Payoffs for (a, b) given both actions
    pub fn payoff(&self, a: Action, b: Action) -> (f64, f64) {
        match (a, b) {
            (Action::Cooperate, Action::Cooperate) => (self.reward, self.reward),
            (Action::Cooperate, Action::Defect) => (self.sucker, self.temptation),
            (Action::Defect, Action::Cooperate) => (self.temptation, self.sucker),
            (Action::Defect, Action::Defect) => (self.punishment, self.punishment),
        }
    }
}

/// Settings for every match in a tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Turns per match
    pub rounds: usize,
    /// Probability that an executed action is flipped
    pub noise_probability: f64,
    pub payoffs: PayoffMatrix,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            rounds: 200,
            noise_probability: 0.015,
            payoffs: PayoffMatrix::default(),
        }
    }
}

impl MatchSettings {
    /// Noise-free settings with the classic 3/5/1/0 matrix
    pub fn noiseless(rounds: usize) -> Self {
        Self {
            rounds,
            noise_probability: 0.0,
            payoffs: PayoffMatrix::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_at_least("rounds", 1, self.rounds)?;
        ensure_probability("noise_probability", self.noise_probability)
    }
}
