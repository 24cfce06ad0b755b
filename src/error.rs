//! Configuration errors shared by every engine
//!
//! All parameter validation happens before a simulation touches its
//! generator, so these are the only failures the engines can report.

/// Errors raised while building or loading simulation parameters
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be within {range} (got {value})")]
    OutOfRange {
        field: &'static str,
        range: &'static str,
        value: f64,
    },

    #[error("{field} must be at least {min} (got {value})")]
    TooSmall {
        field: &'static str,
        min: usize,
        value: usize,
    },

    #[error("total agent count must be even for pairing (got {0})")]
    OddAgentCount(usize),

    #[error("population size {population} is not divisible by family size {family_size}")]
    IndivisiblePopulation { population: usize, family_size: usize },

    #[error("initial shares must sum to {expected} (got {sum})")]
    ShareSum { expected: &'static str, sum: f64 },

    #[error("stag payoff {stag} must exceed hare payoff {hare}")]
    StagNotDominant { stag: f64, hare: f64 },

    #[error("failed stag payoff {failed} must not exceed hare payoff {hare}")]
    FailedStagAboveHare { failed: f64, hare: f64 },

    #[error("tournament needs at least one strategy")]
    NoStrategies,

    #[error("strategy listed more than once: {0}")]
    DuplicateStrategy(String),

    #[error("unknown experiment: {0}")]
    UnknownExperiment(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not serialize report: {0}")]
    Report(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Check `value > 0`
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Check `value >= 0`
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Check `value` lies in the closed unit interval
pub(crate) fn ensure_probability(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, range: "[0, 1]", value })
    }
}

/// Replicator mutation must stay below 0.5 so selection is not swamped
pub(crate) fn ensure_mutation_rate(value: f64) -> Result<()> {
    if (0.0..0.5).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field: "mutation_rate", range: "[0, 0.5)", value })
    }
}

/// Selection strength lives in (0, 1]
pub(crate) fn ensure_selection_strength(value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field: "selection_strength", range: "(0, 1]", value })
    }
}

/// Check a count reaches `min`
pub(crate) fn ensure_at_least(field: &'static str, min: usize, value: usize) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(ConfigError::TooSmall { field, min, value })
    }
}
