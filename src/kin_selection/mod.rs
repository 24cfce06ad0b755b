//! Kin Selection — Hamilton's rule played out in an agent population
//!
//! Agents live in fixed-size families. Altruists pay a cost to spread a
//! benefit over their relatives; reproduction samples parents on inclusive
//! fitness, so altruism spreads whenever relatedness makes it pay.

mod agent;
mod experiment;
mod parameters;
mod simulation;

pub use agent::{KinAgent, KinStrategy};
pub use experiment::{KinSelectionExperiment, KinSelectionReport, TAKEOVER_SHARE};
pub use parameters::KinSelectionParameters;
pub use simulation::{
    play_family, GenerationStats, KinSelectionResult, KinSelectionSimulation, StrategySnapshot,
};
