//! Stag Hunt with costly signals — coordination bootstrapped by signalers
//!
//! Signalers always hunt stag and pay to announce it, followers join a
//! stag hunt only when their partner signals, loners always take the hare.
//! Payoffs are estimated each generation from sampled pairs.

mod experiment;
mod parameters;
mod simulation;
mod strategy;

pub use experiment::{StagHuntExperiment, StagHuntReport, BREAKTHROUGH_SHARE, COORDINATION_FLIP_RATE};
pub use parameters::StagHuntParameters;
pub use simulation::{Encounter, StagHuntGeneration, StagHuntResult, StagHuntSimulation};
pub use strategy::StagHuntStrategy;
