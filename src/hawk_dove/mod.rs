//! Hawk-Dove — deterministic replicator-mutator dynamics over two roles
//!
//! Hawks escalate every contest, doves display and retreat. With a resource
//! worth less than the cost of a fight the population settles on a mixed
//! state near `V / C` hawks.

mod experiment;
mod parameters;
mod simulation;

pub use experiment::{HawkDoveExperiment, HawkDoveReport, ESS_TOLERANCE};
pub use parameters::HawkDoveParameters;
pub use simulation::{HawkDoveGeneration, HawkDoveResult, HawkDoveSimulation};
