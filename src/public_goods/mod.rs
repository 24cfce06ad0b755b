//! Public Goods — voluntary participation with cooperators, free riders and loners
//!
//! Payoffs are estimated each generation by sampling groups from the current
//! shares; the shares then move by replicator-mutator dynamics.

mod experiment;
mod parameters;
mod simulation;
mod strategy;

pub use experiment::{PublicGoodsExperiment, PublicGoodsReport, DEFECTOR_COLLAPSE_SHARE};
pub use parameters::PublicGoodsParameters;
pub use simulation::{group_payoffs, PublicGoodsGeneration, PublicGoodsResult, PublicGoodsSimulation};
pub use strategy::PublicGoodsStrategy;
