//! evogames — evolutionary game theory simulations
//!
//! Five classical games on two engines: an agent-based iterated prisoner's
//! dilemma tournament, and replicator-mutator population dynamics for
//! hawk-dove, public goods and stag hunt, plus an agent-level kin selection
//! model. Every run is seeded and reproducible.

pub mod config;
pub mod cooperation;
pub mod dynamics;
pub mod error;
pub mod experiment;
pub mod fingerprint;
pub mod hawk_dove;
pub mod kin_selection;
pub mod public_goods;
pub mod rng;
pub mod stag_hunt;
pub mod stats;

pub use config::SuiteConfig;
pub use cooperation::{CooperationStrategy, CooperationTournament, TournamentConfig, TournamentResult};
pub use error::{ConfigError, Result};
pub use experiment::{run_experiment, run_suite, Experiment, ExperimentReport, SuiteReport};
pub use fingerprint::fingerprint;
pub use hawk_dove::{HawkDoveParameters, HawkDoveSimulation};
pub use kin_selection::{KinSelectionParameters, KinSelectionSimulation};
pub use public_goods::{PublicGoodsParameters, PublicGoodsSimulation};
pub use rng::SimRng;
pub use stag_hunt::{StagHuntParameters, StagHuntSimulation};
