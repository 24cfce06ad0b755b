//! Suite configuration — every experiment's parameters in one JSON document
//!
//! Missing fields fall back to the suite defaults, so a config file only
//! needs to name what it changes.

use crate::cooperation::TournamentConfig;
use crate::error::{ConfigError, Result};
use crate::experiment::EXPERIMENT_IDS;
use crate::hawk_dove::HawkDoveParameters;
use crate::kin_selection::KinSelectionParameters;
use crate::public_goods::PublicGoodsParameters;
use crate::stag_hunt::StagHuntParameters;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Experiment ids to run; suite order is fixed regardless of listing order
    pub experiments: Vec<String>,
    pub cooperation: TournamentConfig,
    pub kin_selection: KinSelectionParameters,
    pub kin_selection_seed: u64,
    pub hawk_dove: HawkDoveParameters,
    pub public_goods: PublicGoodsParameters,
    pub stag_hunt: StagHuntParameters,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            experiments: EXPERIMENT_IDS.iter().map(|id| id.to_string()).collect(),
            cooperation: TournamentConfig::default(),
            kin_selection: KinSelectionParameters::suite(),
            kin_selection_seed: 42,
            hawk_dove: HawkDoveParameters::suite(),
            public_goods: PublicGoodsParameters::suite(),
            stag_hunt: StagHuntParameters::default(),
        }
    }
}

impl SuiteConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether `id` is selected to run
    pub fn includes(&self, id: &str) -> bool {
        self.experiments.iter().any(|e| e == id)
    }

    /// Check experiment ids and every selected experiment's parameters
    pub fn validate(&self) -> Result<()> {
        for id in &self.experiments {
            if !EXPERIMENT_IDS.contains(&id.as_str()) {
                return Err(ConfigError::UnknownExperiment(id.clone()));
            }
        }
        if self.includes("cooperation-tournament") {
            self.cooperation.validate()?;
        }
        if self.includes("kin-selection") {
            self.kin_selection.validate()?;
        }
        if self.includes("hawk-dove") {
            self.hawk_dove.validate()?;
        }
        if self.includes("public-goods") {
            self.public_goods.validate()?;
        }
        if self.includes("stag-hunt-signal") {
            self.stag_hunt.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("evogames-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_is_valid() {
        let config = SuiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.experiments.len(), 5);
        assert_eq!(config.kin_selection.population_size, 6000);
        assert_eq!(config.public_goods.seed, 2026);
    }

    #[test]
    fn test_load_partial_file() {
        let path = temp_file(
            "partial",
            r#"{"experiments": ["hawk-dove"], "hawk_dove": {"generations": 30}}"#,
        );
        let config = SuiteConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.experiments, vec!["hawk-dove".to_string()]);
        assert_eq!(config.hawk_dove.generations, 30);
        assert_eq!(config.hawk_dove.conflict_cost, 6.0);
        assert_eq!(config.stag_hunt, StagHuntParameters::default());
    }

    #[test]
    fn test_unknown_experiment() {
        let path = temp_file("unknown", r#"{"experiments": ["rock-paper-scissors"]}"#);
        let err = SuiteConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::UnknownExperiment(id) if id == "rock-paper-scissors"));
    }

    #[test]
    fn test_invalid_parameters_rejected_on_load() {
        let path = temp_file("invalid", r#"{"kin_selection": {"population_size": 401}}"#);
        let err = SuiteConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::IndivisiblePopulation { .. }));
    }

    #[test]
    fn test_io_and_parse_errors() {
        let missing = std::env::temp_dir().join("evogames-does-not-exist.json");
        assert!(matches!(SuiteConfig::load(&missing), Err(ConfigError::Io(_))));

        let path = temp_file("broken", "{ not json");
        let err = SuiteConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_to_json_lists_sections() {
        let json = SuiteConfig::default().to_json().unwrap();
        for key in ["cooperation", "kin_selection_seed", "hawk_dove", "public_goods", "stag_hunt"] {
            assert!(json.contains(key), "missing {}", key);
        }
    }
}
