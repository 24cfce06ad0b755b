//! Run configured experiments in suite order and collect their reports

use super::{Experiment, ExperimentReport};
use crate::config::SuiteConfig;
use crate::cooperation::CooperationExperiment;
use crate::error::{ConfigError, Result};
use crate::hawk_dove::HawkDoveExperiment;
use crate::kin_selection::KinSelectionExperiment;
use crate::public_goods::PublicGoodsExperiment;
use crate::stag_hunt::StagHuntExperiment;
use log::info;
use serde::Serialize;

/// Every experiment id, in suite order
pub const EXPERIMENT_IDS: [&str; 5] = [
    "cooperation-tournament",
    "kin-selection",
    "hawk-dove",
    "public-goods",
    "stag-hunt-signal",
];

/// One finished experiment
#[derive(Debug, Clone, Serialize)]
pub struct SuiteEntry {
    pub id: String,
    pub display_name: String,
    pub section_title: String,
    pub summary_lines: Vec<String>,
    /// SHA-256 of the ordered history
    pub fingerprint: String,
    /// Full report as JSON
    pub report: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    pub entries: Vec<SuiteEntry>,
}

impl SuiteReport {
    pub fn entry(&self, id: &str) -> Option<&SuiteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

fn finish<E>(experiment: E) -> Result<SuiteEntry>
where
    E: Experiment,
    E::Report: Serialize,
{
    info!("Running {}", experiment.display_name());
    let report = experiment.run();
    let fingerprint = report.history_fingerprint().map_err(ConfigError::Report)?;
    let entry = SuiteEntry {
        id: experiment.id().to_string(),
        display_name: experiment.display_name().to_string(),
        section_title: report.section_title().to_string(),
        summary_lines: report.summary_lines(),
        fingerprint,
        report: serde_json::to_value(&report).map_err(ConfigError::Report)?,
    };
    info!("Finished {} -> {}", entry.display_name, entry.section_title);
    Ok(entry)
}

/// Run one experiment by id with the parameters from `config`
pub fn run_experiment(config: &SuiteConfig, id: &str) -> Result<SuiteEntry> {
    match id {
        "cooperation-tournament" => finish(CooperationExperiment::new(config.cooperation.clone())?),
        "kin-selection" => finish(KinSelectionExperiment::new(
            config.kin_selection.clone(),
            config.kin_selection_seed,
        )?),
        "hawk-dove" => finish(HawkDoveExperiment::new(config.hawk_dove.clone())?),
        "public-goods" => finish(PublicGoodsExperiment::new(config.public_goods.clone())?),
        "stag-hunt-signal" => finish(StagHuntExperiment::new(config.stag_hunt.clone())?),
        other => Err(ConfigError::UnknownExperiment(other.to_string())),
    }
}

/// Run every selected experiment in suite order.
///
/// The whole config is validated up front, so a bad late section fails
/// before any simulation starts.
pub fn run_suite(config: &SuiteConfig) -> Result<SuiteReport> {
    config.validate()?;
    let mut report = SuiteReport::default();
    for id in EXPERIMENT_IDS.iter().filter(|id| config.includes(id)) {
        report.entries.push(run_experiment(config, id)?);
    }
    info!("Suite complete: {} experiments", report.entries.len());
    Ok(report)
}
