//! Experiment facade — one configured run per game, wrapped in a report
//!
//! An experiment owns validated parameters, runs its engine once and hands
//! back an immutable report: the raw result plus derived milestones. Article
//! and chart generation live outside this crate and only see
//! [`ExperimentReport`].

mod suite;

pub use suite::{run_experiment, run_suite, SuiteEntry, SuiteReport, EXPERIMENT_IDS};

/// Output of an experiment, as seen by reporting code
pub trait ExperimentReport {
    /// Heading for the report section
    fn section_title(&self) -> &'static str;

    /// Plain-text findings, in reading order
    fn summary_lines(&self) -> Vec<String>;

    /// SHA-256 over the ordered history, for reproducibility checks
    fn history_fingerprint(&self) -> Result<String, serde_json::Error>;
}

/// A configured, runnable experiment
pub trait Experiment {
    type Report: ExperimentReport;

    /// Stable identifier used in configs and on the command line
    fn id(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    fn run(&self) -> Self::Report;
}

/// Generation number of the first item satisfying `predicate`
pub fn first_generation<T>(
    history: &[T],
    generation: impl Fn(&T) -> usize,
    predicate: impl Fn(&T) -> bool,
) -> Option<usize> {
    history.iter().find(|item| predicate(item)).map(generation)
}

/// Item with the largest `key`; ties keep the earliest
pub fn peak_by<T>(history: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    history.iter().fold(None, |best: Option<&T>, item| match best {
        Some(b) if key(b) >= key(item) => Some(b),
        _ => Some(item),
    })
}

pub(crate) fn percent(value: f64) -> f64 {
    value * 100.0
}

pub(crate) fn generation_label(generation: Option<usize>) -> String {
    match generation {
        Some(g) => format!("generation {}", g),
        None => "not reached".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_generation() {
        let history = [(0usize, 0.1), (1, 0.5), (2, 0.9), (3, 0.95)];
        assert_eq!(first_generation(&history, |h| h.0, |h| h.1 >= 0.9), Some(2));
        assert_eq!(first_generation(&history, |h| h.0, |h| h.1 > 1.0), None);
    }

    #[test]
    fn test_peak_keeps_earliest_tie() {
        let history = [(0usize, 0.3), (1, 0.8), (2, 0.8), (3, 0.1)];
        assert_eq!(peak_by(&history, |h| h.1).map(|h| h.0), Some(1));
        let empty: [(usize, f64); 0] = [];
        assert!(peak_by(&empty, |h| h.1).is_none());
    }
}
