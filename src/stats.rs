//! Running statistics — accumulators turned into derived performance metrics
//!
//! Both engine styles funnel their raw samples through here: the tournament
//! accumulates per-match scores for agents and strategies, the population
//! engines average Monte Carlo payoffs and per-strategy fitness totals.

use serde::{Deserialize, Serialize};

/// Mean of `total` over `count` samples, or `fallback` when nothing was sampled
#[inline]
pub fn mean_or(total: f64, count: u64, fallback: f64) -> f64 {
    if count == 0 {
        fallback
    } else {
        total / count as f64
    }
}

/// Sample (Bessel-corrected) standard deviation from running sums
pub fn sample_std_dev(count: u64, sum: f64, sum_squares: f64) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    let n = count as f64;
    let mean = sum / n;
    let variance = (sum_squares - n * mean * mean) / (n - 1.0);
    if variance <= 0.0 {
        0.0
    } else {
        variance.sqrt()
    }
}

/// Running totals over a sequence of match results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreAccumulator {
    pub total_score: f64,
    pub score_squares: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub matches: u64,
    pub total_cooperation: f64,
    pub total_mutual_cooperation: f64,
}

impl Default for ScoreAccumulator {
    fn default() -> Self {
        Self {
            total_score: 0.0,
            score_squares: 0.0,
            min_score: f64::INFINITY,
            max_score: f64::NEG_INFINITY,
            matches: 0,
            total_cooperation: 0.0,
            total_mutual_cooperation: 0.0,
        }
    }
}

impl ScoreAccumulator {
    /// Fold one match into the totals
    pub fn add(&mut self, score: f64, cooperation_rate: f64, mutual_cooperation_rate: f64) {
        self.total_score += score;
        self.score_squares += score * score;
        self.min_score = self.min_score.min(score);
        self.max_score = self.max_score.max(score);
        self.matches += 1;
        self.total_cooperation += cooperation_rate;
        self.total_mutual_cooperation += mutual_cooperation_rate;
    }

    /// Derive the reporting metrics; `rounds_per_match` scales the per-round mean
    pub fn summarize(&self, rounds_per_match: usize) -> PerformanceStats {
        let empty = self.matches == 0;
        let mean_score = mean_or(self.total_score, self.matches, 0.0);
        let mean_cooperation_rate = mean_or(self.total_cooperation, self.matches, 0.0);
        PerformanceStats {
            total_score: self.total_score,
            matches: self.matches,
            mean_score,
            mean_score_per_round: if rounds_per_match == 0 {
                0.0
            } else {
                mean_score / rounds_per_match as f64
            },
            mean_cooperation_rate,
            mean_defection_rate: 1.0 - mean_cooperation_rate,
            mean_mutual_cooperation_rate: mean_or(self.total_mutual_cooperation, self.matches, 0.0),
            best_match_score: if empty { 0.0 } else { self.max_score },
            worst_match_score: if empty { 0.0 } else { self.min_score },
            score_std_dev: sample_std_dev(self.matches, self.total_score, self.score_squares),
        }
    }
}

/// Aggregated performance of an agent or a strategy across its matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub total_score: f64,
    pub matches: u64,
    pub mean_score: f64,
    pub mean_score_per_round: f64,
    pub mean_cooperation_rate: f64,
    pub mean_defection_rate: f64,
    pub mean_mutual_cooperation_rate: f64,
    pub best_match_score: f64,
    pub worst_match_score: f64,
    pub score_std_dev: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_accumulator() {
        let stats = ScoreAccumulator::default().summarize(10);
        assert_eq!(stats.matches, 0);
        assert_eq!(stats.mean_score, 0.0);
        assert_eq!(stats.best_match_score, 0.0);
        assert_eq!(stats.worst_match_score, 0.0);
        assert_eq!(stats.score_std_dev, 0.0);
    }

    #[test]
    fn test_accumulate_scores() {
        let mut acc = ScoreAccumulator::default();
        acc.add(2.0, 1.0, 0.5);
        acc.add(4.0, 0.0, 0.5);
        acc.add(6.0, 0.5, 0.0);
        let stats = acc.summarize(2);
        assert_eq!(stats.matches, 3);
        assert!((stats.mean_score - 4.0).abs() < 1e-12);
        assert!((stats.mean_score_per_round - 2.0).abs() < 1e-12);
        assert!((stats.mean_cooperation_rate - 0.5).abs() < 1e-12);
        assert!((stats.mean_defection_rate - 0.5).abs() < 1e-12);
        assert!((stats.mean_mutual_cooperation_rate - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.best_match_score, 6.0);
        assert_eq!(stats.worst_match_score, 2.0);
        // sample variance of {2, 4, 6} is 4
        assert!((stats.score_std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_single_sample() {
        assert_eq!(sample_std_dev(1, 5.0, 25.0), 0.0);
        assert_eq!(sample_std_dev(3, 9.0, 27.0), 0.0);
    }

    #[test]
    fn test_mean_or_fallback() {
        assert_eq!(mean_or(10.0, 0, 1.2), 1.2);
        assert_eq!(mean_or(10.0, 4, 1.2), 2.5);
    }
}
