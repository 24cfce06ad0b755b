//! Replicator-mutator dynamics — the share update shared by the population games
//!
//! A generation step applies a discrete replicator move, floors every share
//! at a small positive epsilon, renormalizes, blends in uniform mutation and
//! renormalizes again. The order matters: reordering the floor and the
//! mutation blend shifts long-run trajectories.

use crate::rng::SimRng;
use crate::stats::mean_or;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest share a strategy may fall to between generations
pub const SHARE_FLOOR: f64 = 1.0e-8;

/// Parameters of one replicator-mutator step
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReplicatorMutator {
    /// Scales how strongly payoff differences move shares
    pub selection_strength: f64,
    /// Weight of the uniform mutation blend
    pub mutation_rate: f64,
    /// Lower clamp applied after selection
    pub floor: f64,
    /// Upper clamp applied after selection
    pub ceiling: f64,
}

impl ReplicatorMutator {
    pub fn new(selection_strength: f64, mutation_rate: f64) -> Self {
        Self {
            selection_strength,
            mutation_rate,
            floor: SHARE_FLOOR,
            ceiling: f64::INFINITY,
        }
    }

    /// Also cap shares at `1 - floor` (used by two-strategy games)
    pub fn bounded(mut self) -> Self {
        self.ceiling = 1.0 - self.floor;
        self
    }

    /// Advance `shares` one generation given this generation's payoffs
    pub fn step<const N: usize>(
        &self,
        shares: &[f64; N],
        payoffs: &[f64; N],
        population_payoff: f64,
    ) -> [f64; N] {
        let mut next = [0.0; N];
        for i in 0..N {
            let grown = shares[i]
                + self.selection_strength * shares[i] * (payoffs[i] - population_payoff);
            next[i] = grown.max(self.floor).min(self.ceiling);
        }
        normalize(&mut next);

        if self.mutation_rate > 0.0 {
            let uniform = self.mutation_rate / N as f64;
            for share in next.iter_mut() {
                *share = (1.0 - self.mutation_rate) * *share + uniform;
            }
        }
        normalize(&mut next);
        next
    }
}

/// Share-weighted mean payoff
pub fn population_payoff(shares: &[f64], payoffs: &[f64]) -> f64 {
    shares.iter().zip(payoffs).map(|(s, p)| s * p).sum()
}

/// Rescale so the entries sum to one
pub fn normalize(shares: &mut [f64]) {
    let sum: f64 = shares.iter().sum();
    if sum > 0.0 {
        for share in shares.iter_mut() {
            *share /= sum;
        }
    }
}

/// Draw a strategy index from `shares` with a single uniform draw.
/// Anything past the cumulative mass of the leading entries lands on the last index.
pub fn sample_index(rng: &mut SimRng, shares: &[f64]) -> usize {
    let draw = rng.gen::<f64>();
    let last = shares.len().saturating_sub(1);
    let mut cumulative = 0.0;
    for (i, share) in shares[..last].iter().enumerate() {
        cumulative += share;
        if draw < cumulative {
            return i;
        }
    }
    last
}

/// Per-strategy Monte Carlo payoff totals and appearance counts
#[derive(Debug, Clone)]
pub struct PayoffTally<const N: usize> {
    totals: [f64; N],
    appearances: [u64; N],
}

impl<const N: usize> Default for PayoffTally<N> {
    fn default() -> Self {
        Self {
            totals: [0.0; N],
            appearances: [0; N],
        }
    }
}

impl<const N: usize> PayoffTally<N> {
    /// Credit `count` appearances of strategy `index` earning `payoff` each
    pub fn record(&mut self, index: usize, count: u64, payoff: f64) {
        self.totals[index] += count as f64 * payoff;
        self.appearances[index] += count;
    }

    pub fn appearances(&self, index: usize) -> u64 {
        self.appearances[index]
    }

    /// Mean payoff per strategy; unseen strategies get `fallback`
    pub fn means(&self, fallback: f64) -> [f64; N] {
        let mut means = [fallback; N];
        for (i, mean) in means.iter_mut().enumerate() {
            *mean = mean_or(self.totals[i], self.appearances[i], fallback);
        }
        means
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use proptest::prelude::*;

    fn sum(shares: &[f64]) -> f64 {
        shares.iter().sum()
    }

    #[test]
    fn test_neutral_payoffs_keep_shares() {
        let rm = ReplicatorMutator::new(0.5, 0.0);
        let shares = [0.2, 0.3, 0.5];
        let payoffs = [1.0, 1.0, 1.0];
        let next = rm.step(&shares, &payoffs, population_payoff(&shares, &payoffs));
        for (a, b) in shares.iter().zip(next.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fitter_strategy_grows() {
        let rm = ReplicatorMutator::new(0.5, 0.0);
        let shares = [0.5, 0.5];
        let payoffs = [2.0, 1.0];
        let next = rm.step(&shares, &payoffs, population_payoff(&shares, &payoffs));
        assert!(next[0] > 0.5);
        assert!((sum(&next) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_floor_keeps_extinct_strategy_alive() {
        let rm = ReplicatorMutator::new(1.0, 0.0);
        let shares = [0.5, 0.5];
        let payoffs = [10.0, -10.0];
        let next = rm.step(&shares, &payoffs, population_payoff(&shares, &payoffs));
        assert!(next[1] > 0.0);
        assert!(next[1] < 1e-7);
    }

    #[test]
    fn test_mutation_pulls_toward_uniform() {
        let rm = ReplicatorMutator::new(0.5, 0.3);
        let shares = [0.9, 0.05, 0.05];
        let payoffs = [1.0, 1.0, 1.0];
        let next = rm.step(&shares, &payoffs, 1.0);
        assert!((next[0] - (0.7 * 0.9 + 0.1)).abs() < 1e-12);
        assert!((next[1] - (0.7 * 0.05 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_caps_share() {
        let rm = ReplicatorMutator::new(1.0, 0.0).bounded();
        assert!((rm.ceiling - (1.0 - SHARE_FLOOR)).abs() < 1e-18);
    }

    #[test]
    fn test_sample_index_residual() {
        let mut rng = seeded(3);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[sample_index(&mut rng, &[0.0, 0.0, 1.0])] += 1;
        }
        assert_eq!(counts, [0, 0, 10_000]);

        let mut counts = [0usize; 3];
        for _ in 0..20_000 {
            counts[sample_index(&mut rng, &[0.5, 0.25, 0.25])] += 1;
        }
        let frac = counts[0] as f64 / 20_000.0;
        assert!((frac - 0.5).abs() < 0.02, "fraction {frac}");
    }

    #[test]
    fn test_tally_fallback() {
        let mut tally = PayoffTally::<3>::default();
        tally.record(0, 2, 3.0);
        tally.record(0, 1, 0.0);
        tally.record(2, 4, 1.5);
        let means = tally.means(1.2);
        assert!((means[0] - 2.0).abs() < 1e-12);
        assert_eq!(means[1], 1.2);
        assert!((means[2] - 1.5).abs() < 1e-12);
        assert_eq!(tally.appearances(1), 0);
    }

    proptest! {
        #[test]
        fn step_preserves_simplex(
            raw in prop::array::uniform3(0.0f64..1.0),
            payoffs in prop::array::uniform3(-10.0f64..10.0),
            selection in 0.01f64..=1.0,
            mutation in 0.0f64..0.5,
        ) {
            let mut shares = raw;
            shares[0] += 1e-3;
            normalize(&mut shares);
            let rm = ReplicatorMutator::new(selection, mutation);
            let next = rm.step(&shares, &payoffs, population_payoff(&shares, &payoffs));
            prop_assert!(next.iter().all(|s| *s > 0.0));
            prop_assert!((sum(&next) - 1.0).abs() < 1e-6);
        }
    }
}
