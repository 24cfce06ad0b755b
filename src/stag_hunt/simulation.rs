use super::parameters::StagHuntParameters;
use super::strategy::StagHuntStrategy;
use crate::dynamics::{population_payoff, sample_index, PayoffTally, ReplicatorMutator};
use crate::error::Result;
use crate::rng::{seeded, SimRng};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Outcome of one sampled pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Encounter {
    /// Net payoffs of (first, second), signal cost included
    pub payoffs: [f64; 2],
    /// At least one partner signaled
    pub signaled: bool,
    /// At least one partner went for the stag
    pub stag_attempted: bool,
    /// Both partners went for the stag
    pub stag_caught: bool,
}

impl Encounter {
    pub fn play(params: &StagHuntParameters, first: StagHuntStrategy, second: StagHuntStrategy) -> Self {
        let first_stag = first.hunts_stag(second);
        let second_stag = second.hunts_stag(first);
        let mut payoffs = match (first_stag, second_stag) {
            (true, true) => [params.stag_payoff, params.stag_payoff],
            (true, false) => [params.failed_stag_payoff, params.hare_payoff],
            (false, true) => [params.hare_payoff, params.failed_stag_payoff],
            (false, false) => [params.hare_payoff, params.hare_payoff],
        };
        for (payoff, role) in payoffs.iter_mut().zip([first, second]) {
            if role == StagHuntStrategy::Signaler {
                *payoff -= params.signal_cost;
            }
        }
        Self {
            payoffs,
            signaled: first == StagHuntStrategy::Signaler || second == StagHuntStrategy::Signaler,
            stag_attempted: first_stag || second_stag,
            stag_caught: first_stag && second_stag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagHuntGeneration {
    pub generation: usize,
    pub signaler_share: f64,
    pub follower_share: f64,
    pub loner_share: f64,
    pub signaler_payoff: f64,
    pub follower_payoff: f64,
    pub loner_payoff: f64,
    pub population_payoff: f64,
    /// Successful stag hunts per sampled pair
    pub stag_success_rate: f64,
    /// Pairs containing at least one signaler
    pub signal_activation_rate: f64,
    /// Successful hunts among pairs where anyone went for the stag
    pub stag_conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagHuntResult {
    pub generations: Vec<StagHuntGeneration>,
}

impl StagHuntResult {
    pub fn first(&self) -> Option<&StagHuntGeneration> {
        self.generations.first()
    }

    pub fn last(&self) -> Option<&StagHuntGeneration> {
        self.generations.last()
    }
}

/// Payoff means and coordination rates of one generation
struct GenerationSample {
    payoffs: [f64; 3],
    stag_success_rate: f64,
    signal_activation_rate: f64,
    stag_conversion_rate: f64,
}

#[derive(Debug, Clone)]
pub struct StagHuntSimulation {
    params: StagHuntParameters,
    dynamics: ReplicatorMutator,
}

impl StagHuntSimulation {
    pub fn new(params: StagHuntParameters) -> Result<Self> {
        params.validate()?;
        let dynamics = ReplicatorMutator::new(params.selection_strength, params.mutation_rate);
        Ok(Self { params, dynamics })
    }

    pub fn params(&self) -> &StagHuntParameters {
        &self.params
    }

    fn sample_generation(&self, rng: &mut SimRng, shares: &[f64; 3]) -> GenerationSample {
        let interactions = self.params.interactions_per_generation;
        let mut tally = PayoffTally::<3>::default();
        let (mut signals, mut attempts, mut successes) = (0u64, 0u64, 0u64);

        for _ in 0..interactions {
            let first = StagHuntStrategy::from_index(sample_index(rng, shares));
            let second = StagHuntStrategy::from_index(sample_index(rng, shares));
            let encounter = Encounter::play(&self.params, first, second);

            tally.record(first.index(), 1, encounter.payoffs[0]);
            tally.record(second.index(), 1, encounter.payoffs[1]);
            signals += u64::from(encounter.signaled);
            attempts += u64::from(encounter.stag_attempted);
            successes += u64::from(encounter.stag_caught);
        }

        let n = interactions as f64;
        GenerationSample {
            payoffs: tally.means(self.params.hare_payoff),
            stag_success_rate: successes as f64 / n,
            signal_activation_rate: signals as f64 / n,
            stag_conversion_rate: if attempts > 0 { successes as f64 / attempts as f64 } else { 0.0 },
        }
    }

    pub fn run(&self) -> StagHuntResult {
        let p = &self.params;
        info!(
            "Stag hunt: stag={} hare={} failed={} signal_cost={} | {} generations x {} pairs | seed={}",
            p.stag_payoff,
            p.hare_payoff,
            p.failed_stag_payoff,
            p.signal_cost,
            p.generations,
            p.interactions_per_generation,
            p.seed,
        );

        let mut rng = seeded(p.seed);
        let mut shares = p.initial_shares();
        let mut history = Vec::with_capacity(p.generations + 1);

        for generation in 0..=p.generations {
            let sample = self.sample_generation(&mut rng, &shares);
            let population = population_payoff(&shares, &sample.payoffs);

            history.push(StagHuntGeneration {
                generation,
                signaler_share: shares[0],
                follower_share: shares[1],
                loner_share: shares[2],
                signaler_payoff: sample.payoffs[0],
                follower_payoff: sample.payoffs[1],
                loner_payoff: sample.payoffs[2],
                population_payoff: population,
                stag_success_rate: sample.stag_success_rate,
                signal_activation_rate: sample.signal_activation_rate,
                stag_conversion_rate: sample.stag_conversion_rate,
            });

            if generation % 25 == 0 {
                debug!(
                    "  gen {:>4}: S={:.3} F={:.3} L={:.3} success={:.3} pop={:.3}",
                    generation, shares[0], shares[1], shares[2], sample.stag_success_rate, population
                );
            }
            if generation == p.generations {
                break;
            }
            shares = self.dynamics.step(&shares, &sample.payoffs, population);
        }

        if let Some(last) = history.last() {
            info!(
                "Stag hunt complete: signalers={:.3} success={:.3} payoff={:.3}",
                last.signaler_share, last.stag_success_rate, last.population_payoff
            );
        }
        StagHuntResult { generations: history }
    }
}
