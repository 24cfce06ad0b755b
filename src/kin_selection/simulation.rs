use super::agent::{KinAgent, KinStrategy};
use super::parameters::KinSelectionParameters;
use crate::error::Result;
use crate::rng::{chance, seeded, SimRng};
use crate::stats::mean_or;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Averages over every agent of one strategy in one generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySnapshot {
    pub strategy: KinStrategy,
    pub count: usize,
    pub average_direct_fitness: f64,
    pub average_inclusive_fitness: f64,
    pub average_benefit_given: f64,
    pub average_benefit_received: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    /// One entry per strategy, in [`KinStrategy::ALL`] order
    pub snapshots: Vec<StrategySnapshot>,
    pub population_size: usize,
}

impl GenerationStats {
    pub fn snapshot(&self, strategy: KinStrategy) -> Option<&StrategySnapshot> {
        self.snapshots.iter().find(|s| s.strategy == strategy)
    }

    pub fn share(&self, strategy: KinStrategy) -> f64 {
        match self.snapshot(strategy) {
            Some(s) if self.population_size > 0 => s.count as f64 / self.population_size as f64,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinSelectionResult {
    /// Generation 0 through `generations - 1`
    pub generations: Vec<GenerationStats>,
}

impl KinSelectionResult {
    pub fn first(&self) -> Option<&GenerationStats> {
        self.generations.first()
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.generations.last()
    }
}

/// Apply one round of family help and settle everyone's fitness.
///
/// Every altruist pays `cost` and splits `benefit` evenly over the other
/// members. Agents must already be reset to base fitness.
pub fn play_family(family: &mut [KinAgent], params: &KinSelectionParameters) {
    if family.len() <= 1 {
        return;
    }
    let per_relative = params.benefit / (family.len() - 1) as f64;
    let altruists: Vec<usize> = (0..family.len())
        .filter(|&i| family[i].strategy == KinStrategy::Altruist)
        .collect();

    for &giver in &altruists {
        family[giver].direct_fitness -= params.cost;
        family[giver].benefit_given += params.benefit;
        for (i, relative) in family.iter_mut().enumerate() {
            if i != giver {
                relative.benefit_received += per_relative;
            }
        }
    }
    for agent in family.iter_mut() {
        agent.settle(params.relatedness);
    }
}

#[derive(Default)]
struct Totals {
    count: usize,
    direct: f64,
    inclusive: f64,
    given: f64,
    received: f64,
}

#[derive(Debug, Clone)]
pub struct KinSelectionSimulation {
    params: KinSelectionParameters,
    seed: u64,
}

impl KinSelectionSimulation {
    pub fn new(params: KinSelectionParameters, seed: u64) -> Result<Self> {
        params.validate()?;
        Ok(Self { params, seed })
    }

    pub fn params(&self) -> &KinSelectionParameters {
        &self.params
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn initial_population(&self, rng: &mut SimRng) -> Vec<KinAgent> {
        (0..self.params.population_size)
            .map(|_| {
                let strategy = if chance(rng, self.params.initial_altruist_share) {
                    KinStrategy::Altruist
                } else {
                    KinStrategy::Selfish
                };
                KinAgent::new(strategy)
            })
            .collect()
    }

    fn collect_stats(&self, generation: usize, population: &[KinAgent]) -> GenerationStats {
        let mut totals: [Totals; 2] = Default::default();
        for agent in population {
            let t = &mut totals[agent.strategy.index()];
            t.count += 1;
            t.direct += agent.direct_fitness;
            t.inclusive += agent.inclusive_fitness;
            t.given += agent.benefit_given;
            t.received += agent.benefit_received;
        }
        let snapshots = KinStrategy::ALL
            .iter()
            .map(|&strategy| {
                let t = &totals[strategy.index()];
                let n = t.count as u64;
                StrategySnapshot {
                    strategy,
                    count: t.count,
                    average_direct_fitness: mean_or(t.direct, n, 0.0),
                    average_inclusive_fitness: mean_or(t.inclusive, n, 0.0),
                    average_benefit_given: mean_or(t.given, n, 0.0),
                    average_benefit_received: mean_or(t.received, n, 0.0),
                }
            })
            .collect();
        GenerationStats { generation, snapshots, population_size: population.len() }
    }

    /// One parent per family, drawn from the whole population on inclusive fitness
    fn reproduce(&self, rng: &mut SimRng, population: &[KinAgent]) -> Vec<KinAgent> {
        let mut cumulative = Vec::with_capacity(population.len());
        let mut total = 0.0;
        for agent in population {
            total += agent.reproductive_weight();
            cumulative.push(total);
        }
        if total <= 0.0 {
            total = population.len() as f64;
        }

        let last = population.len() - 1;
        let mut next = Vec::with_capacity(population.len());
        for _ in 0..self.params.families() {
            let threshold = rng.gen::<f64>() * total;
            let parent = cumulative.partition_point(|&c| c < threshold).min(last);
            let inherited = population[parent].strategy;
            for _ in 0..self.params.family_size {
                let strategy = if chance(rng, self.params.mutation_rate) {
                    KinStrategy::ALL[rng.gen_range(0..KinStrategy::ALL.len())]
                } else {
                    inherited
                };
                next.push(KinAgent::new(strategy));
            }
        }
        next
    }

    pub fn run(&self) -> KinSelectionResult {
        let p = &self.params;
        info!(
            "Kin selection: {} agents in families of {} | {} generations | b={} c={} r={} mu={} | seed={}",
            p.population_size,
            p.family_size,
            p.generations,
            p.benefit,
            p.cost,
            p.relatedness,
            p.mutation_rate,
            self.seed,
        );

        let mut rng = seeded(self.seed);
        let mut population = self.initial_population(&mut rng);
        let mut history = Vec::with_capacity(p.generations);

        for generation in 0..p.generations {
            for agent in population.iter_mut() {
                agent.reset(p.base_fitness);
            }
            for family in population.chunks_mut(p.family_size) {
                play_family(family, p);
            }
            let stats = self.collect_stats(generation, &population);
            if generation % 50 == 0 {
                debug!(
                    "  gen {:>4}: altruists={:.3}",
                    generation,
                    stats.share(KinStrategy::Altruist)
                );
            }
            history.push(stats);
            population = self.reproduce(&mut rng, &population);
        }

        if let Some(last) = history.last() {
            info!(
                "Kin selection complete: altruist share {:.3}",
                last.share(KinStrategy::Altruist)
            );
        }
        KinSelectionResult { generations: history }
    }
}
