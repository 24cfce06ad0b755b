use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KinStrategy {
    Altruist,
    Selfish,
}

impl KinStrategy {
    pub const ALL: [KinStrategy; 2] = [Self::Altruist, Self::Selfish];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Altruist => "Altruist",
            Self::Selfish => "Selfish",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Altruist => "Pays a personal cost to hand a benefit to every relative.",
            Self::Selfish => "Keeps its resources and only collects what relatives give.",
        }
    }
}

/// One member of the population, with this generation's fitness ledger.
/// Family membership is positional: consecutive `family_size` agents form a family.
#[derive(Debug, Clone, PartialEq)]
pub struct KinAgent {
    pub strategy: KinStrategy,
    pub direct_fitness: f64,
    pub inclusive_fitness: f64,
    pub benefit_given: f64,
    pub benefit_received: f64,
}

impl KinAgent {
    pub fn new(strategy: KinStrategy) -> Self {
        Self {
            strategy,
            direct_fitness: 0.0,
            inclusive_fitness: 0.0,
            benefit_given: 0.0,
            benefit_received: 0.0,
        }
    }

    pub fn reset(&mut self, base_fitness: f64) {
        self.direct_fitness = base_fitness;
        self.inclusive_fitness = base_fitness;
        self.benefit_given = 0.0;
        self.benefit_received = 0.0;
    }

    /// Fold received help into direct fitness and credit weighted help given
    pub fn settle(&mut self, relatedness: f64) {
        self.direct_fitness += self.benefit_received;
        self.inclusive_fitness = self.direct_fitness + relatedness * self.benefit_given;
    }

    /// Weight used when sampling parents
    pub fn reproductive_weight(&self) -> f64 {
        if self.inclusive_fitness > 0.0 {
            self.inclusive_fitness
        } else {
            1.0e-6
        }
    }
}
