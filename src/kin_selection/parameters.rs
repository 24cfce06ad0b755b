use crate::error::{ensure_at_least, ensure_positive, ensure_probability, ConfigError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinSelectionParameters {
    pub population_size: usize,
    /// Must divide `population_size`
    pub family_size: usize,
    pub generations: usize,
    pub base_fitness: f64,
    /// b: total help handed out by one altruist
    pub benefit: f64,
    /// c: direct fitness an altruist gives up
    pub cost: f64,
    /// Chance a newborn ignores its parent and picks a random strategy
    pub mutation_rate: f64,
    /// r: relatedness between family members
    pub relatedness: f64,
    pub initial_altruist_share: f64,
}

impl Default for KinSelectionParameters {
    fn default() -> Self {
        Self {
            population_size: 400,
            family_size: 4,
            generations: 80,
            base_fitness: 1.0,
            benefit: 2.4,
            cost: 0.8,
            mutation_rate: 0.02,
            relatedness: 0.5,
            initial_altruist_share: 0.25,
        }
    }
}

impl KinSelectionParameters {
    /// Large population used by the full experiment suite
    pub fn suite() -> Self {
        Self {
            population_size: 6000,
            family_size: 6,
            generations: 1000,
            ..Self::default()
        }
    }

    pub fn families(&self) -> usize {
        self.population_size / self.family_size
    }

    /// Whether `r * b > c` holds for a single act of help
    pub fn satisfies_hamilton(&self) -> bool {
        self.relatedness * self.benefit > self.cost
    }

    pub fn validate(&self) -> Result<()> {
        ensure_at_least("population_size", 1, self.population_size)?;
        ensure_at_least("family_size", 2, self.family_size)?;
        if self.population_size % self.family_size != 0 {
            return Err(ConfigError::IndivisiblePopulation {
                population: self.population_size,
                family_size: self.family_size,
            });
        }
        ensure_at_least("generations", 1, self.generations)?;
        ensure_positive("base_fitness", self.base_fitness)?;
        ensure_positive("benefit", self.benefit)?;
        ensure_positive("cost", self.cost)?;
        ensure_probability("mutation_rate", self.mutation_rate)?;
        ensure_probability("relatedness", self.relatedness)?;
        ensure_probability("initial_altruist_share", self.initial_altruist_share)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_valid() {
        assert!(KinSelectionParameters::default().validate().is_ok());
        let suite = KinSelectionParameters::suite();
        assert!(suite.validate().is_ok());
        assert_eq!(suite.families(), 1000);
        assert!(suite.satisfies_hamilton());
    }

    #[test]
    fn test_family_size_must_divide() {
        let params = KinSelectionParameters { population_size: 402, ..Default::default() };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::IndivisiblePopulation { population: 402, family_size: 4 })
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            KinSelectionParameters { population_size: 0, ..Default::default() },
            KinSelectionParameters { family_size: 1, population_size: 10, ..Default::default() },
            KinSelectionParameters { cost: 0.0, ..Default::default() },
            KinSelectionParameters { relatedness: 1.2, ..Default::default() },
            KinSelectionParameters { mutation_rate: -0.1, ..Default::default() },
        ];
        for params in bad {
            assert!(params.validate().is_err(), "{:?}", params);
        }
    }
}
