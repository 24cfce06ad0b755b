use serde::{Deserialize, Serialize};

/// Roles in the voluntary public goods game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublicGoodsStrategy {
    Cooperator,
    Defector,
    Loner,
}

impl PublicGoodsStrategy {
    /// Share-vector order
    pub const ALL: [PublicGoodsStrategy; 3] = [Self::Cooperator, Self::Defector, Self::Loner];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cooperator => "Cooperator",
            Self::Defector => "Free Rider",
            Self::Loner => "Loner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Cooperator => "Joins every group and pays the contribution.",
            Self::Defector => "Joins and takes a cut of the pot without contributing.",
            Self::Loner => "Stays out of the game and collects a fixed fallback payoff.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_order() {
        for (i, s) in PublicGoodsStrategy::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}
