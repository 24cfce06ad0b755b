use serde::{Deserialize, Serialize};

/// A move in one round of the prisoner's dilemma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

impl Action {
    /// The other move, used when execution noise flips an action
    pub fn opposite(self) -> Self {
        match self {
            Action::Cooperate => Action::Defect,
            Action::Defect => Action::Cooperate,
        }
    }

    pub fn is_cooperate(self) -> bool {
        self == Action::Cooperate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Action::Cooperate.opposite(), Action::Defect);
        assert_eq!(Action::Defect.opposite().opposite(), Action::Defect);
    }
}
