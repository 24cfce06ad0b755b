use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StagHuntStrategy {
    Signaler,
    Follower,
    Loner,
}

impl StagHuntStrategy {
    /// Share-vector order
    pub const ALL: [StagHuntStrategy; 3] = [Self::Signaler, Self::Follower, Self::Loner];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Signaler,
            1 => Self::Follower,
            _ => Self::Loner,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Signaler => "Signaler",
            Self::Follower => "Follower",
            Self::Loner => "Loner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Signaler => "Pays to announce a stag hunt and always hunts stag.",
            Self::Follower => "Hunts stag only when the partner signals, otherwise takes the hare.",
            Self::Loner => "Ignores signals and always takes the safe hare.",
        }
    }

    /// Whether this role goes for the stag given the partner's role
    pub fn hunts_stag(self, partner: StagHuntStrategy) -> bool {
        match self {
            Self::Signaler => true,
            Self::Follower => partner == Self::Signaler,
            Self::Loner => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StagHuntStrategy::*;
    use super::*;

    #[test]
    fn test_hunting_rules() {
        assert!(Signaler.hunts_stag(Loner));
        assert!(Follower.hunts_stag(Signaler));
        assert!(!Follower.hunts_stag(Follower));
        assert!(!Loner.hunts_stag(Signaler));
    }

    #[test]
    fn test_index_round_trip() {
        for s in StagHuntStrategy::ALL {
            assert_eq!(StagHuntStrategy::from_index(s.index()), s);
        }
    }
}
