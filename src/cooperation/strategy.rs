//! Tournament strategies — a closed set of decision rules
//!
//! Every strategy maps (round index, own history, opponent history, rng) to
//! an action. Histories hold realized moves, after execution noise, so a
//! strategy reacts to what actually happened rather than what was intended.

use super::action::Action;
use crate::rng::{chance, SimRng};
use serde::{Deserialize, Serialize};

/// Signature shared by every decision rule
pub type DecisionRule = fn(usize, &[Action], &[Action], &mut SimRng) -> Action;

/// Probability that Generous Tit for Tat forgives a defection
pub const FORGIVE_PROBABILITY: f64 = 0.3;

/// Probability that Random Tit for Tat cooperates regardless of history
pub const RANDOM_COOPERATION: f64 = 0.2;

/// Strategies available to tournament agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CooperationStrategy {
    AlwaysCooperate,
    AlwaysDefect,
    TitForTat,
    GenerousTitForTat,
    GrimTrigger,
    WinStayLoseShift,
    SuspiciousTitForTat,
    RandomTitForTat,
}

impl CooperationStrategy {
    pub const ALL: [CooperationStrategy; 8] = [
        CooperationStrategy::AlwaysCooperate,
        CooperationStrategy::AlwaysDefect,
        CooperationStrategy::TitForTat,
        CooperationStrategy::GenerousTitForTat,
        CooperationStrategy::GrimTrigger,
        CooperationStrategy::WinStayLoseShift,
        CooperationStrategy::SuspiciousTitForTat,
        CooperationStrategy::RandomTitForTat,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            CooperationStrategy::AlwaysCooperate => "Always Cooperate",
            CooperationStrategy::AlwaysDefect => "Always Defect",
            CooperationStrategy::TitForTat => "Tit for Tat",
            CooperationStrategy::GenerousTitForTat => "Generous Tit for Tat",
            CooperationStrategy::GrimTrigger => "Grim Trigger",
            CooperationStrategy::WinStayLoseShift => "Win-Stay Lose-Shift",
            CooperationStrategy::SuspiciousTitForTat => "Suspicious Tit for Tat",
            CooperationStrategy::RandomTitForTat => "Random Tit for Tat",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CooperationStrategy::AlwaysCooperate => "Cooperates unconditionally; the fully trusting player.",
            CooperationStrategy::AlwaysDefect => "Defects unconditionally; the fully self-interested player.",
            CooperationStrategy::TitForTat => "Opens with cooperation, then copies the opponent's last move.",
            CooperationStrategy::GenerousTitForTat => "Tit for Tat that forgives a defection 30% of the time to break retaliation loops.",
            CooperationStrategy::GrimTrigger => "Cooperates until the opponent defects once, then defects forever.",
            CooperationStrategy::WinStayLoseShift => "Repeats its move after a matching round, switches otherwise.",
            CooperationStrategy::SuspiciousTitForTat => "Opens with a probing defection, then copies the opponent.",
            CooperationStrategy::RandomTitForTat => "Copies the opponent but cooperates on impulse 20% of the time.",
        }
    }

    /// Dispatch table from variant to decision rule
    pub fn rule(self) -> DecisionRule {
        match self {
            CooperationStrategy::AlwaysCooperate => always_cooperate,
            CooperationStrategy::AlwaysDefect => always_defect,
            CooperationStrategy::TitForTat => tit_for_tat,
            CooperationStrategy::GenerousTitForTat => generous_tit_for_tat,
            CooperationStrategy::GrimTrigger => grim_trigger,
            CooperationStrategy::WinStayLoseShift => win_stay_lose_shift,
            CooperationStrategy::SuspiciousTitForTat => suspicious_tit_for_tat,
            CooperationStrategy::RandomTitForTat => random_tit_for_tat,
        }
    }

    /// Choose the next action from the visible history
    pub fn decide(
        self,
        round: usize,
        own: &[Action],
        opponent: &[Action],
        rng: &mut SimRng,
    ) -> Action {
        (self.rule())(round, own, opponent, rng)
    }
}

fn always_cooperate(_: usize, _: &[Action], _: &[Action], _: &mut SimRng) -> Action {
    Action::Cooperate
}

fn always_defect(_: usize, _: &[Action], _: &[Action], _: &mut SimRng) -> Action {
    Action::Defect
}

/// Opponent's move in the previous round, or `opening` on round 0
fn mirror(round: usize, opponent: &[Action], opening: Action) -> Action {
    if round == 0 {
        return opening;
    }
    opponent.get(round - 1).copied().unwrap_or(opening)
}

fn tit_for_tat(round: usize, _: &[Action], opponent: &[Action], _: &mut SimRng) -> Action {
    mirror(round, opponent, Action::Cooperate)
}

fn generous_tit_for_tat(round: usize, _: &[Action], opponent: &[Action], rng: &mut SimRng) -> Action {
    let last = mirror(round, opponent, Action::Cooperate);
    if last == Action::Defect && chance(rng, FORGIVE_PROBABILITY) {
        return Action::Cooperate;
    }
    last
}

fn grim_trigger(_: usize, _: &[Action], opponent: &[Action], _: &mut SimRng) -> Action {
    if opponent.contains(&Action::Defect) {
        Action::Defect
    } else {
        Action::Cooperate
    }
}

fn win_stay_lose_shift(round: usize, own: &[Action], opponent: &[Action], _: &mut SimRng) -> Action {
    if round == 0 {
        return Action::Cooperate;
    }
    match (own.get(round - 1), opponent.get(round - 1)) {
        (Some(&mine), Some(&theirs)) if mine == theirs => mine,
        (Some(&mine), Some(_)) => mine.opposite(),
        _ => Action::Cooperate,
    }
}

fn suspicious_tit_for_tat(round: usize, _: &[Action], opponent: &[Action], _: &mut SimRng) -> Action {
    mirror(round, opponent, Action::Defect)
}

fn random_tit_for_tat(round: usize, _: &[Action], opponent: &[Action], rng: &mut SimRng) -> Action {
    if round == 0 {
        return if chance(rng, 0.5) {
            Action::Cooperate
        } else {
            Action::Defect
        };
    }
    if chance(rng, RANDOM_COOPERATION) {
        return Action::Cooperate;
    }
    mirror(round, opponent, Action::Cooperate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::cooperation::action::Action::{Cooperate as C, Defect as D};

    #[test]
    fn test_unconditional() {
        let mut rng = seeded(0);
        for round in 0..5 {
            assert_eq!(CooperationStrategy::AlwaysCooperate.decide(round, &[D; 5], &[D; 5], &mut rng), C);
            assert_eq!(CooperationStrategy::AlwaysDefect.decide(round, &[C; 5], &[C; 5], &mut rng), D);
        }
    }

    #[test]
    fn test_tit_for_tat_mirrors() {
        let mut rng = seeded(0);
        let tft = CooperationStrategy::TitForTat;
        assert_eq!(tft.decide(0, &[], &[], &mut rng), C);
        assert_eq!(tft.decide(1, &[C], &[D], &mut rng), D);
        assert_eq!(tft.decide(2, &[C, D], &[D, C], &mut rng), C);
    }

    #[test]
    fn test_suspicious_opens_with_defect() {
        let mut rng = seeded(0);
        let stft = CooperationStrategy::SuspiciousTitForTat;
        assert_eq!(stft.decide(0, &[], &[], &mut rng), D);
        assert_eq!(stft.decide(1, &[D], &[C], &mut rng), C);
    }

    #[test]
    fn test_grim_never_forgives() {
        let mut rng = seeded(0);
        let grim = CooperationStrategy::GrimTrigger;
        assert_eq!(grim.decide(0, &[], &[], &mut rng), C);
        assert_eq!(grim.decide(3, &[C, C, C], &[C, C, C], &mut rng), C);
        assert_eq!(grim.decide(3, &[C, C, C], &[D, C, C], &mut rng), D);
        assert_eq!(grim.decide(4, &[C, C, C, D], &[C, D, C, C], &mut rng), D);
    }

    #[test]
    fn test_win_stay_lose_shift() {
        let mut rng = seeded(0);
        let pavlov = CooperationStrategy::WinStayLoseShift;
        assert_eq!(pavlov.decide(0, &[], &[], &mut rng), C);
        assert_eq!(pavlov.decide(1, &[C], &[C], &mut rng), C);
        assert_eq!(pavlov.decide(1, &[C], &[D], &mut rng), D);
        assert_eq!(pavlov.decide(1, &[D], &[D], &mut rng), D);
        assert_eq!(pavlov.decide(1, &[D], &[C], &mut rng), C);
    }

    #[test]
    fn test_generous_forgives_sometimes() {
        let mut rng = seeded(11);
        let gtft = CooperationStrategy::GenerousTitForTat;
        let trials = 20_000;
        let forgiven = (0..trials)
            .filter(|_| gtft.decide(1, &[C], &[D], &mut rng) == C)
            .count();
        let rate = forgiven as f64 / trials as f64;
        assert!((rate - FORGIVE_PROBABILITY).abs() < 0.02, "forgive rate {rate}");
        // no draw needed after cooperation
        assert_eq!(gtft.decide(1, &[C], &[C], &mut rng), C);
    }

    #[test]
    fn test_random_tit_for_tat_bias() {
        let mut rng = seeded(5);
        let rtft = CooperationStrategy::RandomTitForTat;
        let trials = 20_000;
        let cooperations = (0..trials)
            .filter(|_| rtft.decide(1, &[C], &[D], &mut rng) == C)
            .count();
        let rate = cooperations as f64 / trials as f64;
        assert!((rate - RANDOM_COOPERATION).abs() < 0.02, "cooperation rate {rate}");
    }

    #[test]
    fn test_metadata_complete() {
        for strategy in CooperationStrategy::ALL {
            assert!(!strategy.display_name().is_empty());
            assert!(!strategy.description().is_empty());
        }
    }
}
