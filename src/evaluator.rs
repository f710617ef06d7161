use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, StartingHand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Premium,
    Strong,
    Good,
    Marginal,
    Weak,
    Trash,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::Premium,
        Tier::Strong,
        Tier::Good,
        Tier::Marginal,
        Tier::Weak,
        Tier::Trash,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tier::Premium => "PREMIUM",
            Tier::Strong => "STRONG",
            Tier::Good => "GOOD",
            Tier::Marginal => "MARGINAL",
            Tier::Weak => "WEAK",
            Tier::Trash => "TRASH",
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub tier: Tier,
    /// Estimated pre-flop win rate in percent.
    pub win_rate: u8,
}

/// The facts about a starting hand the rules are written against.
#[derive(Debug, Clone, Copy)]
struct Shape {
    high: Rank,
    low: Rank,
    suited: bool,
    pocket: bool,
}

impl Shape {
    fn of(hand: &StartingHand) -> Self {
        Self {
            high: hand.high().rank,
            low: hand.low().rank,
            suited: hand.is_suited(),
            pocket: hand.is_pocket_pair(),
        }
    }

    fn hi(&self) -> u8 {
        self.high.value()
    }

    fn lo(&self) -> u8 {
        self.low.value()
    }

    fn gap(&self) -> u8 {
        self.hi() - self.lo()
    }

    fn is(&self, high: Rank, low: Rank) -> bool {
        self.high == high && self.low == low
    }
}

struct Rule {
    matches: fn(&Shape) -> bool,
    tier: Tier,
    suited_win_rate: u8,
    offsuit_win_rate: u8,
}

const fn rule(matches: fn(&Shape) -> bool, tier: Tier, suited: u8, offsuit: u8) -> Rule {
    Rule {
        matches,
        tier,
        suited_win_rate: suited,
        offsuit_win_rate: offsuit,
    }
}

/// Priority list: the first matching rule classifies the hand. Predicates
/// overlap (AK would also satisfy the generic ace-high rule), so the order here
/// is part of the behaviour.
const RULES: [Rule; 12] = [
    rule(|s| s.pocket && s.hi() >= 10, Tier::Premium, 85, 85),
    rule(|s| s.is(Rank::Ace, Rank::King), Tier::Premium, 82, 78),
    rule(|s| s.is(Rank::Ace, Rank::Queen), Tier::Strong, 76, 72),
    rule(|s| s.pocket && s.hi() >= 7, Tier::Strong, 75, 75),
    rule(|s| s.high == Rank::Ace && s.hi() >= 10, Tier::Strong, 72, 68),
    rule(|s| s.pocket && s.hi() >= 5, Tier::Good, 65, 65),
    rule(|s| s.suited && s.gap() <= 1 && s.hi() >= 9, Tier::Good, 62, 62),
    rule(|s| s.lo() >= 10, Tier::Good, 65, 60),
    rule(|s| s.suited && s.gap() <= 2 && s.hi() >= 8, Tier::Marginal, 55, 55),
    rule(|s| s.hi() >= 11, Tier::Marginal, 58, 52),
    rule(|s| s.suited && s.gap() <= 3, Tier::Weak, 48, 48),
    rule(|s| s.hi() >= 9, Tier::Weak, 45, 45),
];

const FALLBACK: HandEvaluation = HandEvaluation {
    tier: Tier::Trash,
    win_rate: 35,
};

/// Classifies a starting hand into a strength tier with an estimated win rate.
pub fn evaluate(hand: &StartingHand) -> HandEvaluation {
    let shape = Shape::of(hand);
    RULES
        .iter()
        .find(|rule| (rule.matches)(&shape))
        .map(|rule| HandEvaluation {
            tier: rule.tier,
            win_rate: if shape.suited {
                rule.suited_win_rate
            } else {
                rule.offsuit_win_rate
            },
        })
        .unwrap_or(FALLBACK)
}

/// Same as [`evaluate`] for two loose cards; argument order does not matter.
pub fn evaluate_hand(first: Card, second: Card) -> HandEvaluation {
    evaluate(&StartingHand::new(first, second))
}
