use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::cards::StartingHand;
use crate::evaluator::{HandEvaluation, Tier, evaluate};
use crate::position::Position;
use crate::profiler::{ActionProfile, profile_with_folds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Fold => "FOLD",
            Action::Call => "CALL",
            Action::Raise => "RAISE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    /// Raise size in big blinds, zero unless raising.
    pub amount: u32,
    /// Percent, 0 through 100.
    pub confidence: u8,
    pub reasoning: String,
}

/// Everything the engine looked at, alongside what it chose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub evaluation: HandEvaluation,
    pub profile: ActionProfile,
    pub adjusted_win_rate: f64,
    pub pot_odds: f64,
    pub decision: Decision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Choice {
    action: Action,
    amount: u32,
    confidence: u8,
}

const DEFAULT_CHOICE: Choice = Choice {
    action: Action::Fold,
    amount: 0,
    confidence: 50,
};

impl Choice {
    fn raise(amount: u32, confidence: u8) -> Self {
        Self {
            action: Action::Raise,
            amount,
            confidence,
        }
    }

    fn call(confidence: u8) -> Self {
        Self {
            action: Action::Call,
            amount: 0,
            confidence,
        }
    }

    fn fold(confidence: u8) -> Self {
        Self {
            action: Action::Fold,
            amount: 0,
            confidence,
        }
    }
}

/// Recommends a pre-flop action.
///
/// `player_count` is accepted for callers that track table size but no rule
/// reads it. The position multiplier only feeds the win rate shown in the
/// reasoning.
pub fn make_decision<S: AsRef<str>>(
    hand: &StartingHand,
    position: &Position,
    stack_bb: u32,
    player_count: u32,
    actions: &[S],
) -> Decision {
    analyze(hand, position, stack_bb, player_count, actions).decision
}

/// Like [`make_decision`] but also returns the intermediate evaluation.
pub fn analyze<S: AsRef<str>>(
    hand: &StartingHand,
    position: &Position,
    stack_bb: u32,
    _player_count: u32,
    actions: &[S],
) -> Analysis {
    let evaluation = evaluate(hand);
    let (profile, folds) = profile_with_folds(actions);

    let adjusted_win_rate = f64::from(evaluation.win_rate) * position.multiplier();
    let pot_odds = if profile.total_bet > 0 {
        f64::from(stack_bb) / profile.total_bet as f64
    } else {
        1.0
    };

    let choice = choose(evaluation.tier, &profile, position, stack_bb, pot_odds);
    tracing::debug!(
        %hand,
        %position,
        tier = %evaluation.tier,
        action = %choice.action,
        amount = choice.amount,
        "pre-flop decision"
    );

    let decision = Decision {
        action: choice.action,
        amount: choice.amount,
        confidence: choice.confidence,
        reasoning: reasoning_text(evaluation.tier, adjusted_win_rate, position, &profile, folds),
    };

    Analysis {
        evaluation,
        profile,
        adjusted_win_rate,
        pot_odds,
        decision,
    }
}

fn choose(
    tier: Tier,
    profile: &ActionProfile,
    position: &Position,
    stack_bb: u32,
    pot_odds: f64,
) -> Choice {
    let ActionProfile {
        aggression,
        callers,
        raisers,
        total_bet,
    } = *profile;

    match tier {
        Tier::Premium => {
            if raisers == 0 {
                Choice::raise(stack_bb.min(3 + callers), 90)
            } else if aggression < 4.0 {
                Choice::call(85)
            } else {
                Choice::raise(stack_bb.min(truncate(total_bet as f64 * 1.5)), 80)
            }
        }
        Tier::Strong => {
            if raisers == 0 {
                Choice::raise(stack_bb.min(truncate(2.5 + f64::from(callers) * 0.5)), 80)
            } else if aggression < 3.0 {
                Choice::call(75)
            } else if stack_bb > 40 {
                Choice::fold(70)
            } else {
                DEFAULT_CHOICE
            }
        }
        Tier::Good => {
            if raisers == 0 && position.label() == "BTN" {
                Choice::raise(stack_bb.min(3), 70)
            } else if aggression < 2.0 {
                Choice::call(65)
            } else {
                DEFAULT_CHOICE
            }
        }
        Tier::Marginal => {
            if raisers == 0 && matches!(position.label(), "BTN" | "CO") {
                Choice::raise(stack_bb.min(3), 60)
            } else if aggression == 0.0 && pot_odds > 3.0 {
                Choice::call(55)
            } else {
                DEFAULT_CHOICE
            }
        }
        Tier::Weak | Tier::Trash => DEFAULT_CHOICE,
    }
}

/// Sizes are whole big blinds; fractions are dropped.
fn truncate(size: f64) -> u32 {
    size as u32
}

fn reasoning_text(
    tier: Tier,
    adjusted_win_rate: f64,
    position: &Position,
    profile: &ActionProfile,
    folds: u32,
) -> String {
    // Once a fold has counted the level always keeps its decimal point.
    let aggression = if folds > 0 {
        format!("{:?}", profile.aggression)
    } else {
        format!("{}", profile.aggression)
    };
    format!(
        "Hand strength: {tier} ({adjusted_win_rate:.1}% win rate)\n\
         Position: {position}\n\
         Opponents: {} callers, {} raisers\n\
         Aggression level: {aggression}",
        profile.callers, profile.raisers
    )
}
