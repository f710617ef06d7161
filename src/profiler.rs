use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const RAISE_AGGRESSION: f64 = 2.0;
const FOLD_AGGRESSION: f64 = -0.5;

static BET_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("bet amount pattern is valid"));

/// Aggregate of the opponent actions seen before hero acts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionProfile {
    /// +2 per raise, -0.5 per fold.
    pub aggression: f64,
    pub callers: u32,
    pub raisers: u32,
    /// Sum of the amounts attached to raises, in big blinds.
    pub total_bet: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Call,
    Raise(Option<u64>),
    Fold,
    Ignored,
}

impl Token {
    fn classify(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        if upper.contains("CALL") {
            Token::Call
        } else if upper.contains("RAISE") {
            // Only ASCII digits match, so a failed parse is an overflow.
            let amount = BET_AMOUNT
                .find(&upper)
                .map(|found| found.as_str().parse::<u64>().unwrap_or(u64::MAX));
            Token::Raise(amount)
        } else if upper.contains("FOLD") {
            Token::Fold
        } else {
            Token::Ignored
        }
    }
}

/// Summarises opponent action tokens such as `FOLD`, `call` or `RAISE-5`.
///
/// Tokens are matched case-insensitively by substring, `CALL` before `RAISE`
/// before `FOLD`. Anything else is ignored.
pub fn analyze_opponent_actions<S: AsRef<str>>(actions: &[S]) -> ActionProfile {
    profile_with_folds(actions).0
}

/// The profile plus how many fold tokens fed into its aggression.
pub(crate) fn profile_with_folds<S: AsRef<str>>(actions: &[S]) -> (ActionProfile, u32) {
    actions
        .iter()
        .map(|action| Token::classify(action.as_ref()))
        .fold((ActionProfile::default(), 0), |(mut profile, mut folds), token| {
            match token {
                Token::Call => profile.callers += 1,
                Token::Raise(amount) => {
                    profile.raisers += 1;
                    profile.aggression += RAISE_AGGRESSION;
                    if let Some(amount) = amount {
                        profile.total_bet = profile.total_bet.saturating_add(amount);
                    }
                }
                Token::Fold => {
                    profile.aggression += FOLD_AGGRESSION;
                    folds += 1;
                }
                Token::Ignored => {}
            }
            (profile, folds)
        })
}
