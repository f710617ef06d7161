use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Multiplier applied to seats outside the known table.
pub const DEFAULT_MULTIPLIER: f64 = 0.8;

/// Seat at the table, compared case-sensitively against the known labels.
///
/// Any other label is kept verbatim as [`Position::Other`] and never rejected.
/// Build values with [`Position::parse`]; the seat-dependent rules compare
/// [`Position::label`], so an `Other` holding a known label still behaves as
/// that seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Utg,
    UtgPlusOne,
    Mp,
    MpPlusOne,
    Co,
    Btn,
    Sb,
    Bb,
    Other(String),
}

impl Position {
    pub const KNOWN: [Position; 8] = [
        Position::Utg,
        Position::UtgPlusOne,
        Position::Mp,
        Position::MpPlusOne,
        Position::Co,
        Position::Btn,
        Position::Sb,
        Position::Bb,
    ];

    pub fn parse(label: &str) -> Self {
        match label {
            "UTG" => Position::Utg,
            "UTG+1" => Position::UtgPlusOne,
            "MP" => Position::Mp,
            "MP+1" => Position::MpPlusOne,
            "CO" => Position::Co,
            "BTN" => Position::Btn,
            "SB" => Position::Sb,
            "BB" => Position::Bb,
            other => Position::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Position::Utg => "UTG",
            Position::UtgPlusOne => "UTG+1",
            Position::Mp => "MP",
            Position::MpPlusOne => "MP+1",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
            Position::Other(label) => label,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self.normalized() {
            Position::Utg => 0.7,
            Position::UtgPlusOne => 0.75,
            Position::Mp => 0.8,
            Position::MpPlusOne => 0.85,
            Position::Co => 0.95,
            Position::Btn => 1.1,
            Position::Sb => 0.8,
            Position::Bb => 0.9,
            Position::Other(_) => DEFAULT_MULTIPLIER,
        }
    }

    /// Maps a hand-built `Other` carrying a known label back to its seat.
    fn normalized(&self) -> Position {
        match self {
            Position::Other(label) => Position::parse(label),
            known => known.clone(),
        }
    }

    pub fn category(&self) -> Option<PositionCategory> {
        match self.normalized() {
            Position::Utg | Position::UtgPlusOne => Some(PositionCategory::Early),
            Position::Mp | Position::MpPlusOne => Some(PositionCategory::Middle),
            Position::Co | Position::Btn => Some(PositionCategory::Late),
            Position::Sb | Position::Bb => Some(PositionCategory::Blinds),
            Position::Other(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self.normalized(), Position::Other(_))
    }
}

impl From<&str> for Position {
    fn from(label: &str) -> Self {
        Position::parse(label)
    }
}

impl From<String> for Position {
    fn from(label: String) -> Self {
        Position::parse(&label)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.label().to_string()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionCategory {
    #[serde(rename = "Early Position")]
    Early,
    #[serde(rename = "Middle Position")]
    Middle,
    #[serde(rename = "Late Position")]
    Late,
    #[serde(rename = "Blinds")]
    Blinds,
}

/// Reference frequencies for a group of seats. Shown to the user, never used
/// when deciding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionStats {
    pub vpip_range: &'static str,
    pub pfr_range: &'static str,
    pub three_bet_range: &'static str,
    pub fold_to_three_bet_range: &'static str,
    pub tip: &'static str,
}

impl PositionCategory {
    pub fn name(self) -> &'static str {
        match self {
            PositionCategory::Early => "Early Position",
            PositionCategory::Middle => "Middle Position",
            PositionCategory::Late => "Late Position",
            PositionCategory::Blinds => "Blinds",
        }
    }

    pub fn stats(self) -> PositionStats {
        match self {
            PositionCategory::Early => PositionStats {
                vpip_range: "15-18%",
                pfr_range: "12-15%",
                three_bet_range: "3-5%",
                fold_to_three_bet_range: "75-80%",
                tip: "Play tight up front; only premium holdings open for value.",
            },
            PositionCategory::Middle => PositionStats {
                vpip_range: "18-22%",
                pfr_range: "15-19%",
                three_bet_range: "4-6%",
                fold_to_three_bet_range: "70-75%",
                tip: "Widen slightly from early seats and watch the aggressive players behind you.",
            },
            PositionCategory::Late => PositionStats {
                vpip_range: "22-27%",
                pfr_range: "18-24%",
                three_bet_range: "5-8%",
                fold_to_three_bet_range: "65-70%",
                tip: "Acting last lets you open wider and control the size of the pot.",
            },
            PositionCategory::Blinds => PositionStats {
                vpip_range: "20-35%",
                pfr_range: "8-15%",
                three_bet_range: "6-10%",
                fold_to_three_bet_range: "60-70%",
                tip: "Defend on price and look for squeeze spots against late openers.",
            },
        }
    }
}

impl Display for PositionCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
