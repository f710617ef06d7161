use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2 through 14 with the ace high.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn letter(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Rank::ALL.into_iter().find(|rank| rank.letter() == upper)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Pretty form with the suit glyph, e.g. `A♠`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.rank, self.suit.symbol())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses a two character card code such as `AH` or `ts`.
impl FromStr for Card {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ValidationError::CardLength(s.to_string()));
        };
        let rank = Rank::from_letter(rank).ok_or(ValidationError::InvalidRank(rank))?;
        let suit = Suit::from_letter(suit).ok_or(ValidationError::InvalidSuit(suit))?;
        Ok(Card::new(rank, suit))
    }
}

/// Two hole cards with no meaningful order.
///
/// The pair is stored highest card first so that `StartingHand::new(a, b)` and
/// `StartingHand::new(b, a)` are the same value. The two cards are not required
/// to be distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartingHand {
    high: Card,
    low: Card,
}

impl StartingHand {
    pub fn new(first: Card, second: Card) -> Self {
        if first >= second {
            Self {
                high: first,
                low: second,
            }
        } else {
            Self {
                high: second,
                low: first,
            }
        }
    }

    pub fn high(&self) -> Card {
        self.high
    }

    pub fn low(&self) -> Card {
        self.low
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.high, self.low]
    }

    pub fn is_suited(&self) -> bool {
        self.high.suit == self.low.suit
    }

    pub fn is_pocket_pair(&self) -> bool {
        self.high.rank == self.low.rank
    }
}

impl Display for StartingHand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.high, self.low)
    }
}

pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}
