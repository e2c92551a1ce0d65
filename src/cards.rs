//! Card identity: rank, suit and the two-character card id ("As", "Td").
//!
//! Ranks and suits are declared in the order a card picker lays out a fresh
//! deck (spades first, Ace first), and their derived ordering follows that
//! layout. There is no notion of hand strength here.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
}

impl Rank {
    /// Every rank, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    // indexed like ALL
    const CHARS: [char; 13] = ['A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2'];

    pub const fn to_char(self) -> char {
        Self::CHARS[self as usize]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        Self::CHARS
            .iter()
            .position(|&r| r == upper)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| RankParseError::Invalid(c.to_string()))
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    /// A single rank character, or "10" for the ten.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "10" {
            return Ok(Rank::Ten);
        }
        match single_char(t) {
            Some(c) => Rank::try_from(c),
            None => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    const LETTERS: [char; 4] = ['s', 'h', 'd', 'c'];
    const SYMBOLS: [char; 4] = ['♠', '♥', '♦', '♣'];
    const NAMES: [&'static str; 4] = ["spades", "hearts", "diamonds", "clubs"];

    /// Lowercase letter used in card ids.
    pub const fn to_char(self) -> char {
        Self::LETTERS[self as usize]
    }

    pub const fn symbol(self) -> char {
        Self::SYMBOLS[self as usize]
    }

    fn from_index(i: usize) -> Self {
        Self::ALL[i]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;

    /// Accepts the id letter in either case or the suit symbol.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let lower = c.to_ascii_lowercase();
        Self::LETTERS
            .iter()
            .position(|&l| l == lower)
            .or_else(|| Self::SYMBOLS.iter().position(|&s| s == c))
            .map(Suit::from_index)
            .ok_or_else(|| SuitParseError::Invalid(c.to_string()))
    }
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Some(c) = single_char(t) {
            return Suit::try_from(c);
        }
        Self::NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(t))
            .map(Suit::from_index)
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// A playing card. Whether it is in use at the table is tracked by the
/// [`Deck`](crate::deck::Deck) that owns it.
///
/// ```
/// use holdem_table::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.id(), "As");
/// assert_eq!(card.pretty(), "A♠");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Rank character plus suit letter; unique per card.
    pub fn id(self) -> String {
        self.to_string()
    }

    pub fn pretty(self) -> String {
        format!("{}{}", self.rank, self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Rank text followed by one suit character: "As", "10d", "T♣".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t.char_indices().last() {
            Some((split, suit)) if split > 0 => {
                Ok(Card::new(t[..split].parse()?, Suit::try_from(suit)?))
            }
            _ => Err(CardParseError::Invalid(s.to_string())),
        }
    }
}

/// Parse cards separated by whitespace or commas.
///
/// ```
/// use holdem_table::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
