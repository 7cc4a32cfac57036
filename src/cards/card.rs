//! Card taxonomy: ranks, suits, colors, and cards.
//!
//! A `Card` is always a concrete (suit, rank) pair. Positions whose identity
//! has not been decided yet are modelled one level up, by `StockCard::Unknown`
//! in the stock and by a bare count in each tableau pile.

use serde::{Deserialize, Serialize};

/// Card rank, Ace (1) through King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
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
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Numeric value (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from its numeric value, `None` outside 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// True if `self` sits exactly one below `other`.
    #[must_use]
    pub const fn is_just_below(self, other: Rank) -> bool {
        self as u8 + 1 == other as u8
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// Card color. A pure function of the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
///
/// The discriminant doubles as the foundation index the suit is locked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Diamond = 0,
    Clubs = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Foundation index this suit is promoted to.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Suit for a foundation index, `None` outside 0..4.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Suit::Diamond => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };
        write!(f, "{letter}")
    }
}

/// A card with a decided identity.
///
/// Once created, a card's identity never changes; zones move it around by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Dense index in 0..52, suit-major.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.suit.index() * 13 + (self.rank.value() as usize - 1)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}{}]", self.rank, self.suit)
    }
}

/// A card sitting in the stock.
///
/// `Unknown` is a placeholder for a position that has never been seen; its
/// identity is drawn from the unseen pool the first time it is drawn.
/// `Known` cards have been revealed once already and came back via a recycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockCard {
    Known(Card),
    Unknown,
}

impl StockCard {
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, StockCard::Known(_))
    }

    /// The card, if its identity is already decided.
    #[must_use]
    pub const fn known(self) -> Option<Card> {
        match self {
            StockCard::Known(card) => Some(card),
            StockCard::Unknown => None,
        }
    }
}

impl From<Card> for StockCard {
    fn from(card: Card) -> Self {
        StockCard::Known(card)
    }
}

impl std::fmt::Display for StockCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockCard::Known(card) => write!(f, "{card}"),
            StockCard::Unknown => write!(f, "[?]"),
        }
    }
}
