//! Tableau placement rule.

use crate::cards::{Card, Rank};

/// Can `front` be laid on `back`?
///
/// An empty column (`back = None`) takes only a king. Otherwise `front` must be
/// one rank below `back` and of the opposite color. The same predicate decides
/// single-card placement and where a tableau transfer splits.
#[must_use]
pub fn compatible(back: Option<Card>, front: Card) -> bool {
    match back {
        None => front.rank == Rank::King,
        Some(back) => front.rank.is_just_below(back.rank) && front.color() != back.color(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_empty_column_takes_king_only() {
        assert!(compatible(None, card(Suit::Spades, Rank::King)));
        assert!(compatible(None, card(Suit::Hearts, Rank::King)));
        assert!(!compatible(None, card(Suit::Spades, Rank::Queen)));
        assert!(!compatible(None, card(Suit::Diamond, Rank::Ace)));
    }

    #[test]
    fn test_descending_alternating() {
        let black_seven = card(Suit::Clubs, Rank::Seven);

        assert!(compatible(Some(black_seven), card(Suit::Hearts, Rank::Six)));
        assert!(compatible(Some(black_seven), card(Suit::Diamond, Rank::Six)));
        assert!(!compatible(Some(black_seven), card(Suit::Spades, Rank::Six)));
        assert!(!compatible(Some(black_seven), card(Suit::Clubs, Rank::Six)));
        assert!(!compatible(Some(black_seven), card(Suit::Hearts, Rank::Five)));
        assert!(!compatible(Some(black_seven), card(Suit::Hearts, Rank::Eight)));
    }

    #[test]
    fn test_nothing_goes_on_an_ace() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(!compatible(Some(card(Suit::Spades, Rank::Ace)), card(suit, rank)));
            }
        }
    }
}
