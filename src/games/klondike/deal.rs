//! Initial deal.
//!
//! The shuffled deck decides only the seven face-up cards. Every other
//! identity goes into the unseen pool, and the positions it will fill are
//! left as hidden counts and `Unknown` stock placeholders.

use im::Vector;
use tracing::debug;

use crate::cards::{full_deck, StockCard};
use crate::core::{GameRng, GameState, STOCK_SIZE, TABLEAU_PILES};
use crate::zones::{Pile, UnseenPool};

/// Deal a fresh game.
///
/// Pile `i` gets `i` hidden cards under one face-up card. The stock is
/// `STOCK_SIZE` placeholders. The other 45 cards form the unseen pool.
pub(crate) fn deal(rng: &mut GameRng) -> GameState {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);

    let face_up = deck.split_off(deck.len() - TABLEAU_PILES);
    let mut state = GameState::empty();
    for (i, card) in face_up.into_iter().rev().enumerate() {
        state = state.with_pile(i, Pile::new(i, Vector::unit(card)));
    }

    let state = state
        .with_stock(std::iter::repeat(StockCard::Unknown).take(STOCK_SIZE))
        .with_unseen(deck.into_iter().collect::<UnseenPool>());

    debug!(seed = rng.seed(), unseen = state.unseen_len(), "dealt new game");
    debug_assert_eq!(state.audit(), Ok(()));
    state
}
