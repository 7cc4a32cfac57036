//! The transition function.
//!
//! `execute` takes a state and one action and returns either a brand-new
//! state or the reason the action is illegal. The input is never modified:
//! each helper clones the (persistent, O(1)-clone) state and replaces the
//! zones it touches.
//!
//! Lazy reveals happen here. When a stock placeholder is drawn, or when a
//! tableau pile loses its last face-up card while face-down cards remain, an
//! identity is drawn from the unseen pool with the caller's RNG.

use im::Vector;
use tracing::trace;

use crate::cards::{Card, Rank, StockCard};
use crate::core::{
    Action, GameRng, GameState, IllegalMove, KlondikeConfig, Location, RecyclePolicy,
};
use crate::rules::compatible;
use crate::zones::{Pile, UnseenPool};

/// Apply `action` to `state`.
pub(crate) fn execute(
    config: &KlondikeConfig,
    state: &GameState,
    action: Action,
    rng: &mut GameRng,
) -> Result<GameState, IllegalMove> {
    let outcome = match action {
        Action::Draw => draw(config, state, rng),
        Action::Move { src, dest } => play(state, src, dest, rng),
    };

    match outcome {
        Ok(mut next) => {
            next.step_count = state.step_count.saturating_add(1);
            Ok(next)
        }
        Err(reason) => {
            trace!(%action, %reason, "rejected");
            Err(reason)
        }
    }
}

// =============================================================================
// Draw
// =============================================================================

fn draw(
    config: &KlondikeConfig,
    state: &GameState,
    rng: &mut GameRng,
) -> Result<GameState, IllegalMove> {
    let mut next = state.clone();

    match next.stock.pop_back() {
        None => {
            if config.recycle == RecyclePolicy::SkipIdle && state.waste.len() <= 1 {
                return Err(IllegalMove::IdleRecycle);
            }
            // The first card dealt to the waste comes back first.
            next.stock = state.waste.iter().rev().map(|&c| StockCard::Known(c)).collect();
            next.waste = Vector::new();
            trace!(cards = next.stock.len(), "recycled waste into stock");
        }
        Some(StockCard::Known(card)) => next.waste.push_back(card),
        Some(StockCard::Unknown) => {
            let (unseen, card) = state.unseen.draw(rng).ok_or(IllegalMove::UnseenExhausted)?;
            trace!(%card, "revealed from stock");
            next.unseen = unseen;
            next.waste.push_back(card);
        }
    }

    Ok(next)
}

// =============================================================================
// Moves
// =============================================================================

fn play(
    state: &GameState,
    src: Location,
    dest: Location,
    rng: &mut GameRng,
) -> Result<GameState, IllegalMove> {
    let card = state.top_card(src).ok_or(IllegalMove::EmptySource(src))?;
    if !dest.is_valid() {
        return Err(IllegalMove::InvalidDestination(dest));
    }

    match (src, dest) {
        (Location::Pile(from), Location::Pile(to)) => {
            transfer(state, usize::from(from), usize::from(to), rng)
        }
        (_, Location::Pile(to)) => place(state, src, card, usize::from(to), rng),
        (_, Location::Foundation(to)) => promote(state, src, card, usize::from(to), rng),
        (_, Location::WastePile) => Err(IllegalMove::InvalidDestination(dest)),
    }
}

/// Tableau to tableau.
///
/// The first card in the source's visible run that fits the destination top
/// splits the run; everything from there up moves as one unit.
fn transfer(
    state: &GameState,
    from: usize,
    to: usize,
    rng: &mut GameRng,
) -> Result<GameState, IllegalMove> {
    let onto = state.piles[to].top();
    let offset = state.piles[from]
        .visible()
        .iter()
        .position(|&card| compatible(onto, card))
        .ok_or(IllegalMove::NoTransferPoint {
            src: Location::pile(from),
            dest: Location::pile(to),
        })?;

    let (left, run) = state.piles[from].split_at(offset);
    let (left, unseen) = settle(left, &state.unseen, rng)?;

    let mut next = state.clone();
    next.piles[to] = state.piles[to].with_run(run);
    next.piles[from] = left;
    next.unseen = unseen;
    Ok(next)
}

/// Single card from a foundation or the waste onto a tableau pile.
fn place(
    state: &GameState,
    src: Location,
    card: Card,
    to: usize,
    rng: &mut GameRng,
) -> Result<GameState, IllegalMove> {
    if !compatible(state.piles[to].top(), card) {
        return Err(IllegalMove::Incompatible {
            card,
            dest: Location::pile(to),
        });
    }

    let (mut next, card) = take_top(state, src, rng)?;
    next.piles[to] = next.piles[to].with_card(card);
    Ok(next)
}

/// Single card onto its suit's foundation.
fn promote(
    state: &GameState,
    src: Location,
    card: Card,
    to: usize,
    rng: &mut GameRng,
) -> Result<GameState, IllegalMove> {
    let dest = Location::foundation(to);
    if card.suit.index() != to {
        return Err(IllegalMove::WrongFoundation { card, dest });
    }

    match state.foundations[to].top() {
        None if card.rank != Rank::Ace => {
            return Err(IllegalMove::NonAceOnEmptyFoundation { card, dest });
        }
        Some(_) if card.rank == Rank::Ace => {
            return Err(IllegalMove::AceOnOccupiedFoundation { card, dest });
        }
        Some(top) if !top.rank.is_just_below(card.rank) => {
            return Err(IllegalMove::OutOfSequence { card, dest });
        }
        _ => {}
    }

    let (mut next, card) = take_top(state, src, rng)?;
    next.foundations[to] = next.foundations[to].with_card(card);
    Ok(next)
}

// =============================================================================
// Helpers
// =============================================================================

/// Remove the top card of `src`, revealing a hidden card if a pile empties.
fn take_top(
    state: &GameState,
    src: Location,
    rng: &mut GameRng,
) -> Result<(GameState, Card), IllegalMove> {
    let mut next = state.clone();

    let card = match src {
        Location::Pile(i) => {
            let i = usize::from(i);
            let pile = &state.piles[i];
            let (left, mut run) = pile.split_at(pile.visible().len().saturating_sub(1));
            let card = run.pop_back().ok_or(IllegalMove::EmptySource(src))?;
            let (left, unseen) = settle(left, &state.unseen, rng)?;
            next.piles[i] = left;
            next.unseen = unseen;
            card
        }
        Location::Foundation(i) => {
            let i = usize::from(i);
            let (rest, card) = state.foundations[i]
                .popped()
                .ok_or(IllegalMove::EmptySource(src))?;
            next.foundations[i] = rest;
            card
        }
        Location::WastePile => next.waste.pop_back().ok_or(IllegalMove::EmptySource(src))?,
    };

    Ok((next, card))
}

/// Auto-reveal: a pile whose visible run is gone flips its next hidden card.
fn settle(
    pile: Pile,
    unseen: &UnseenPool,
    rng: &mut GameRng,
) -> Result<(Pile, UnseenPool), IllegalMove> {
    if !pile.needs_reveal() {
        return Ok((pile, unseen.clone()));
    }
    let (rest, card) = unseen.draw(rng).ok_or(IllegalMove::UnseenExhausted)?;
    trace!(%card, hidden_left = pile.hidden_left() - 1, "revealed tableau card");
    Ok((pile.revealed(card), rest))
}
