//! Property tests over random seeded play-throughs.
//!
//! Properties tested:
//! - Every reachable state accounts for each card exactly once
//! - Foundations always hold Ace upward in their own suit
//! - A rejected action leaves its input untouched
//! - A tableau transfer moves a valid run onto a compatible top
//! - Each card leaves the unseen pool at most once, and never returns

mod common;

use std::collections::HashSet;

use proptest::prelude::*;

use common::random_playout;
use lazy_klondike::cards::full_deck;
use lazy_klondike::{
    compatible, universe, Action, Card, GameRng, GameState, Klondike, Location, Rank, RulesEngine,
    Suit,
};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 24,
        ..ProptestConfig::default()
    }
}

fn foundation_in_order(state: &GameState) -> bool {
    state.foundations().iter().enumerate().all(|(index, foundation)| {
        foundation.cards().iter().enumerate().all(|(position, card)| {
            Some(card.suit) == Suit::from_index(index)
                && Some(card.rank) == Rank::from_value(position as u8 + 1)
        })
    })
}

/// Every identity that currently has a known position.
fn known_cards(state: &GameState) -> Vec<Card> {
    state
        .piles()
        .iter()
        .flat_map(|p| p.visible().iter().copied())
        .chain(state.foundations().iter().flat_map(|f| f.cards().iter().copied()))
        .chain(state.waste().iter().copied())
        .chain(state.stock().iter().filter_map(|c| c.known()))
        .collect()
}

proptest! {
    #![proptest_config(config())]

    /// Property: known positions plus the unseen pool are the whole deck
    #[test]
    fn prop_card_conservation(seed in any::<u64>(), policy in any::<u64>()) {
        let game = Klondike::default();
        let deck: HashSet<Card> = full_deck().into_iter().collect();

        let mut failures = Vec::new();
        random_playout(&game, seed, policy, 300, |_, action, after| {
            let mut cards: Vec<Card> = known_cards(after);
            cards.extend(after.unseen().iter());
            let distinct: HashSet<Card> = cards.iter().copied().collect();
            if after.audit().is_err() || cards.len() != 52 || distinct != deck {
                failures.push(action);
            }
        });

        prop_assert!(failures.is_empty(), "conservation broken after {:?}", failures);
    }

    /// Property: each foundation is [Ace, 2, ..., k] of its suit
    #[test]
    fn prop_foundation_monotonicity(seed in any::<u64>(), policy in any::<u64>()) {
        let game = Klondike::default();

        let mut ok = true;
        let end = random_playout(&game, seed, policy, 300, |_, _, after| {
            ok &= foundation_in_order(after);
        });

        prop_assert!(ok);
        prop_assert!(foundation_in_order(&end));
    }

    /// Property: a rejected action never alters the state it was given
    #[test]
    fn prop_idempotent_rejection(seed in any::<u64>(), policy in any::<u64>()) {
        let game = Klondike::default();

        let mut altered = Vec::new();
        random_playout(&game, seed, policy, 60, |before, _, _| {
            let snapshot = before.clone();
            let mut rng = GameRng::new(seed);
            for &action in universe() {
                if game.execute(before, action, &mut rng).is_err() && *before != snapshot {
                    altered.push(action);
                }
            }
        });

        prop_assert!(altered.is_empty(), "rejection altered state: {:?}", altered);
    }

    /// Property: transfers move a descending, alternating run onto a compatible top
    #[test]
    fn prop_transfer_correctness(seed in any::<u64>(), policy in any::<u64>()) {
        let game = Klondike::default();

        let mut bad = Vec::new();
        random_playout(&game, seed, policy, 300, |before, action, after| {
            let Action::Move { src: Location::Pile(a), dest: Location::Pile(b) } = action else {
                return;
            };
            let (a, b) = (usize::from(a), usize::from(b));
            let old_top = before.pile(b).top();
            let landed = before.pile(b).visible().len();
            let run: Vec<Card> = after.pile(b).visible().iter().skip(landed).copied().collect();

            let source = before.pile(a).visible();
            let valid = !run.is_empty()
                && compatible(old_top, run[0])
                && run.windows(2).all(|w| compatible(Some(w[0]), w[1]))
                && source.len() >= run.len()
                && source.iter().skip(source.len() - run.len()).eq(run.iter());
            if !valid {
                bad.push(action);
            }
        });

        prop_assert!(bad.is_empty(), "invalid transfer: {:?}", bad);
    }

    /// Property: each card is revealed from the unseen pool at most once
    #[test]
    fn prop_reveal_exactly_once(seed in any::<u64>(), policy in any::<u64>()) {
        let game = Klondike::default();
        let (dealt, _) = game.deal(Some(seed));
        let mut revealed: HashSet<Card> = known_cards(&dealt).into_iter().collect();

        let mut problems = Vec::new();
        let end = random_playout(&game, seed, policy, 400, |before, action, after| {
            if after.unseen().iter().any(|c| !before.unseen().contains(c)) {
                problems.push(action);
            }
            for card in before.unseen().iter().filter(|c| !after.unseen().contains(*c)) {
                if !revealed.insert(card) {
                    problems.push(action);
                }
            }
        });

        prop_assert!(problems.is_empty(), "bad reveal after {:?}", problems);
        prop_assert_eq!(revealed.len() + end.unseen_len(), 52);
        for card in known_cards(&end) {
            prop_assert!(revealed.contains(&card));
        }
    }
}

// =============================================================================
// Full stock cycle
// =============================================================================

/// Drawing through the whole stock and recycling turns every stock slot into
/// a known card, and leaves exactly the tableau's hidden cards unseen.
#[test]
fn test_stock_cycle_reveals_every_slot() {
    let game = Klondike::default();
    let (dealt, mut rng) = game.deal(Some(2718));
    let stock_slots = dealt.stock_len();

    let mut state = dealt.clone();
    for _ in 0..stock_slots {
        state = game.execute(&state, Action::Draw, &mut rng).unwrap();
    }
    assert_eq!(state.stock_len(), 0);
    assert_eq!(state.waste().len(), stock_slots);

    state = game.execute(&state, Action::Draw, &mut rng).unwrap();

    assert_eq!(state.stock_len(), stock_slots);
    assert!(state.stock().iter().all(|slot| slot.is_known()));
    assert!(state.waste().is_empty());

    let hidden: usize = state.piles().iter().map(|p| p.hidden_left()).sum();
    assert_eq!(state.unseen_len(), hidden);

    let known: HashSet<Card> = known_cards(&state).into_iter().collect();
    assert_eq!(known.len(), 52 - hidden);
    assert!(full_deck()
        .into_iter()
        .all(|card| known.contains(&card) != state.unseen().contains(card)));
    assert_eq!(state.audit(), Ok(()));

    // A second pass replays the same cards without touching the pool.
    let mut again = state.clone();
    for _ in 0..stock_slots {
        again = game.execute(&again, Action::Draw, &mut rng).unwrap();
    }
    assert_eq!(again.unseen(), state.unseen());
    assert_eq!(again.stock_len(), 0);
}
