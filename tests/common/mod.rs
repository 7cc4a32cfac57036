//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use lazy_klondike::{Action, Card, GameRng, GameState, Klondike, Pile, Rank, RulesEngine, Suit, UnseenPool};

static LOGGING: Once = Once::new();

/// Route engine logs to the test writer.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Card from a rank value and a suit.
pub fn card(rank: u8, suit: Suit) -> Card {
    Card::new(suit, Rank::from_value(rank).unwrap())
}

/// Pile with `hidden` face-down cards under `cards`.
pub fn pile(hidden: usize, cards: &[Card]) -> Pile {
    Pile::new(hidden, cards.iter().copied().collect())
}

pub fn pool(cards: &[Card]) -> UnseenPool {
    cards.iter().copied().collect()
}

/// Play up to `max_steps` uniformly random legal actions from a seeded deal.
///
/// Actions are chosen with a generator separate from the game's, so the
/// game RNG only ever feeds reveals. `observe` sees every accepted
/// transition as `(before, action, after)`.
pub fn random_playout<F>(
    game: &Klondike,
    seed: u64,
    policy_seed: u64,
    max_steps: usize,
    mut observe: F,
) -> GameState
where
    F: FnMut(&GameState, Action, &GameState),
{
    init_logging();
    let (mut state, mut rng) = game.deal(Some(seed));
    let mut policy = GameRng::new(policy_seed);

    for _ in 0..max_steps {
        if game.status(&state).is_over() {
            break;
        }
        let actions = game.legal_actions(&state);
        let action = actions[policy.pick_index(actions.len())];
        let next = game
            .execute(&state, action, &mut rng)
            .expect("legal action was rejected");
        observe(&state, action, &next);
        state = next;
    }

    state
}
