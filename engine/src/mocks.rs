//! Test fixtures: shorthand card construction, scripted decks, and a
//! seeded RNG for reproducible play.

use fortuna_types::{Card, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;

/// Shorthand for `Card::new`.
pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Deck that yields `cards` in the listed order (first listed is drawn
/// first).
pub fn scripted_deck(cards: &[Card]) -> Deck {
    let mut stacked: Vec<Card> = cards.to_vec();
    stacked.reverse();
    Deck::stacked(stacked)
}

/// Deterministic RNG for reproducible shuffles, spins, and races.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
