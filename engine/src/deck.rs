//! A single-use, owned deck of the 52 standard cards.

use fortuna_types::{Card, Rank, Suit};
use rand::Rng;

use crate::{errors::GameError, rng};

/// An ordered deck, created shuffled and consumed by popping from the end.
/// Dealt cards are never returned, so no two draws from the same deck are
/// equal; the deck shrinks monotonically until the game discards it.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build all 52 suit/rank combinations in fixed enumeration order,
    /// then apply a uniform Fisher-Yates shuffle from the injected source.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        rng::shuffle(rng, &mut cards);
        Deck { cards }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deck with a known order; cards are drawn from the end.
    #[cfg(any(test, feature = "mocks"))]
    pub(crate) fn stacked(cards: Vec<Card>) -> Self {
        Deck { cards }
    }
}
