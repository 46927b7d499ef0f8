//! Game rules for a chat-casino economy.
//!
//! Everything here is pure and synchronous: decks and blackjack rounds own
//! their state exclusively, settlement is a function from (stake, outcome,
//! multiplier) to exact balance deltas, and randomness enters only through
//! injected `rand::Rng` parameters. Persistence and presentation stay with
//! the caller.

pub mod blackjack;
pub mod deck;
pub mod errors;
pub mod games;
pub mod payout;
pub mod rng;
pub mod session;
pub mod settle;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use deck::Deck;
pub use errors::GameError;
pub use payout::Multiplier;
pub use settle::settle;
