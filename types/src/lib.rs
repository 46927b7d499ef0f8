//! Data types shared between the game rules engine and its callers:
//! cards, wager outcomes, settlement results, and the user balance row
//! the persistence layer stores.

mod cards;
mod economy;

pub use cards::{Card, Rank, Suit};
pub use economy::{Balances, Outcome, SettlementResult, UserId};
