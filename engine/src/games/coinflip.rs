//! Coin flip against the house: call it right for even money.

use fortuna_types::Outcome;
use rand::Rng;

use crate::payout::Multiplier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Heads,
    Tails,
}

/// Flip a fair coin.
pub fn flip(rng: &mut impl Rng) -> Face {
    if rng.gen_bool(0.5) {
        Face::Heads
    } else {
        Face::Tails
    }
}

/// Judge a call against the flipped face.
pub fn judge(call: Face, flipped: Face) -> (Outcome, Multiplier) {
    if call == flipped {
        (Outcome::Win, Multiplier::from_int(2))
    } else {
        (Outcome::Lose, Multiplier::ZERO)
    }
}
