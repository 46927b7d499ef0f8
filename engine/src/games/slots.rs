//! Three-reel slot machine.
//!
//! Pays 5x for three of a kind and 2x for a pair on adjacent reels.

use fortuna_types::Outcome;
use rand::Rng;

use crate::payout::Multiplier;

/// Reel symbols, sampled uniformly per reel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Cherry,
    Orange,
    Lemon,
    Grape,
    Diamond,
    Seven,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Cherry,
        Symbol::Orange,
        Symbol::Lemon,
        Symbol::Grape,
        Symbol::Diamond,
        Symbol::Seven,
    ];
}

/// One spin of the three reels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spin {
    pub reels: [Symbol; 3],
}

/// Spin three independent uniform reels.
pub fn spin(rng: &mut impl Rng) -> Spin {
    let mut reels = [Symbol::Cherry; 3];
    for reel in &mut reels {
        *reel = Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())];
    }
    Spin { reels }
}

impl Spin {
    /// Classify the spin against the pay table.
    pub fn judge(&self) -> (Outcome, Multiplier) {
        let [left, middle, right] = self.reels;
        if left == middle && middle == right {
            (Outcome::Win, Multiplier::from_int(5))
        } else if left == middle || middle == right {
            (Outcome::Win, Multiplier::from_int(2))
        } else {
            (Outcome::Lose, Multiplier::ZERO)
        }
    }
}
