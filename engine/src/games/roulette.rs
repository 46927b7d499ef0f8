//! Single-zero roulette.
//!
//! Bet kinds and their total returns: straight 36x, color/parity/half 2x.
//! Zero defeats every outside bet; only a straight bet on zero pays.

use fortuna_types::Outcome;
use rand::Rng;

use crate::{errors::GameError, payout::Multiplier};

/// Red pockets on a standard wheel.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    /// 1-18
    Low,
    /// 19-36
    High,
}

/// A single roulette bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bet {
    /// Single pocket, 0-36.
    Straight(u8),
    Color(Color),
    Parity(Parity),
    Half(Half),
}

/// Whether a pocket is red. Zero is neither color.
pub fn is_red(pocket: u8) -> bool {
    RED_NUMBERS.contains(&pocket)
}

/// Spin the wheel: a uniform pocket in 0-36.
pub fn spin(rng: &mut impl Rng) -> u8 {
    rng.gen_range(0..37)
}

impl Bet {
    /// Whether this bet wins for the spun pocket.
    pub fn wins(&self, pocket: u8) -> bool {
        // Zero loses every bet except a straight on 0.
        if pocket == 0 {
            return matches!(self, Bet::Straight(0));
        }

        match self {
            Bet::Straight(number) => *number == pocket,
            Bet::Color(Color::Red) => is_red(pocket),
            Bet::Color(Color::Black) => !is_red(pocket),
            Bet::Parity(Parity::Even) => pocket % 2 == 0,
            Bet::Parity(Parity::Odd) => pocket % 2 == 1,
            Bet::Half(Half::Low) => (1..=18).contains(&pocket),
            Bet::Half(Half::High) => (19..=36).contains(&pocket),
        }
    }

    /// Total-return multiplier when this bet wins.
    pub fn multiplier(&self) -> Multiplier {
        match self {
            Bet::Straight(_) => Multiplier::from_int(36),
            Bet::Color(_) | Bet::Parity(_) | Bet::Half(_) => Multiplier::from_int(2),
        }
    }

    /// Judge this bet against a spun pocket. Straight bets must name a
    /// real pocket.
    pub fn judge(&self, pocket: u8) -> Result<(Outcome, Multiplier), GameError> {
        if let Bet::Straight(number) = self {
            if *number > 36 {
                return Err(GameError::InvalidMove);
            }
        }
        if self.wins(pocket) {
            Ok((Outcome::Win, self.multiplier()))
        } else {
            Ok((Outcome::Lose, Multiplier::ZERO))
        }
    }
}
