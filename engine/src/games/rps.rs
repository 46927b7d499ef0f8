//! Rock-paper-scissors against the house. Ties return the stake.

use fortuna_types::Outcome;
use rand::Rng;

use crate::payout::Multiplier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];

    /// Whether this shape beats `other`.
    pub fn beats(&self, other: Shape) -> bool {
        matches!(
            (self, other),
            (Shape::Rock, Shape::Scissors)
                | (Shape::Paper, Shape::Rock)
                | (Shape::Scissors, Shape::Paper)
        )
    }
}

/// The house picks uniformly.
pub fn house_pick(rng: &mut impl Rng) -> Shape {
    Shape::ALL[rng.gen_range(0..Shape::ALL.len())]
}

/// Judge the player's shape against the house's.
pub fn judge(player: Shape, house: Shape) -> (Outcome, Multiplier) {
    if player == house {
        (Outcome::Push, Multiplier::ONE)
    } else if player.beats(house) {
        (Outcome::Win, Multiplier::from_int(2))
    } else {
        (Outcome::Lose, Multiplier::ZERO)
    }
}
