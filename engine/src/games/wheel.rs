//! Wheel of fortune: weighted segments, one spin.

use fortuna_types::Outcome;
use rand::Rng;

use crate::{payout::Multiplier, rng};

/// One wheel segment: its total-return multiplier and percent chance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub multiplier: Multiplier,
    pub chance: u8,
}

/// The wheel layout. Chances sum to 100; the 0x segment is the loss.
pub const SEGMENTS: [Segment; 4] = [
    Segment {
        multiplier: Multiplier::from_int(2),
        chance: 30,
    },
    Segment {
        multiplier: Multiplier::from_int(3),
        chance: 20,
    },
    Segment {
        multiplier: Multiplier::from_int(5),
        chance: 10,
    },
    Segment {
        multiplier: Multiplier::ZERO,
        chance: 40,
    },
];

/// Spin the wheel: one percent roll walked along cumulative chances.
pub fn spin(rng: &mut impl Rng) -> Segment {
    let roll = rng::roll_percent(rng);
    let mut cumulative = 0u32;
    for segment in SEGMENTS {
        cumulative += segment.chance as u32;
        if roll < cumulative {
            return segment;
        }
    }
    SEGMENTS[SEGMENTS.len() - 1]
}

impl Segment {
    /// A 0x segment is a loss; anything else pays its multiplier.
    pub fn judge(&self) -> (Outcome, Multiplier) {
        if self.multiplier == Multiplier::ZERO {
            (Outcome::Lose, Multiplier::ZERO)
        } else {
            (Outcome::Win, self.multiplier)
        }
    }
}
