//! Horse race: five runners advance probabilistically each tick; the
//! first past the post wins, paying its odds to anyone who backed it.
//!
//! Longer odds mean a slower horse: a runner with total-return odds of
//! `n` advances each tick with probability `1/n`.

use fortuna_types::Outcome;
use rand::Rng;

use crate::{
    errors::GameError,
    payout::{Multiplier, SCALE},
};

/// Steps from the gate to the post.
pub const TRACK_LENGTH: u8 = 15;

/// A runner: display name and total-return odds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Horse {
    pub name: &'static str,
    pub odds: Multiplier,
}

/// The field, from favorite to long shot.
pub const HORSES: [Horse; 5] = [
    Horse {
        name: "Thunderbolt",
        odds: Multiplier::from_int(2),
    },
    Horse {
        name: "Shadow Runner",
        odds: Multiplier::from_int(3),
    },
    Horse {
        name: "Lucky Star",
        odds: Multiplier::from_int(4),
    },
    Horse {
        name: "Silver Wind",
        odds: Multiplier::from_int(5),
    },
    Horse {
        name: "Golden Flash",
        odds: Multiplier::from_int(6),
    },
];

/// A race in progress: one position per horse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Race {
    positions: [u8; HORSES.len()],
}

impl Race {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the field one tick. Returns the winner's index as soon as
    /// a horse reaches the post; earlier gate position breaks a same-tick
    /// tie.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<usize> {
        for (index, horse) in HORSES.iter().enumerate() {
            if rng.gen_range(0..horse.odds.basis_points()) < SCALE {
                self.positions[index] += 1;
            }
            if self.positions[index] >= TRACK_LENGTH {
                return Some(index);
            }
        }
        None
    }

    /// Run the race to completion and return the winner's index.
    pub fn run(rng: &mut impl Rng) -> usize {
        let mut race = Race::new();
        loop {
            if let Some(winner) = race.tick(rng) {
                return winner;
            }
        }
    }

    pub fn positions(&self) -> &[u8] {
        &self.positions
    }
}

/// Judge a pick once the race is decided: backing the winner pays the
/// winner's odds.
pub fn judge(pick: usize, winner: usize) -> Result<(Outcome, Multiplier), GameError> {
    if pick >= HORSES.len() || winner >= HORSES.len() {
        return Err(GameError::InvalidMove);
    }
    if pick == winner {
        Ok((Outcome::Win, HORSES[winner].odds))
    } else {
        Ok((Outcome::Lose, Multiplier::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::seeded_rng;

    #[test]
    fn test_race_finishes_with_a_valid_winner() {
        let mut rng = seeded_rng(10);
        for _ in 0..50 {
            let winner = Race::run(&mut rng);
            assert!(winner < HORSES.len());
        }
    }

    #[test]
    fn test_positions_stay_on_the_track() {
        let mut rng = seeded_rng(12);
        let mut race = Race::new();
        while race.tick(&mut rng).is_none() {
            for &position in race.positions() {
                assert!(position < TRACK_LENGTH);
            }
        }
        assert!(race.positions().iter().any(|&p| p >= TRACK_LENGTH));
    }

    #[test]
    fn test_backing_the_winner_pays_its_odds() {
        let (outcome, multiplier) = judge(2, 2).unwrap();
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(multiplier, HORSES[2].odds);
    }

    #[test]
    fn test_backing_a_loser_forfeits() {
        let (outcome, multiplier) = judge(0, 4).unwrap();
        assert_eq!(outcome, Outcome::Lose);
        assert_eq!(multiplier, Multiplier::ZERO);
    }

    #[test]
    fn test_out_of_field_pick_rejected() {
        assert_eq!(judge(5, 0), Err(GameError::InvalidMove));
        assert_eq!(judge(0, 5), Err(GameError::InvalidMove));
    }

    #[test]
    fn test_favorite_wins_more_often_than_long_shot() {
        let mut rng = seeded_rng(13);
        let mut wins = [0u32; HORSES.len()];
        for _ in 0..300 {
            wins[Race::run(&mut rng)] += 1;
        }
        assert!(wins[0] > wins[4]);
    }
}
