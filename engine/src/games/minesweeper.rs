//! Minesweeper: reveal tiles, dodge mines, cash out a growing multiplier.
//!
//! The field is 16 tiles with 1-10 mines. Every safe reveal adds
//! `0.1 + 0.05 * mines` to the cashout multiplier; revealing a mine
//! busts the round and forfeits everything.

use fortuna_types::Outcome;
use rand::Rng;

use crate::{
    errors::GameError,
    payout::{Multiplier, SCALE},
};

pub const TILE_COUNT: u8 = 16;
pub const MIN_MINES: u8 = 1;
pub const MAX_MINES: u8 = 10;

/// What a reveal uncovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Safe tile; carries the new cashout multiplier.
    Safe(Multiplier),
    Mine,
}

/// One minesweeper round. Tiles are tracked as bit sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MineField {
    mines: u16,
    revealed: u16,
    multiplier: u64,
    step: u64,
    busted: bool,
}

impl MineField {
    /// Lay `mine_count` mines on distinct tiles. Riskier fields grow the
    /// multiplier faster.
    pub fn new(rng: &mut impl Rng, mine_count: u8) -> Result<Self, GameError> {
        if !(MIN_MINES..=MAX_MINES).contains(&mine_count) {
            return Err(GameError::InvalidMove);
        }

        let mut mines: u16 = 0;
        let mut laid = 0;
        while laid < mine_count {
            let tile = rng.gen_range(0..TILE_COUNT as u32) as u16;
            if mines & (1 << tile) == 0 {
                mines |= 1 << tile;
                laid += 1;
            }
        }

        let step = SCALE / 10 + (mine_count as u64) * (SCALE / 20);
        Ok(MineField {
            mines,
            revealed: 0,
            multiplier: SCALE,
            step,
            busted: false,
        })
    }

    /// Reveal a tile. Tiles may only be revealed once, and nothing can be
    /// revealed after a bust.
    pub fn reveal(&mut self, tile: u8) -> Result<Reveal, GameError> {
        if self.busted || tile >= TILE_COUNT {
            return Err(GameError::InvalidMove);
        }
        let bit = 1u16 << tile;
        if self.revealed & bit != 0 {
            return Err(GameError::InvalidMove);
        }

        self.revealed |= bit;
        if self.mines & bit != 0 {
            self.busted = true;
            return Ok(Reveal::Mine);
        }

        self.multiplier += self.step;
        Ok(Reveal::Safe(Multiplier::from_basis_points(self.multiplier)))
    }

    /// Cash out: the accumulated multiplier while alive, a bust after a
    /// mine. Cashing out before any reveal returns the stake (1.0x).
    pub fn cash_out(&self) -> (Outcome, Multiplier) {
        if self.busted {
            (Outcome::Bust, Multiplier::ZERO)
        } else {
            (Outcome::Win, Multiplier::from_basis_points(self.multiplier))
        }
    }

    pub fn is_busted(&self) -> bool {
        self.busted
    }

    pub fn revealed_count(&self) -> u32 {
        self.revealed.count_ones()
    }

    /// Field with mines on the given tiles, for scripted tests.
    #[cfg(any(test, feature = "mocks"))]
    pub(crate) fn with_mines(tiles: &[u8], mine_count_for_step: u8) -> Self {
        let mut mines: u16 = 0;
        for &tile in tiles {
            mines |= 1 << tile;
        }
        MineField {
            mines,
            revealed: 0,
            multiplier: SCALE,
            step: SCALE / 10 + (mine_count_for_step as u64) * (SCALE / 20),
            busted: false,
        }
    }
}
