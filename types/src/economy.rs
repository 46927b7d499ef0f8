use serde::{Deserialize, Serialize};

/// User identifier in the surrounding chat platform.
pub type UserId = u64;

/// Terminal classification of a wagered round.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The wager pays out at the round's multiplier.
    Win,
    /// The stake is forfeited.
    Lose,
    /// The stake is returned unchanged.
    Push,
    /// The player busted; treated as a loss for bookkeeping.
    Bust,
}

impl Outcome {
    pub fn is_loss(&self) -> bool {
        matches!(self, Outcome::Lose | Outcome::Bust)
    }
}

/// Exact amounts a settled wager owes the balance store.
///
/// `credited` is the gross return (stake included on wins and pushes);
/// `net_delta` is the single signed change to apply to the wallet.
/// The won/lost counters take net amounts, never gross.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementResult {
    pub credited: u64,
    pub net_delta: i64,
    pub won_delta: u64,
    pub lost_delta: u64,
}

/// Balance row the persistence collaborator stores per user.
///
/// Deltas must be applied additively (increments), never by replacing the
/// stored row with a locally computed value; two concurrent settlements
/// for the same user must both land.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balances {
    pub wallet: u64,
    pub bank: u64,
    pub total_won: u64,
    pub total_lost: u64,
}

impl Balances {
    /// Apply a settlement's deltas. The wallet floors at zero rather than
    /// wrapping; the stake was validated against the wallet by the caller,
    /// so hitting the floor indicates a caller bug, not corruption.
    pub fn apply(&mut self, result: &SettlementResult) {
        if result.net_delta >= 0 {
            self.wallet = self.wallet.saturating_add(result.net_delta as u64);
        } else {
            self.wallet = self.wallet.saturating_sub(result.net_delta.unsigned_abs());
        }
        self.total_won = self.total_won.saturating_add(result.won_delta);
        self.total_lost = self.total_lost.saturating_add(result.lost_delta);
    }
}
