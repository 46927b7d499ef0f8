//! Per-user game session registry.
//!
//! At most one live game per user id; a second attempt is rejected, never
//! queued. The registry is explicit state owned by the caller, not a
//! process-wide map, so hosting layers can scope and lock it as they see
//! fit.

use std::collections::HashSet;

use fortuna_types::{Outcome, SettlementResult, UserId};
use tracing::{debug, warn};

use crate::{errors::GameError, payout::Multiplier, settle::settle};

/// What happens to the stake when a round expires awaiting player input.
/// The hosting layer picks one; the engine does not guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeoutPolicy {
    ForfeitStake,
    RefundStake,
}

/// Registry of users with a game in flight.
#[derive(Debug, Default)]
pub struct SessionStore {
    active: HashSet<UserId>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the user's game slot for a new round.
    pub fn try_acquire(&mut self, user: UserId) -> Result<(), GameError> {
        if !self.active.insert(user) {
            warn!(user, "rejected concurrent game session");
            return Err(GameError::SessionActive);
        }
        Ok(())
    }

    /// Free the user's game slot once the round settles or expires.
    pub fn release(&mut self, user: UserId) {
        if !self.active.remove(&user) {
            debug!(user, "released a session that was not active");
        }
    }

    pub fn is_active(&self, user: UserId) -> bool {
        self.active.contains(&user)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Resolve a round the player abandoned, under the configured policy:
/// forfeiture books the stake as lost, refund returns it as a push.
pub fn resolve_timeout(
    stake: u64,
    policy: TimeoutPolicy,
) -> Result<SettlementResult, GameError> {
    match policy {
        TimeoutPolicy::ForfeitStake => settle(stake, Outcome::Lose, Multiplier::ZERO),
        TimeoutPolicy::RefundStake => settle(stake, Outcome::Push, Multiplier::ONE),
    }
}
