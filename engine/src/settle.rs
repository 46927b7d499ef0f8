//! Wager settlement: the single bookkeeping rule every minigame feeds.

use fortuna_types::{Outcome, SettlementResult};
use tracing::warn;

use crate::{errors::GameError, payout::Multiplier};

/// Settle a wagered round.
///
/// Pure: no balance is touched here. The caller applies the returned
/// deltas through its balance store. Credited amounts are gross (stake
/// included on wins and pushes); the won/lost counters take net amounts.
/// Fractional returns are truncated toward zero.
///
/// The stake must be positive; games never reach settlement with a zero
/// stake if the caller validated input, so a zero here is a contract
/// violation, not a game outcome.
pub fn settle(
    stake: u64,
    outcome: Outcome,
    multiplier: Multiplier,
) -> Result<SettlementResult, GameError> {
    if stake == 0 {
        return Err(GameError::InvalidStake);
    }

    let result = match outcome {
        Outcome::Win => {
            let credited = multiplier.apply(stake);
            if credited == 0 {
                warn!(stake, "winning wager credited nothing");
            }
            let net_delta = credited as i64 - stake as i64;
            SettlementResult {
                credited,
                net_delta,
                won_delta: net_delta.max(0) as u64,
                lost_delta: 0,
            }
        }
        Outcome::Lose | Outcome::Bust => SettlementResult {
            credited: 0,
            net_delta: -(stake as i64),
            won_delta: 0,
            lost_delta: stake,
        },
        Outcome::Push => SettlementResult {
            credited: stake,
            net_delta: 0,
            won_delta: 0,
            lost_delta: 0,
        },
    };

    Ok(result)
}
