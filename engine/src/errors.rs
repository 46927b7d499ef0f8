use thiserror::Error;

/// Error during game execution.
///
/// All variants are caller-contract violations or round-local faults;
/// none is fatal to the hosting process, and none warrants a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Draw attempted on an exhausted deck.
    #[error("deck is exhausted")]
    EmptyDeck,
    /// Settlement requested for a zero stake.
    #[error("stake must be positive")]
    InvalidStake,
    /// Action is not legal in the current game state.
    #[error("invalid move for current game state")]
    InvalidMove,
    /// The user already has a live game session.
    #[error("a game session is already active for this user")]
    SessionActive,
}
