//! Crash: a multiplier climbs a tenth per tick until a hidden crash point.
//!
//! The round owns no timer. The crash point is fixed at creation; the
//! caller drives ticks from its own clock and asks what state the round
//! is in after a given number of elapsed ticks.

use fortuna_types::Outcome;
use rand::Rng;

use crate::payout::{Multiplier, SCALE};

/// Multiplier growth per tick (0.1x), in basis points.
const TICK_STEP: u64 = SCALE / 10;

/// State of a crash round at some elapsed tick count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrashState {
    Running(Multiplier),
    Crashed,
}

/// One crash round. The only state is the hidden crash point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrashRound {
    crash_point: u64,
}

impl CrashRound {
    /// Sample the hidden crash point: `max(1.0, (u1*2 + 1) * (u2*2 + 1))`
    /// with both factors uniform in [1, 3), giving points in [1, 9).
    pub fn start(rng: &mut impl Rng) -> Self {
        let a = rng.gen::<f64>() * 2.0 + 1.0;
        let b = rng.gen::<f64>() * 2.0 + 1.0;
        let point = (a * b).max(1.0);
        CrashRound {
            crash_point: (point * SCALE as f64) as u64,
        }
    }

    /// Multiplier displayed after `ticks` elapsed ticks: 1.0 plus 0.1
    /// per tick.
    pub fn multiplier_at(ticks: u32) -> Multiplier {
        Multiplier::from_basis_points(SCALE + TICK_STEP * ticks as u64)
    }

    /// Round state after `ticks`: still running (with the current
    /// multiplier) or crashed.
    pub fn state_at(&self, ticks: u32) -> CrashState {
        let current = SCALE + TICK_STEP * ticks as u64;
        if current >= self.crash_point {
            CrashState::Crashed
        } else {
            CrashState::Running(Multiplier::from_basis_points(current))
        }
    }

    /// Cash out after `ticks`: a win at the running multiplier, or a loss
    /// once the round has crashed.
    pub fn cash_out(&self, ticks: u32) -> (Outcome, Multiplier) {
        match self.state_at(ticks) {
            CrashState::Running(multiplier) => (Outcome::Win, multiplier),
            CrashState::Crashed => (Outcome::Lose, Multiplier::ZERO),
        }
    }

    pub fn crash_point(&self) -> Multiplier {
        Multiplier::from_basis_points(self.crash_point)
    }

    /// Round with a fixed crash point, for scripted tests.
    #[cfg(any(test, feature = "mocks"))]
    pub(crate) fn with_crash_point(multiplier: Multiplier) -> Self {
        CrashRound {
            crash_point: multiplier.basis_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::seeded_rng;

    #[test]
    fn test_crash_point_at_least_one() {
        let mut rng = seeded_rng(6);
        for _ in 0..1_000 {
            let round = CrashRound::start(&mut rng);
            assert!(round.crash_point() >= Multiplier::ONE);
            assert!(round.crash_point() < Multiplier::from_int(9));
        }
    }

    #[test]
    fn test_multiplier_grows_a_tenth_per_tick() {
        assert_eq!(CrashRound::multiplier_at(0), Multiplier::ONE);
        assert_eq!(
            CrashRound::multiplier_at(5),
            Multiplier::from_ratio(3, 2)
        );
        assert_eq!(CrashRound::multiplier_at(10), Multiplier::from_int(2));
    }

    #[test]
    fn test_cash_out_before_crash_wins() {
        let round = CrashRound::with_crash_point(Multiplier::from_int(2));
        let (outcome, multiplier) = round.cash_out(5);
        assert_eq!(outcome, Outcome::Win);
        assert_eq!(multiplier, Multiplier::from_ratio(3, 2));
    }

    #[test]
    fn test_cash_out_at_crash_point_loses() {
        let round = CrashRound::with_crash_point(Multiplier::from_int(2));
        // Ten ticks reach exactly 2.0x, which is where the round crashes.
        assert_eq!(round.cash_out(10), (Outcome::Lose, Multiplier::ZERO));
        assert_eq!(round.state_at(10), CrashState::Crashed);
    }

    #[test]
    fn test_crashed_state_is_terminal() {
        let round = CrashRound::with_crash_point(Multiplier::from_ratio(3, 2));
        assert_eq!(round.state_at(5), CrashState::Crashed);
        assert_eq!(round.state_at(100), CrashState::Crashed);
    }

    #[test]
    fn test_running_multiplier_is_monotone() {
        let round = CrashRound::with_crash_point(Multiplier::from_int(9));
        let mut last = Multiplier::ZERO;
        for ticks in 0..70 {
            match round.state_at(ticks) {
                CrashState::Running(multiplier) => {
                    assert!(multiplier > last);
                    last = multiplier;
                }
                CrashState::Crashed => break,
            }
        }
    }
}
