//! Fixed-point payout multipliers.
//!
//! Multipliers are stored in basis points (1.0x = 10_000) so payout
//! arithmetic stays in integers. Applying a multiplier truncates toward
//! zero; fractional currency is never minted.

/// Scaling factor: one whole multiplier unit in basis points.
pub const SCALE: u64 = 10_000;

/// A non-negative payout multiplier with four decimal places of precision.
///
/// Multipliers express TOTAL return: a winning even-money bet uses 2.0x
/// (stake back plus equal winnings), a losing one 0x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Multiplier(u64);

impl Multiplier {
    pub const ZERO: Self = Multiplier(0);
    pub const ONE: Self = Multiplier(SCALE);

    pub const fn from_int(value: u64) -> Self {
        Multiplier(value * SCALE)
    }

    /// Multiplier from a fraction, truncated to basis-point precision.
    /// A zero denominator yields `ZERO`.
    pub const fn from_ratio(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Multiplier(0);
        }
        Multiplier(numerator * SCALE / denominator)
    }

    pub const fn from_basis_points(basis_points: u64) -> Self {
        Multiplier(basis_points)
    }

    pub const fn basis_points(self) -> u64 {
        self.0
    }

    /// Gross return for a stake, truncated toward zero (floor).
    pub fn apply(self, stake: u64) -> u64 {
        let product = (stake as u128) * (self.0 as u128) / (SCALE as u128);
        u64::try_from(product).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int() {
        assert_eq!(Multiplier::from_int(2).basis_points(), 20_000);
        assert_eq!(Multiplier::from_int(0), Multiplier::ZERO);
    }

    #[test]
    fn test_from_ratio() {
        assert_eq!(Multiplier::from_ratio(5, 2).basis_points(), 25_000);
        assert_eq!(Multiplier::from_ratio(39, 20).basis_points(), 19_500);
        assert_eq!(Multiplier::from_ratio(1, 3).basis_points(), 3_333);
        assert_eq!(Multiplier::from_ratio(1, 0), Multiplier::ZERO);
    }

    #[test]
    fn test_apply_exact() {
        assert_eq!(Multiplier::from_int(2).apply(100), 200);
        assert_eq!(Multiplier::from_ratio(5, 2).apply(100), 250);
        assert_eq!(Multiplier::ONE.apply(77), 77);
        assert_eq!(Multiplier::ZERO.apply(100), 0);
    }

    #[test]
    fn test_apply_truncates_toward_zero() {
        // 10 * 1.95 = 19.5 -> 19, never 20.
        assert_eq!(Multiplier::from_ratio(39, 20).apply(10), 19);
        // 7 * 2.5 = 17.5 -> 17.
        assert_eq!(Multiplier::from_ratio(5, 2).apply(7), 17);
        // 1 * 0.95 = 0.95 -> 0.
        assert_eq!(Multiplier::from_ratio(19, 20).apply(1), 0);
    }

    #[test]
    fn test_apply_large_stake_does_not_overflow() {
        let credited = Multiplier::from_int(36).apply(u64::MAX / 10);
        assert!(credited > 0);
    }
}
