//! Arithmetic helpers shared by the calculations.

use rust_decimal::Decimal;
use tracing::warn;

/// Multiplies two decimals, clamping to the representable range on overflow.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::saturating_mul;
///
/// assert_eq!(saturating_mul(dec!(0.18), dec!(50)), dec!(9));
/// assert_eq!(saturating_mul(Decimal::MAX, dec!(2)), Decimal::MAX);
/// assert_eq!(saturating_mul(Decimal::MAX, dec!(-2)), Decimal::MIN);
/// ```
pub fn saturating_mul(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        let bound = if a.is_sign_negative() != b.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        };
        warn!(%a, %b, %bound, "decimal overflow, saturating");
        bound
    })
}

/// Raises a value to the smallest whole number not less than it.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_up_whole;
///
/// assert_eq!(round_up_whole(dec!(4.9995)), dec!(5));
/// assert_eq!(round_up_whole(dec!(9)), dec!(9));
/// assert_eq!(round_up_whole(dec!(-4.5)), dec!(-4));
/// ```
pub fn round_up_whole(value: Decimal) -> Decimal {
    value.ceil()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // saturating_mul tests
    // =========================================================================

    #[test]
    fn saturating_mul_multiplies_in_range() {
        assert_eq!(saturating_mul(dec!(0.15), dec!(33.33)), dec!(4.9995));
    }

    #[test]
    fn saturating_mul_clamps_positive_overflow() {
        assert_eq!(saturating_mul(Decimal::MAX, Decimal::MAX), Decimal::MAX);
        assert_eq!(saturating_mul(Decimal::MIN, Decimal::MIN), Decimal::MAX);
    }

    #[test]
    fn saturating_mul_clamps_negative_overflow() {
        assert_eq!(saturating_mul(Decimal::MIN, dec!(10)), Decimal::MIN);
        assert_eq!(saturating_mul(dec!(10), Decimal::MIN), Decimal::MIN);
    }

    // =========================================================================
    // round_up_whole tests
    // =========================================================================

    #[test]
    fn round_up_whole_raises_fractions() {
        assert_eq!(round_up_whole(dec!(7.01)), dec!(8));
        assert_eq!(round_up_whole(dec!(0.001)), dec!(1));
    }

    #[test]
    fn round_up_whole_preserves_integers() {
        assert_eq!(round_up_whole(dec!(9.000)), dec!(9));
        assert_eq!(round_up_whole(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn round_up_whole_moves_negatives_toward_zero() {
        assert_eq!(round_up_whole(dec!(-4.5)), dec!(-4));
    }
}
