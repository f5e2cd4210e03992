//! Money truncation helpers.
//!
//! Every calculator truncates monetary amounts through this module so the
//! floor policy lives in one place. Truncation always floors (never
//! rounds), under-promising fractional currency.

use rust_decimal::Decimal;

/// Floors a monetary amount to a whole currency unit.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::floor_to_unit;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("41666.67").unwrap();
/// assert_eq!(floor_to_unit(amount), Decimal::from(41666));
/// ```
pub fn floor_to_unit(amount: Decimal) -> Decimal {
    amount.floor()
}

/// Applies a fractional rate to an amount and floors the result.
///
/// This is the standard derivation step for salary components:
/// `floor(amount × rate)`.
pub fn floor_percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    (amount * rate).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_floor_to_unit_truncates_fractions() {
        assert_eq!(floor_to_unit(dec("41666.99")), dec("41666"));
        assert_eq!(floor_to_unit(dec("41666.01")), dec("41666"));
        assert_eq!(floor_to_unit(dec("41666")), dec("41666"));
    }

    #[test]
    fn test_floor_never_rounds_up() {
        // 16666 * 0.12 = 1999.92 floors to 1999, not 2000
        assert_eq!(floor_percent_of(dec("16666"), dec("0.12")), dec("1999"));
    }

    #[test]
    fn test_floor_percent_of_exact_product() {
        assert_eq!(floor_percent_of(dec("10000"), dec("0.12")), dec("1200"));
    }

    #[test]
    fn test_floor_of_zero_is_zero() {
        assert_eq!(floor_to_unit(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(floor_percent_of(Decimal::ZERO, dec("0.40")), Decimal::ZERO);
    }
}
