//! Aggregates
//!
//! Figures shown on dashboard cards: ad click-through rate, customer lifetime value and
//! average order value.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{MoneyError, iso::Currency};

use crate::money::{Price, minor, zero};

/// Click-through rate as a percentage rounded to two decimal places. `None` without impressions.
pub fn click_through_rate(clicks: u64, impressions: u64) -> Option<Decimal> {
    if impressions == 0 {
        return None;
    }

    let rate = Decimal::from(clicks)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_div(Decimal::from(impressions))?;

    Some(rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Render a percentage for display, e.g. `3.25%`.
pub fn format_percentage(percent: Decimal) -> String {
    format!("{}%", percent.normalize())
}

/// Sum of a customer's order totals.
///
/// # Errors
///
/// Returns a [`MoneyError`] if an order is in another currency or the sum does not fit in minor
/// units.
pub fn lifetime_value<'a>(
    order_totals: impl IntoIterator<Item = &'a Price>,
    currency: &'static Currency,
) -> Result<Price, MoneyError> {
    let total = order_totals
        .into_iter()
        .try_fold(zero(currency), |acc, total| acc.add(*total))?;

    Ok(minor(total.try_to_minor_units()?, currency))
}

/// Lifetime value divided by the number of orders, rounded half away from zero to the minor unit.
/// `None` when there are no orders.
pub fn average_order_value(lifetime_value: &Price, orders: u32) -> Option<Price> {
    if orders == 0 {
        return None;
    }

    let average = Decimal::from(lifetime_value.try_to_minor_units().ok()?)
        .checked_div(Decimal::from(orders))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()?;

    Some(minor(average, lifetime_value.currency()))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn ctr_is_rounded_percentage() {
        assert_eq!(click_through_rate(1, 3), Some(Decimal::new(33_33, 2)));
        assert_eq!(click_through_rate(2, 3), Some(Decimal::new(66_67, 2)));
        assert_eq!(click_through_rate(0, 50), Some(Decimal::ZERO));
    }

    #[test]
    fn ctr_without_impressions_is_undefined() {
        assert_eq!(click_through_rate(5, 0), None);
    }

    #[test]
    fn percentage_formatting_drops_trailing_zeros() {
        assert_eq!(format_percentage(Decimal::new(12_50, 2)), "12.5%");
        assert_eq!(format_percentage(Decimal::new(3_25, 2)), "3.25%");
    }

    #[test]
    fn lifetime_value_sums_orders() -> TestResult {
        let orders = [minor(1_200_00, iso::INR), minor(800_50, iso::INR)];

        assert_eq!(lifetime_value(&orders, iso::INR)?, minor(2_000_50, iso::INR));
        assert_eq!(lifetime_value([], iso::INR)?, zero(iso::INR));

        Ok(())
    }

    #[test]
    fn lifetime_value_rejects_mixed_currencies() {
        let orders = [minor(100, iso::INR), minor(100, iso::USD)];

        assert!(lifetime_value(&orders, iso::INR).is_err());
    }

    #[test]
    fn average_order_value_rounds_to_minor_units() {
        assert_eq!(
            average_order_value(&minor(1_000, iso::INR), 3),
            Some(minor(333, iso::INR))
        );
        assert_eq!(
            average_order_value(&minor(1_001, iso::INR), 2),
            Some(minor(501, iso::INR))
        );
        assert_eq!(average_order_value(&minor(1_000, iso::INR), 0), None);
    }
}
