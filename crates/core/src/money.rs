//! Money

use rusty_money::{Money, iso::Currency};

/// An amount in one of the ISO currencies, held in minor units.
pub type Price = Money<'static, Currency>;

/// Zero in the given currency.
pub fn zero(currency: &'static Currency) -> Price {
    Money::from_minor(0, currency)
}

/// Build an amount from minor units (e.g. paise, pence).
pub fn minor(amount: i64, currency: &'static Currency) -> Price {
    Money::from_minor(amount, currency)
}
