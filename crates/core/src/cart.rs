//! Cart

use rusty_money::{MoneyError, iso::Currency};
use thiserror::Error;

use crate::money::{Price, minor};

/// Errors related to cart construction or totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Quantity is zero or above the product's purchase limit.
    #[error("quantity {quantity} for product {product_id} is outside 1..={max_quantity}")]
    QuantityOutOfRange {
        /// Offending product.
        product_id: String,

        /// Requested quantity.
        quantity: u32,

        /// Purchase limit for the product.
        max_quantity: u32,
    },

    /// Selling price or MRP is below zero.
    #[error("price of product {0} is negative")]
    NegativePrice(String),

    /// Selling price is above the maximum retail price.
    #[error("price of product {0} exceeds its MRP")]
    PriceAboveMrp(String),

    /// Selling price and MRP are in different currencies.
    #[error("price and MRP of product {0} use different currencies")]
    MixedCurrency(String),

    /// An item's currency differs from the cart currency (index, item currency, cart currency).
    #[error("Item {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// No line in the cart references the product.
    #[error("product {0} is not in the cart")]
    NotInCart(String),

    /// A line total does not fit in minor units.
    #[error("line total for product {0} overflowed")]
    Overflow(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A product line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product_id: String,
    name: String,
    quantity: u32,
    max_quantity: u32,
    price: Price,
    mrp: Price,
}

impl CartItem {
    /// Create a validated cart line.
    ///
    /// # Errors
    ///
    /// - [`CartError::QuantityOutOfRange`]: quantity is zero or above `max_quantity`.
    /// - [`CartError::MixedCurrency`]: `price` and `mrp` are in different currencies.
    /// - [`CartError::NegativePrice`]: `price` is below zero.
    /// - [`CartError::PriceAboveMrp`]: `price` is greater than `mrp`.
    /// - [`CartError::Money`]: a price is not a whole number of minor units.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        max_quantity: u32,
        price: Price,
        mrp: Price,
    ) -> Result<Self, CartError> {
        let product_id = product_id.into();

        check_quantity(&product_id, quantity, max_quantity)?;

        if price.currency() != mrp.currency() {
            return Err(CartError::MixedCurrency(product_id));
        }

        if price.is_negative() || mrp.is_negative() {
            return Err(CartError::NegativePrice(product_id));
        }

        if price.try_to_minor_units()? > mrp.try_to_minor_units()? {
            return Err(CartError::PriceAboveMrp(product_id));
        }

        Ok(Self {
            product_id,
            name: name.into(),
            quantity,
            max_quantity,
            price,
            mrp,
        })
    }

    /// Product reference.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of units.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Purchase limit.
    pub fn max_quantity(&self) -> u32 {
        self.max_quantity
    }

    /// Unit selling price.
    pub fn price(&self) -> &Price {
        &self.price
    }

    /// Unit maximum retail price.
    pub fn mrp(&self) -> &Price {
        &self.mrp
    }

    /// Currency of the line.
    pub fn currency(&self) -> &'static Currency {
        self.price.currency()
    }

    /// Selling price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the total does not fit in minor units.
    pub fn line_total(&self) -> Result<Price, CartError> {
        self.times_quantity(&self.price)
    }

    /// MRP multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the total does not fit in minor units.
    pub fn line_mrp_total(&self) -> Result<Price, CartError> {
        self.times_quantity(&self.mrp)
    }

    /// Difference between the MRP total and the selling total.
    ///
    /// # Errors
    ///
    /// Returns an error if either total overflows.
    pub fn savings(&self) -> Result<Price, CartError> {
        Ok(self.line_mrp_total()?.sub(self.line_total()?)?)
    }

    fn times_quantity(&self, unit: &Price) -> Result<Price, CartError> {
        let total = unit
            .try_to_minor_units()?
            .checked_mul(i64::from(self.quantity))
            .ok_or_else(|| CartError::Overflow(self.product_id.clone()))?;

        Ok(minor(total, unit.currency()))
    }
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a cart with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `CartError::CurrencyMismatch` if any item is priced in another currency.
    pub fn with_items(
        items: impl Into<Vec<CartItem>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            let item_currency = item.currency();

            if item_currency == currency {
                Ok(())
            } else {
                Err(CartError::CurrencyMismatch(
                    i,
                    item_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        Ok(Cart { items, currency })
    }

    /// Change the quantity of a line. A quantity of zero removes the line.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotInCart`]: no line references `product_id`.
    /// - [`CartError::QuantityOutOfRange`]: quantity is above the line's limit.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|item| item.product_id == product_id)
            .ok_or_else(|| CartError::NotInCart(product_id.to_string()))?;

        if quantity == 0 {
            self.items.remove(position);

            return Ok(());
        }

        let Some(item) = self.items.get_mut(position) else {
            return Err(CartError::NotInCart(product_id.to_string()));
        };

        check_quantity(&item.product_id, quantity, item.max_quantity)?;

        item.quantity = quantity;

        Ok(())
    }

    /// Sum of selling line totals.
    ///
    /// # Errors
    ///
    /// Returns an error if a line or the sum does not fit in minor units.
    pub fn subtotal(&self) -> Result<Price, CartError> {
        self.sum_lines(CartItem::line_total)
    }

    /// Sum of MRP line totals.
    ///
    /// # Errors
    ///
    /// Returns an error if a line or the sum does not fit in minor units.
    pub fn mrp_total(&self) -> Result<Price, CartError> {
        self.sum_lines(CartItem::line_mrp_total)
    }

    fn sum_lines(
        &self,
        line: impl Fn(&CartItem) -> Result<Price, CartError>,
    ) -> Result<Price, CartError> {
        let total = self
            .items
            .iter()
            .try_fold(0_i64, |acc, item| {
                acc.checked_add(line(item)?.try_to_minor_units()?)
                    .ok_or(CartError::Money(MoneyError::Overflow))
            })?;

        Ok(minor(total, self.currency))
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// The cart lines.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

fn check_quantity(product_id: &str, quantity: u32, max_quantity: u32) -> Result<(), CartError> {
    if quantity == 0 || quantity > max_quantity {
        return Err(CartError::QuantityOutOfRange {
            product_id: product_id.to_string(),
            quantity,
            max_quantity,
        });
    }

    Ok(())
}
