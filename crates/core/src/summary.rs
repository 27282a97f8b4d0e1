//! Order Summary
//!
//! The monetary breakdown shown beside the cart and on every checkout step. All arithmetic is
//! performed on minor units so the grand total identity holds exactly:
//!
//! `grand_total = subtotal - coupon - gift card - prepaid discount + shipping + COD fee + tax`

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{MoneyError, iso::Currency};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    money::{Price, minor, zero},
};

/// Errors raised while building or totalling a summary.
#[derive(Debug, Error, PartialEq)]
pub enum SummaryError {
    /// A discount or fee was negative.
    #[error("{0} must not be negative")]
    Negative(SummaryField),

    /// A charge is in a different currency from the cart.
    #[error("{0} has currency {1}, but the order has currency {2}")]
    CurrencyMismatch(SummaryField, &'static str, &'static str),

    /// The prepaid discount percentage could not be applied.
    #[error("prepaid discount percentage could not be applied")]
    PercentConversion,

    /// Cart totals could not be computed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Charge fields that are validated individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryField {
    /// Coupon discount.
    CouponDiscount,

    /// Gift card amount applied.
    GiftCardApplied,

    /// Prepaid discount.
    PrepaidDiscount,

    /// Shipping fee.
    ShippingFee,

    /// Cash-on-delivery fee.
    CodFee,

    /// Tax.
    TaxAmount,
}

impl std::fmt::Display for SummaryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::CouponDiscount => "coupon discount",
            Self::GiftCardApplied => "gift card amount",
            Self::PrepaidDiscount => "prepaid discount",
            Self::ShippingFee => "shipping fee",
            Self::CodFee => "COD fee",
            Self::TaxAmount => "tax amount",
        })
    }
}

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Paid upfront through the payment gateway.
    #[default]
    Prepaid,

    /// Cash on delivery.
    CashOnDelivery,
}

/// Cash-on-delivery availability and fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodConfig {
    /// Whether COD is offered at all.
    pub available: bool,

    /// Fee charged when COD is chosen.
    pub fee: Price,
}

impl CodConfig {
    /// COD switched off.
    pub fn unavailable(currency: &'static Currency) -> Self {
        Self {
            available: false,
            fee: zero(currency),
        }
    }
}

/// Discount offered for paying upfront.
#[derive(Debug, Clone, Copy)]
pub struct PrepaidDiscount {
    /// Share of the subtotal taken off.
    pub percentage: Percentage,

    /// Upper bound on the discount, if any.
    pub max_discount: Option<Price>,
}

impl PrepaidDiscount {
    /// Discount for the given subtotal, rounded half away from zero to the minor unit and capped
    /// at `max_discount`.
    ///
    /// # Errors
    ///
    /// - [`SummaryError::PercentConversion`]: the percentage cannot be applied.
    /// - [`SummaryError::Money`]: an amount does not fit in minor units.
    pub fn discount_for(&self, subtotal: &Price) -> Result<Price, SummaryError> {
        let subtotal_minor = Decimal::from(subtotal.try_to_minor_units()?);

        let discount = (self.percentage * Decimal::ONE)
            .checked_mul(subtotal_minor)
            .ok_or(SummaryError::PercentConversion)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(SummaryError::PercentConversion)?
            .max(0);

        let capped = match &self.max_discount {
            Some(cap) => discount.min(cap.try_to_minor_units()?),
            None => discount,
        };

        Ok(minor(capped, subtotal.currency()))
    }
}

/// Discounts and fees supplied by the commerce backend for the current cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charges {
    /// Coupon discount.
    pub coupon_discount: Price,

    /// Gift card amount applied.
    pub gift_card_applied: Price,

    /// Prepaid discount.
    pub prepaid_discount: Price,

    /// Shipping fee.
    pub shipping_fee: Price,

    /// Cash-on-delivery fee.
    pub cod_fee: Price,

    /// Tax.
    pub tax_amount: Price,
}

impl Charges {
    /// No discounts and no fees.
    pub fn none(currency: &'static Currency) -> Self {
        Self {
            coupon_discount: zero(currency),
            gift_card_applied: zero(currency),
            prepaid_discount: zero(currency),
            shipping_fee: zero(currency),
            cod_fee: zero(currency),
            tax_amount: zero(currency),
        }
    }

    /// Apply either the COD fee or the prepaid discount depending on the payment mode.
    ///
    /// COD only adds its fee when it is available; prepaid orders only get a discount when one is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the prepaid discount cannot be computed.
    pub fn for_payment_mode(
        mut self,
        mode: PaymentMode,
        subtotal: &Price,
        cod: &CodConfig,
        prepaid: Option<&PrepaidDiscount>,
    ) -> Result<Self, SummaryError> {
        let currency = subtotal.currency();

        match mode {
            PaymentMode::CashOnDelivery => {
                self.cod_fee = if cod.available { cod.fee } else { zero(currency) };
                self.prepaid_discount = zero(currency);
            }
            PaymentMode::Prepaid => {
                self.cod_fee = zero(currency);
                self.prepaid_discount = match prepaid {
                    Some(prepaid) => prepaid.discount_for(subtotal)?,
                    None => zero(currency),
                };
            }
        }

        Ok(self)
    }

    fn fields(&self) -> [(SummaryField, &Price); 6] {
        [
            (SummaryField::CouponDiscount, &self.coupon_discount),
            (SummaryField::GiftCardApplied, &self.gift_card_applied),
            (SummaryField::PrepaidDiscount, &self.prepaid_discount),
            (SummaryField::ShippingFee, &self.shipping_fee),
            (SummaryField::CodFee, &self.cod_fee),
            (SummaryField::TaxAmount, &self.tax_amount),
        ]
    }

    fn validate(&self, currency: &'static Currency) -> Result<(), SummaryError> {
        self.fields().into_iter().try_for_each(|(field, amount)| {
            if amount.currency() != currency {
                return Err(SummaryError::CurrencyMismatch(
                    field,
                    amount.currency().iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if amount.try_to_minor_units()? < 0 {
                return Err(SummaryError::Negative(field));
            }

            Ok(())
        })
    }
}

/// Kind of a rendered summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLineKind {
    /// Selling price total.
    Subtotal,

    /// Savings against MRP. Informational: the subtotal already reflects it.
    MrpSavings,

    /// Coupon discount.
    Coupon,

    /// Gift card amount applied.
    GiftCard,

    /// Prepaid discount.
    PrepaidDiscount,

    /// Shipping fee.
    Shipping,

    /// Cash-on-delivery fee.
    CodFee,

    /// Tax.
    Tax,

    /// Amount payable.
    Total,
}

impl SummaryLineKind {
    /// Stable identifier, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subtotal => "subtotal",
            Self::MrpSavings => "mrp_savings",
            Self::Coupon => "coupon",
            Self::GiftCard => "gift_card",
            Self::PrepaidDiscount => "prepaid_discount",
            Self::Shipping => "shipping",
            Self::CodFee => "cod_fee",
            Self::Tax => "tax",
            Self::Total => "total",
        }
    }

    /// Label shown to the customer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Subtotal => "Subtotal",
            Self::MrpSavings => "Discount on MRP",
            Self::Coupon => "Coupon discount",
            Self::GiftCard => "Gift card",
            Self::PrepaidDiscount => "Prepaid discount",
            Self::Shipping => "Shipping",
            Self::CodFee => "COD fee",
            Self::Tax => "Tax",
            Self::Total => "Total",
        }
    }

    /// Whether the line is taken off the total.
    pub fn is_deduction(self) -> bool {
        matches!(self, Self::Coupon | Self::GiftCard | Self::PrepaidDiscount)
    }
}

/// One rendered row of the summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryLine {
    /// What the row represents.
    pub kind: SummaryLineKind,

    /// Unsigned amount; see [`SummaryLineKind::is_deduction`].
    pub amount: Price,
}

/// Order Summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    currency: &'static Currency,
    item_count: u64,
    subtotal: Price,
    mrp_total: Price,
    charges: Charges,
}

impl OrderSummary {
    /// Build a summary from cart totals and externally supplied charges.
    ///
    /// # Errors
    ///
    /// - [`SummaryError::Negative`]: a discount or fee is negative.
    /// - [`SummaryError::CurrencyMismatch`]: a charge is not in the cart currency.
    /// - [`SummaryError::Cart`]: cart totals overflowed.
    /// - [`SummaryError::Money`]: a charge does not fit in minor units.
    pub fn for_cart(cart: &Cart, charges: Charges) -> Result<Self, SummaryError> {
        let currency = cart.currency();

        charges.validate(currency)?;

        Ok(Self {
            currency,
            item_count: cart.item_count(),
            subtotal: cart.subtotal()?,
            mrp_total: cart.mrp_total()?,
            charges,
        })
    }

    /// Summary currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of units in the order.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Selling price total.
    pub fn subtotal(&self) -> &Price {
        &self.subtotal
    }

    /// MRP total.
    pub fn mrp_total(&self) -> &Price {
        &self.mrp_total
    }

    /// Discounts and fees.
    pub fn charges(&self) -> &Charges {
        &self.charges
    }

    /// Amount payable.
    ///
    /// # Errors
    ///
    /// Returns an error on money arithmetic failure or if the total does not fit in minor units.
    pub fn grand_total(&self) -> Result<Price, SummaryError> {
        let charges = &self.charges;

        let total = self
            .subtotal
            .sub(charges.coupon_discount)?
            .sub(charges.gift_card_applied)?
            .sub(charges.prepaid_discount)?
            .add(charges.shipping_fee)?
            .add(charges.cod_fee)?
            .add(charges.tax_amount)?;

        Ok(minor(total.try_to_minor_units()?, self.currency))
    }

    /// Everything the customer saves against MRP, including discounts.
    ///
    /// # Errors
    ///
    /// Returns an error on money arithmetic failure or if the savings do not fit in minor units.
    pub fn savings(&self) -> Result<Price, SummaryError> {
        let charges = &self.charges;

        let savings = self
            .mrp_total
            .sub(self.subtotal)?
            .add(charges.coupon_discount)?
            .add(charges.gift_card_applied)?
            .add(charges.prepaid_discount)?;

        Ok(minor(savings.try_to_minor_units()?, self.currency))
    }

    /// Rows to render, in display order. Optional discounts and the COD fee only appear when
    /// greater than zero.
    ///
    /// # Errors
    ///
    /// Returns an error on money arithmetic failure.
    pub fn lines(&self) -> Result<SmallVec<[SummaryLine; 9]>, SummaryError> {
        let charges = &self.charges;
        let mrp_savings = self.mrp_total.sub(self.subtotal)?;

        let mut lines = SmallVec::new();

        lines.push(SummaryLine {
            kind: SummaryLineKind::Subtotal,
            amount: self.subtotal,
        });

        let optional = [
            (SummaryLineKind::MrpSavings, mrp_savings),
            (SummaryLineKind::Coupon, charges.coupon_discount),
            (SummaryLineKind::GiftCard, charges.gift_card_applied),
            (SummaryLineKind::PrepaidDiscount, charges.prepaid_discount),
        ];

        lines.extend(
            optional
                .into_iter()
                .filter(|(_, amount)| amount.is_positive())
                .map(|(kind, amount)| SummaryLine { kind, amount }),
        );

        lines.push(SummaryLine {
            kind: SummaryLineKind::Shipping,
            amount: charges.shipping_fee,
        });

        if charges.cod_fee.is_positive() {
            lines.push(SummaryLine {
                kind: SummaryLineKind::CodFee,
                amount: charges.cod_fee,
            });
        }

        lines.push(SummaryLine {
            kind: SummaryLineKind::Tax,
            amount: charges.tax_amount,
        });

        lines.push(SummaryLine {
            kind: SummaryLineKind::Total,
            amount: self.grand_total()?,
        });

        Ok(lines)
    }
}
