//! Host capabilities
//!
//! Screens never talk to the commerce backend themselves. The application hosting them supplies
//! these capabilities; every notification defaults to a no-op so a host only implements what it
//! wires up.

use thiserror::Error;

use crate::{
    checkout::{Address, ContactDetails, ShippingMethod, StepCompletion},
    summary::PaymentMode,
};

/// Everything the host needs to place an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    /// Contact step result.
    pub contact: ContactDetails,

    /// Selected delivery address.
    pub address: Address,

    /// Selected shipping method.
    pub shipping_method: ShippingMethod,

    /// How the order will be paid.
    pub payment_mode: PaymentMode,
}

/// Reference to a placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Order identifier assigned by the backend.
    pub order_id: String,
}

/// Why the host could not place the order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceOrderError {
    /// The payment gateway declined the payment.
    #[error("payment declined: {0}")]
    Declined(String),

    /// The backend rejected or failed to process the order.
    #[error("order placement failed: {0}")]
    Failed(String),

    /// No order placement is wired up.
    #[error("order placement is not available")]
    Unavailable,
}

/// Checkout callbacks.
pub trait CheckoutHost {
    /// Submit the order. Called once per attempt from the payment step.
    ///
    /// # Errors
    ///
    /// Returns why the order could not be placed; the checkout stays on the payment step.
    fn place_order(&mut self, request: &OrderRequest)
    -> Result<OrderConfirmation, PlaceOrderError>;

    /// A step was completed with the given payload.
    fn step_completed(&mut self, _completion: &StepCompletion) {}
}

/// Catalogue and product page callbacks.
pub trait StorefrontHost {
    /// Add one unit of a product to the cart.
    fn add_to_cart(&mut self, _product_id: &str) {}

    /// Remove a product from the cart.
    fn remove_from_cart(&mut self, _product_id: &str) {}

    /// Save a product to the wishlist.
    fn add_to_wishlist(&mut self, _product_id: &str) {}
}

/// Back-office returns callbacks.
pub trait ReturnsHost {
    /// Approve a return request.
    fn approve(&mut self, _return_id: &str, _notes: &str) {}

    /// Reject a return request.
    fn reject(&mut self, _return_id: &str, _reason: &str) {}
}

/// Host with nothing wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl CheckoutHost for NoopHost {
    fn place_order(
        &mut self,
        _request: &OrderRequest,
    ) -> Result<OrderConfirmation, PlaceOrderError> {
        Err(PlaceOrderError::Unavailable)
    }
}

impl StorefrontHost for NoopHost {}

impl ReturnsHost for NoopHost {}
