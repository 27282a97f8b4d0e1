//! Storefront
//!
//! Presentation-independent logic behind an e-commerce storefront and its back-office: cart and
//! order summary arithmetic, the checkout step sequencer, list filtering for admin screens and
//! the capabilities a hosting application provides.

pub mod aggregates;
pub mod cart;
pub mod checkout;
pub mod host;
pub mod listing;
pub mod money;
pub mod summary;
