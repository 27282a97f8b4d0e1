//! Storefront application services: clients for the commerce backend that the HTTP layer
//! depends on through traits.

pub mod auth;
pub mod client;
pub mod content;
pub mod context;
