//! Checkout endpoints.

pub(crate) mod summary;
