//! Authentication endpoints.

mod cookies;
pub(crate) mod login;
