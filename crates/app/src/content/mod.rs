//! Storefront content: product categories and the announcement bar.

mod errors;
mod models;
mod navigation;
mod service;

pub use errors::*;
pub use models::*;
pub use navigation::*;
pub use service::*;
