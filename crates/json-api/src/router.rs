//! App Router

use salvo::Router;

use crate::{auth, checkout, navigation};

/// Storefront API routes, mounted under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(Router::with_path("auth/login").post(auth::login::handler))
        .push(Router::with_path("navigation").get(navigation::handler))
        .push(Router::with_path("checkout/summary").post(checkout::summary::handler))
}
