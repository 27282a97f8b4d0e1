//! State

use std::sync::Arc;

use storefront_app::context::AppContext;

use crate::config::cookies::CookieConfig;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) cookies: CookieConfig,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, cookies: CookieConfig) -> Self {
        Self { app, cookies }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, cookies: CookieConfig) -> Arc<Self> {
        Arc::new(Self::new(app, cookies))
    }
}
