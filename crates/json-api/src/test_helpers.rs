//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{auth::MockAuthService, content::MockContentService, context::AppContext};

use crate::{config::cookies::CookieConfig, state::State};

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();

    auth
}

fn strict_content_mock() -> MockContentService {
    let mut content = MockContentService::new();

    content.expect_categories().never();
    content.expect_active_announcement().never();

    content
}

pub(crate) fn state(content: MockContentService, auth: MockAuthService) -> Arc<State> {
    State::shared(
        AppContext {
            content: Arc::new(content),
            auth: Arc::new(auth),
        },
        CookieConfig::default(),
    )
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_content_mock(), auth)))
            .push(route),
    )
}

pub(crate) fn content_service(content: MockContentService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(content, strict_auth_mock())))
            .push(route),
    )
}
