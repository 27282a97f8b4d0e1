//! Session cookies.

use salvo::http::cookie::{Cookie, SameSite, time::Duration};

use storefront_app::auth::{SessionToken, SessionTokens};

use crate::config::cookies::CookieConfig;

pub(crate) const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub(crate) const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// `HttpOnly`, `SameSite=Lax` cookies scoped to the whole site.
pub(crate) fn session_cookies(
    tokens: &SessionTokens,
    config: &CookieConfig,
) -> [Cookie<'static>; 2] {
    [
        session_cookie(
            ACCESS_TOKEN_COOKIE,
            &tokens.access,
            Duration::seconds(config.access_token_max_age_seconds),
            config.cookie_secure,
        ),
        session_cookie(
            REFRESH_TOKEN_COOKIE,
            &tokens.refresh,
            Duration::days(config.refresh_token_max_age_days),
            config.cookie_secure,
        ),
    ]
}

fn session_cookie(
    name: &'static str,
    token: &SessionToken,
    max_age: Duration,
    secure: bool,
) -> Cookie<'static> {
    Cookie::build((name, token.expose().to_owned()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(max_age)
        .build()
}
