//! Login Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use storefront_app::auth::{AuthServiceError, Credentials};

use crate::{
    auth::cookies::session_cookies,
    errors::{ErrorBody, error_body},
    extensions::*,
};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub remember_me: bool,
}

/// Login Succeeded Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub success: bool,
}

/// Login Handler
///
/// Exchanges credentials for session tokens and stores them in `HttpOnly` cookies.
#[endpoint(
    tags("auth"),
    summary = "Log in",
    responses(
        (status_code = StatusCode::OK, description = "Logged in; session cookies set"),
        (status_code = StatusCode::BAD_REQUEST, description = "Email or password missing"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Credentials rejected"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LoginResponse>, Json<ErrorBody>> {
    let request = json.into_inner();

    let email = request.email.trim().to_owned();

    if email.is_empty() || request.password.is_empty() {
        return Err(error_body(res, 400, "Email and password are required"));
    }

    let Ok(state) = depot.state_or_500() else {
        return Err(error_body(res, 500, "Internal Server Error"));
    };

    let credentials = Credentials {
        email,
        password: request.password,
        remember_me: request.remember_me,
    };

    let tokens = match state.app.auth.login(credentials).await {
        Ok(tokens) => tokens,
        Err(rejection @ AuthServiceError::Rejected { .. }) => {
            let status = rejection.status_or_default();

            return Err(error_body(res, status, rejection.to_string()));
        }
        Err(source) => {
            error!("login request to commerce API failed: {source}");

            return Err(error_body(
                res,
                source.status_or_default(),
                "Unable to sign in right now",
            ));
        }
    };

    for cookie in session_cookies(&tokens, &state.cookies) {
        res.add_cookie(cookie);
    }

    info!("customer logged in");

    res.status_code(StatusCode::OK);

    Ok(Json(LoginResponse { success: true }))
}
