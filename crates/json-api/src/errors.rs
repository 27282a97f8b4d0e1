//! JSON error bodies.

use salvo::{http::StatusCode, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error body for endpoints that report `{ error, status }` instead of a plain status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Message suitable for display.
    pub error: String,

    /// HTTP status code, repeated in the body.
    pub status: u16,
}

/// Set the response status and build the matching body. Unknown codes fall back to 401.
pub(crate) fn error_body(
    res: &mut Response,
    status: u16,
    message: impl Into<String>,
) -> Json<ErrorBody> {
    let code = StatusCode::from_u16(status).unwrap_or(StatusCode::UNAUTHORIZED);

    res.status_code(code);

    Json(ErrorBody {
        error: message.into(),
        status: code.as_u16(),
    })
}
