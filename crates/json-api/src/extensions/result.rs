//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Map any error to an HTTP error, logging it on the way.
pub(crate) trait ResultExt<T> {
    /// Internal server error, logged at `error`.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Bad request carrying the error text as its brief, logged at `debug`.
    fn or_400(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("{context}: {error}");

            StatusError::bad_request().brief(format!("{context}: {error}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn or_400_keeps_the_reason() -> TestResult {
        let result: Result<(), &str> = Err("quantity 0 is out of range");

        let error = result
            .or_400("invalid cart")
            .err()
            .ok_or("expected an error")?;

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "invalid cart: quantity 0 is out of range");

        Ok(())
    }

    #[test]
    fn or_500_hides_the_reason() -> TestResult {
        let result: Result<(), &str> = Err("connection refused");

        let error = result
            .or_500("backend unavailable")
            .err()
            .ok_or("expected an error")?;

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.brief.contains("connection refused"));

        Ok(())
    }
}
