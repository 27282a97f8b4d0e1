//! Auth service errors.

use thiserror::Error;

/// Status used when the backend rejects a login without saying why.
pub const DEFAULT_REJECTION_STATUS: u16 = 401;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The backend refused the credentials.
    #[error("{message}")]
    Rejected {
        /// Message suitable for showing to the customer.
        message: String,

        /// HTTP status reported by the backend.
        status: Option<u16>,
    },

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered 2xx with a body we could not use.
    #[error("unexpected response from commerce API: {0}")]
    UnexpectedResponse(String),
}

impl AuthServiceError {
    /// Status to report to the client.
    #[must_use]
    pub fn status_or_default(&self) -> u16 {
        match self {
            Self::Rejected {
                status: Some(status),
                ..
            } => *status,
            _ => DEFAULT_REJECTION_STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_status_defaults_to_unauthorized() {
        let without = AuthServiceError::Rejected {
            message: "Invalid credentials".to_string(),
            status: None,
        };

        let with = AuthServiceError::Rejected {
            message: "Too many attempts".to_string(),
            status: Some(429),
        };

        assert_eq!(without.status_or_default(), 401);
        assert_eq!(with.status_or_default(), 429);
        assert_eq!(
            AuthServiceError::UnexpectedResponse("missing token".to_string()).status_or_default(),
            401
        );
    }
}
