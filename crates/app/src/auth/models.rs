//! Auth models.

use serde::{Deserialize, Serialize};

use crate::auth::SessionToken;

/// Login form input.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Tokens issued by the backend after a successful login.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access: SessionToken,
    pub refresh: SessionToken,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Error body the backend sends with a rejection. Either field may carry the message.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl LoginErrorBody {
    pub(crate) fn into_message(self) -> String {
        self.message
            .or(self.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "Invalid email or password".to_string())
    }
}
