//! Session tokens handed to the browser as cookies.

use std::fmt;

use zeroize::Zeroize;

/// An opaque bearer token. Never printed and wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The raw token, for writing into a cookie.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(**redacted**)")
    }
}

impl Drop for SessionToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}
