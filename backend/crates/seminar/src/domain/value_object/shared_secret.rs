//! SharedSecret Value Object
//!
//! The process-wide secret mixed into every verification code. Loaded once at
//! startup and passed explicitly to the validator.
//!
//! ## Security
//! - Zeroized on drop
//! - No `Clone`, no `Display`; `Debug` is redacted

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharedSecretError {
    #[error("Shared secret must not be empty")]
    Empty,
}

#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Wrap a configured secret. The value is used verbatim (no trimming).
    pub fn new(raw: impl Into<String>) -> Result<Self, SharedSecretError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SharedSecretError::Empty);
        }
        Ok(Self(raw))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSecret").field(&"[REDACTED]").finish()
    }
}
