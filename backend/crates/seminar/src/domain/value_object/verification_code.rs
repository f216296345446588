//! VerificationCode Value Object
//!
//! `sha256_hex(decimal(seminar_id) || secret)`, lowercase.

use std::fmt;

use kernel::id::SeminarId;
use platform::crypto::{constant_time_eq, sha256_hex};

use super::shared_secret::SharedSecret;

/// Length of a rendered code (SHA-256 as hex)
pub const VERIFICATION_CODE_LEN: usize = 64;

#[derive(Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Deterministically derive the code for `seminar_id`
    pub fn generate(seminar_id: SeminarId, secret: &SharedSecret) -> Self {
        let id = seminar_id.to_string();
        Self(sha256_hex(&[id.as_bytes(), secret.expose().as_bytes()]))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Constant-time comparison against a code presented by a client
    pub fn matches(&self, presented: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), presented.as_bytes())
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // prefix is enough to correlate in logs
        write!(f, "VerificationCode({}…)", &self.0[..8.min(self.0.len())])
    }
}
