//! AccessToken Value Object
//!
//! Opaque token carried in the `id` query parameter of a seminar deep link:
//!
//! ```text
//! <verification code>:su<seminar id>
//! ```
//!
//! ## Usage
//! ```rust
//! use kernel::id::Id;
//! use seminar::domain::value_object::access_token::AccessToken;
//! use seminar::domain::value_object::shared_secret::SharedSecret;
//!
//! let secret = SharedSecret::new("s3cr3t").unwrap();
//! let token = AccessToken::issue(Id::new(42), &secret).encode();
//!
//! let decoded = AccessToken::decode(&token).unwrap();
//! assert_eq!(decoded.validate(&secret).unwrap().get(), 42);
//! ```

use std::fmt;
use std::str::FromStr;

use kernel::id::{Id, SeminarId};

use super::shared_secret::SharedSecret;
use super::verification_code::VerificationCode;
use crate::error::{SeminarError, SeminarResult};

/// Separator between the verification code and the obfuscated id
pub const TOKEN_SEPARATOR: char = ':';

/// Fixed prefix prepended to the seminar id inside a token.
///
/// Stripped when present, kept as-is otherwise.
pub const OBFUSCATED_ID_PREFIX: &str = "su";

#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    verification_code: String,
    seminar_id: SeminarId,
}

impl AccessToken {
    /// Issue a token for `seminar_id`
    pub fn issue(seminar_id: SeminarId, secret: &SharedSecret) -> Self {
        Self {
            verification_code: VerificationCode::generate(seminar_id, secret).to_string(),
            seminar_id,
        }
    }

    /// Decode a raw token without checking its code
    ///
    /// ## Errors
    /// * `InvalidFormat` - no separator, or an empty half
    /// * `InvalidId` - the id is not a plain run of decimal digits fitting `u64`
    pub fn decode(raw: &str) -> SeminarResult<Self> {
        let (code, obfuscated_id) = raw
            .split_once(TOKEN_SEPARATOR)
            .ok_or(SeminarError::InvalidFormat)?;

        if code.is_empty() || obfuscated_id.is_empty() {
            return Err(SeminarError::InvalidFormat);
        }

        let digits = obfuscated_id
            .strip_prefix(OBFUSCATED_ID_PREFIX)
            .unwrap_or(obfuscated_id);

        Ok(Self {
            verification_code: code.to_string(),
            seminar_id: parse_seminar_id(digits)?,
        })
    }

    /// Check the code against the one derived from `secret`
    ///
    /// Returns the validated seminar id.
    pub fn validate(&self, secret: &SharedSecret) -> SeminarResult<SeminarId> {
        let expected = VerificationCode::generate(self.seminar_id, secret);
        if !expected.matches(&self.verification_code) {
            return Err(SeminarError::HashMismatch);
        }
        Ok(self.seminar_id)
    }

    /// Render as `<code>:su<id>`
    pub fn encode(&self) -> String {
        format!(
            "{}{}{}{}",
            self.verification_code, TOKEN_SEPARATOR, OBFUSCATED_ID_PREFIX, self.seminar_id
        )
    }

    #[inline]
    pub fn seminar_id(&self) -> SeminarId {
        self.seminar_id
    }

    #[inline]
    pub fn verification_code(&self) -> &str {
        &self.verification_code
    }
}

fn parse_seminar_id(digits: &str) -> SeminarResult<SeminarId> {
    // u64::from_str would also accept a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SeminarError::InvalidId);
    }
    digits
        .parse::<u64>()
        .map(Id::new)
        .map_err(|_| SeminarError::InvalidId)
}

impl FromStr for AccessToken {
    type Err = SeminarError;

    fn from_str(s: &str) -> SeminarResult<Self> {
        AccessToken::decode(s)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("seminar_id", &self.seminar_id)
            .field("verification_code", &"[REDACTED]")
            .finish()
    }
}
