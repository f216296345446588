//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Compute SHA-256 over several parts fed in order, as lowercase hex
///
/// Equivalent to hashing the concatenation of `parts` without allocating it.
pub fn sha256_hex(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hex::encode(hasher.finalize())
}

/// `len` random bytes as lowercase hex (`2 * len` characters)
pub fn random_hex(len: usize) -> String {
    hex::encode(random_bytes(len))
}

/// Constant-time comparison to prevent timing attacks
///
/// Only the length is leaked.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
