//! Static API-key verification.
//!
//! Keys are compared by SHA-256 digest so the comparison time does not depend
//! on where the presented key first differs from the expected one.

use sha2::{Digest, Sha256};

/// Name of the request header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Return `true` when `presented` matches `expected`.
///
/// An empty `expected` secret never matches.
pub fn verify_api_key(presented: &str, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    let a = Sha256::digest(presented.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
