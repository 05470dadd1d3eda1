//! MD5-derived identifier tokens.
//!
//! ```text
//! MD5(utf8(input))
//!   → 16 bytes
//!   → 32 lowercase hex chars
//!   → 8-4-4-4-12 dash grouping
//! ```
//!
//! The token has UUID layout for downstream compatibility but is not an
//! RFC 4122 UUID: no version or variant bits are set.

use md5::{Digest, Md5};
use std::fmt;
use uuid::Uuid;

/// Dash-grouped MD5 digest of an input string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashToken(String);

impl HashToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash `input` into a [`HashToken`].
#[must_use]
pub fn hash_token(input: &str) -> HashToken {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&Md5::digest(input.as_bytes()));
    // from_bytes copies the digest verbatim; hyphenated() is lowercase hex.
    HashToken(Uuid::from_bytes(bytes).hyphenated().to_string())
}

/// Whether `s` has the `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` lowercase-hex
/// shape produced by [`hash_token`].
#[must_use]
pub fn is_hash_token(s: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let parts: Vec<&str> = s.split('-').collect();
    parts.len() == GROUPS.len()
        && parts.iter().zip(GROUPS).all(|(part, len)| {
            part.len() == len && part.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        })
}
