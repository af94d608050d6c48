//! Email normalization and hash-segment computation.
//!
//! Gravatar identifies an avatar by the MD5 digest of the owner's email
//! address, rendered as 32 lowercase hex digits in the URL path. The service
//! matches on the *normalized* address (surrounding whitespace stripped,
//! then lowercased), so `" User@Example.com "` and `"user@example.com"`
//! resolve to the same avatar.
//!
//! No email-format validation happens here. A malformed address simply
//! hashes to a segment no avatar is registered under, and the service
//! answers with the default image. Failing the whole URL build over a typo
//! in a profile field would be strictly worse than showing a fallback icon.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Segment used when no email is available: 32 zero characters.
const ZERO_SEGMENT: &str = "00000000000000000000000000000000";

/// The hash segment of an avatar URL: the 32-character lowercase hex MD5
/// digest of the normalized email address.
///
/// Invariant: always exactly 32 lowercase hexadecimal characters. A missing
/// or blank email yields the all-zero segment rather than an error, so a
/// URL can be built for a user with no known address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashSegment(String);

impl HashSegment {
    /// The all-zero segment, used when no email address is available.
    pub fn zero() -> Self {
        Self(ZERO_SEGMENT.to_string())
    }

    /// Compute the hash segment for an optional email address.
    ///
    /// The address is trimmed and lowercased before hashing. `None`, or a
    /// string that is empty after trimming, yields [`HashSegment::zero`].
    pub fn from_email(email: Option<&str>) -> Self {
        let Some(raw) = email else {
            return Self::zero();
        };
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Self::zero();
        }

        log::debug!("computing MD5 hash segment for {normalized:?}");
        let digest = Md5::digest(normalized.as_bytes());
        Self(format!("{:x}", digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HashSegment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
