//! Avatar URL assembly.
//!
//! Builds the scheme-relative URL `//www.gravatar.com/avatar/<hash>` and
//! appends the optional query parameters in a fixed order: `s` (size), `r`
//! (rating), `d` (default image). The order matters for determinism,
//! since identical inputs must yield byte-identical URLs, and the
//! parameter names must stay byte-for-byte what the service expects.
//!
//! This is pure string construction: the URL is never dereferenced, no I/O
//! happens, and the same inputs always produce the same output.

use crate::hash::HashSegment;
use crate::params::{AvatarError, AvatarRequest, DefaultImage, Rating, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheme-relative base of every avatar URL, so the image inherits
/// http/https from the page that embeds it.
const BASE_URL: &str = "//www.gravatar.com/avatar/";

/// A fully-assembled avatar URL plus the size it was validated with.
///
/// The size is exposed so a presentation layer can emit matching
/// `width`/`height` attributes without re-validating; markup itself is out
/// of scope for this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUrl {
    url: String,
    size: Option<Size>,
}

impl AvatarUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Validated pixel size, if one was requested.
    pub fn size(&self) -> Option<u32> {
        self.size.map(Size::value)
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for AvatarUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Build the avatar URL for an email address and a set of request
/// parameters.
///
/// The size is range-checked before any URL text is assembled; an
/// out-of-range size is the only failure mode. A `None` email (or one that
/// is blank after trimming) uses the all-zero hash segment, so this works
/// for users with no known address.
///
/// # Errors
///
/// [`AvatarError::SizeOutOfRange`] if `request.size` is outside 1..=512.
pub fn avatar_url(
    email: Option<&str>,
    request: &AvatarRequest,
) -> Result<AvatarUrl, AvatarError> {
    let size = request.size.map(Size::new).transpose()?;
    let hash = HashSegment::from_email(email);
    Ok(assemble(&hash, size, request.rating, request.default_image))
}

/// Avatar URL for an email with the default request: mystery-man fallback,
/// no size or rating. Infallible because there is no size to validate.
pub fn avatar_url_for(email: &str) -> AvatarUrl {
    let request = AvatarRequest::default();
    let hash = HashSegment::from_email(Some(email));
    assemble(&hash, None, request.rating, request.default_image)
}

/// Assemble the URL from already-validated parts.
fn assemble(
    hash: &HashSegment,
    size: Option<Size>,
    rating: Option<Rating>,
    default_image: Option<DefaultImage>,
) -> AvatarUrl {
    let mut url = String::with_capacity(90);
    url.push_str(BASE_URL);
    url.push_str(hash.as_str());

    let mut first = true;
    let mut push_param = |url: &mut String, name: &str, value: &str| {
        url.push(if first { '?' } else { '&' });
        first = false;
        url.push_str(name);
        url.push('=');
        url.push_str(value);
    };

    // Fixed order: s, then r, then d.
    if let Some(size) = size {
        push_param(&mut url, "s", &size.value().to_string());
    }
    if let Some(rating) = rating {
        push_param(&mut url, "r", rating.code());
    }
    if let Some(image) = default_image {
        push_param(&mut url, "d", image.code());
    }

    log::trace!("assembled avatar url: {url}");
    AvatarUrl { url, size }
}
