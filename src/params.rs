//! Strongly-typed request parameters for avatar URLs.
//!
//! The Gravatar service accepts three optional query parameters: `s` (pixel
//! size), `r` (content rating), `d` (default-image policy). These types
//! describe *what* to request; the [`url`](crate::url) module owns how the
//! request is spelled on the wire.
//!
//! "Omit the parameter and let the service decide" is modeled as
//! `Option::None` rather than as a sentinel enum variant, so absence and
//! the service-side default are the same thing. The one call-level default,
//! falling back to the mystery-man image when the caller says nothing,
//! lives in [`AvatarRequest::default`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest accepted avatar size in pixels.
pub const MIN_SIZE: u32 = 1;
/// Largest accepted avatar size in pixels.
pub const MAX_SIZE: u32 = 512;

/// Errors from avatar URL construction and wire-code parsing.
///
/// [`avatar_url`](crate::url::avatar_url) itself can only fail with
/// [`SizeOutOfRange`](AvatarError::SizeOutOfRange); the code variants come
/// from [`FromStr`] parsing of rating and default-image wire codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AvatarError {
    #[error("size must be between 1 and 512 inclusive, got {0}")]
    SizeOutOfRange(u32),
    #[error("unknown rating code: {0:?}")]
    UnknownRatingCode(String),
    #[error("unknown default-image code: {0:?}")]
    UnknownDefaultImageCode(String),
}

/// Requested avatar size in pixels (the image is square), validated to
/// [`MIN_SIZE`]..=[`MAX_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Size(u32);

impl Size {
    pub fn new(value: u32) -> Result<Self, AvatarError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&value) {
            return Err(AvatarError::SizeOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Size {
    type Error = AvatarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Size> for u32 {
    fn from(size: Size) -> u32 {
        size.0
    }
}

/// Content-safety rating cap for returned images, ordered least to most
/// permissive.
///
/// Absent (`None` in [`AvatarRequest::rating`]) means the service decides;
/// at the time of writing the service default was equivalent to
/// [`Rating::G`], but that is not guaranteed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Suitable for display on all websites with any audience type.
    G,
    /// May contain rude gestures, provocatively dressed individuals, the
    /// lesser swear words, or mild violence.
    Pg,
    /// May contain harsh profanity, intense violence, nudity, or hard drug
    /// use.
    R,
    /// May contain hardcore sexual imagery or extremely disturbing violence.
    X,
}

impl Rating {
    /// Wire code used as the value of the `r` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rating {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(Rating::G),
            "pg" => Ok(Rating::Pg),
            "r" => Ok(Rating::R),
            "x" => Ok(Rating::X),
            other => Err(AvatarError::UnknownRatingCode(other.to_string())),
        }
    }
}

/// Image the service returns when no avatar is registered for the hash.
///
/// Absent (`None` in [`AvatarRequest::default_image`]) means the service
/// decides; at the time of writing that was the Gravatar logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultImage {
    /// No image at all: the service answers with HTTP 404.
    #[serde(rename = "404")]
    Http404,
    /// A cartoon-style silhouetted outline of a person. Does not vary by
    /// hash.
    #[serde(rename = "mm")]
    MysteryMan,
    /// A geometric pattern derived from the hash.
    Identicon,
    /// A generated monster with hash-dependent colors and faces.
    #[serde(rename = "monsterid")]
    MonsterId,
    /// A generated face with hash-dependent features and background.
    Wavatar,
}

impl DefaultImage {
    /// Wire code used as the value of the `d` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            DefaultImage::Http404 => "404",
            DefaultImage::MysteryMan => "mm",
            DefaultImage::Identicon => "identicon",
            DefaultImage::MonsterId => "monsterid",
            DefaultImage::Wavatar => "wavatar",
        }
    }
}

impl fmt::Display for DefaultImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DefaultImage {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "404" => Ok(DefaultImage::Http404),
            "mm" => Ok(DefaultImage::MysteryMan),
            "identicon" => Ok(DefaultImage::Identicon),
            "monsterid" => Ok(DefaultImage::MonsterId),
            "wavatar" => Ok(DefaultImage::Wavatar),
            other => Err(AvatarError::UnknownDefaultImageCode(other.to_string())),
        }
    }
}

/// Optional display parameters for one avatar URL.
///
/// An ephemeral value object: build one, pass it to
/// [`avatar_url`](crate::url::avatar_url), drop it. `None` fields are
/// omitted from the query string entirely.
///
/// The `Default` request asks for the mystery-man fallback image, which is
/// what most consumers want for users without an avatar; use
/// [`bare`](AvatarRequest::bare) or
/// [`no_default_image`](AvatarRequest::no_default_image) to defer to the
/// service instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarRequest {
    /// Square image edge in pixels, 1..=512. Range-checked by
    /// [`avatar_url`](crate::url::avatar_url) before any URL text is built.
    pub size: Option<u32>,
    /// Most permissive content rating to accept.
    pub rating: Option<Rating>,
    /// Image served when the hash has no registered avatar.
    pub default_image: Option<DefaultImage>,
}

impl Default for AvatarRequest {
    fn default() -> Self {
        Self {
            size: None,
            rating: None,
            default_image: Some(DefaultImage::MysteryMan),
        }
    }
}

impl AvatarRequest {
    /// A request with no parameters at all: the service decides everything.
    pub fn bare() -> Self {
        Self {
            size: None,
            rating: None,
            default_image: None,
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn default_image(mut self, image: DefaultImage) -> Self {
        self.default_image = Some(image);
        self
    }

    /// Omit the `d` parameter, deferring to the service-side default image.
    pub fn no_default_image(mut self) -> Self {
        self.default_image = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Size
    // =========================================================================

    #[test]
    fn size_accepts_range_bounds() {
        assert_eq!(Size::new(1).unwrap().value(), 1);
        assert_eq!(Size::new(512).unwrap().value(), 512);
    }

    #[test]
    fn size_rejects_zero() {
        assert_eq!(Size::new(0), Err(AvatarError::SizeOutOfRange(0)));
    }

    #[test]
    fn size_rejects_above_max() {
        assert_eq!(Size::new(513), Err(AvatarError::SizeOutOfRange(513)));
    }

    #[test]
    fn size_error_names_parameter_value_and_range() {
        assert_eq!(
            AvatarError::SizeOutOfRange(513).to_string(),
            "size must be between 1 and 512 inclusive, got 513"
        );
    }

    #[test]
    fn size_deserializes_through_validation() {
        let size: Size = serde_json::from_str("80").unwrap();
        assert_eq!(size.value(), 80);
        assert!(serde_json::from_str::<Size>("513").is_err());
    }

    // =========================================================================
    // Wire codes
    // =========================================================================

    #[test]
    fn rating_codes() {
        assert_eq!(Rating::G.code(), "g");
        assert_eq!(Rating::Pg.code(), "pg");
        assert_eq!(Rating::R.code(), "r");
        assert_eq!(Rating::X.code(), "x");
    }

    #[test]
    fn default_image_codes() {
        assert_eq!(DefaultImage::Http404.code(), "404");
        assert_eq!(DefaultImage::MysteryMan.code(), "mm");
        assert_eq!(DefaultImage::Identicon.code(), "identicon");
        assert_eq!(DefaultImage::MonsterId.code(), "monsterid");
        assert_eq!(DefaultImage::Wavatar.code(), "wavatar");
    }

    #[test]
    fn rating_orders_by_permissiveness() {
        assert!(Rating::G < Rating::Pg);
        assert!(Rating::Pg < Rating::R);
        assert!(Rating::R < Rating::X);
    }

    #[test]
    fn rating_parses_its_own_codes() {
        for rating in [Rating::G, Rating::Pg, Rating::R, Rating::X] {
            assert_eq!(rating.code().parse::<Rating>().unwrap(), rating);
        }
        assert_eq!(
            "nc-17".parse::<Rating>(),
            Err(AvatarError::UnknownRatingCode("nc-17".to_string()))
        );
    }

    #[test]
    fn default_image_parses_its_own_codes() {
        for image in [
            DefaultImage::Http404,
            DefaultImage::MysteryMan,
            DefaultImage::Identicon,
            DefaultImage::MonsterId,
            DefaultImage::Wavatar,
        ] {
            assert_eq!(image.code().parse::<DefaultImage>().unwrap(), image);
        }
        assert_eq!(
            "retro".parse::<DefaultImage>(),
            Err(AvatarError::UnknownDefaultImageCode("retro".to_string()))
        );
    }

    #[test]
    fn serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&Rating::Pg).unwrap(), "\"pg\"");
        assert_eq!(
            serde_json::to_string(&DefaultImage::Http404).unwrap(),
            "\"404\""
        );
        assert_eq!(
            serde_json::from_str::<DefaultImage>("\"monsterid\"").unwrap(),
            DefaultImage::MonsterId
        );
    }

    // =========================================================================
    // AvatarRequest
    // =========================================================================

    #[test]
    fn default_request_falls_back_to_mystery_man() {
        let request = AvatarRequest::default();
        assert_eq!(request.size, None);
        assert_eq!(request.rating, None);
        assert_eq!(request.default_image, Some(DefaultImage::MysteryMan));
    }

    #[test]
    fn bare_request_has_no_parameters() {
        let request = AvatarRequest::bare();
        assert_eq!(request.size, None);
        assert_eq!(request.rating, None);
        assert_eq!(request.default_image, None);
    }

    #[test]
    fn builder_setters_compose() {
        let request = AvatarRequest::bare()
            .size(80)
            .rating(Rating::Pg)
            .default_image(DefaultImage::Identicon);
        assert_eq!(request.size, Some(80));
        assert_eq!(request.rating, Some(Rating::Pg));
        assert_eq!(request.default_image, Some(DefaultImage::Identicon));
    }

    #[test]
    fn no_default_image_clears_the_fallback() {
        let request = AvatarRequest::default().no_default_image();
        assert_eq!(request.default_image, None);
    }

    #[test]
    fn request_deserializes_missing_fields_as_default() {
        let request: AvatarRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, AvatarRequest::default());
    }
}
