//! # Gravatar URL
//!
//! Deterministic construction of [Gravatar](https://gravatar.com) avatar
//! URLs from email addresses.
//!
//! Gravatar serves a globally recognized avatar addressed by the MD5 digest
//! of the owner's normalized email. This crate implements the URL
//! construction only: a pure function from an email address and optional
//! display parameters to a URL string. It never performs network I/O (the
//! URL is built, never dereferenced), so every call is stateless,
//! idempotent, and safe from any thread.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`hash`] | Email normalization and MD5 hash-segment computation |
//! | [`params`] | Typed request parameters: size, rating, default-image policy |
//! | [`url`] | URL assembly: base path + hash segment + ordered query string |
//!
//! # Example
//!
//! ```
//! use gravatar_url::{AvatarRequest, DefaultImage, Rating, avatar_url};
//!
//! let request = AvatarRequest::bare()
//!     .size(80)
//!     .rating(Rating::Pg)
//!     .default_image(DefaultImage::Identicon);
//! let url = avatar_url(Some("user@example.com"), &request)?;
//! assert_eq!(
//!     url.as_str(),
//!     "//www.gravatar.com/avatar/b58996c504c5638798eb6b511e6f49af?s=80&r=pg&d=identicon"
//! );
//! # Ok::<(), gravatar_url::AvatarError>(())
//! ```
//!
//! # Design Decisions
//!
//! ## Absence Means "Omit"
//!
//! The service treats a missing query parameter as "use your own default".
//! That is modeled here as `Option::None` on [`AvatarRequest`] fields, not
//! as a `Default` variant inside [`Rating`] or [`DefaultImage`]: one
//! meaning per name. The separate call-level convention of falling back to
//! the mystery-man image when the caller specifies nothing lives in
//! [`AvatarRequest::default`].
//!
//! ## Permissive Input
//!
//! Email addresses are not format-validated. A malformed address hashes to
//! a segment no avatar is registered under and the service serves the
//! fallback image; a missing or blank address maps to the all-zero segment.
//! The only failure mode is a size outside 1..=512, rejected before any URL
//! text is built.
//!
//! ## No Markup
//!
//! Wrapping the URL in an `<img>` tag, CSS classes, and HTML attribute
//! merging belong to whatever templating layer consumes the URL. The crate
//! exposes the URL string and the validated size ([`AvatarUrl::size`], for
//! `width`/`height` attributes) as plain data and nothing else.

pub mod hash;
pub mod params;
pub mod url;

pub use hash::HashSegment;
pub use params::{AvatarError, AvatarRequest, DefaultImage, MAX_SIZE, MIN_SIZE, Rating, Size};
pub use url::{AvatarUrl, avatar_url, avatar_url_for};
