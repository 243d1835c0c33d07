//! ClaimSeal: compact, self-contained signed claims tokens.
//!
//! A token is three base64url segments joined by `.`: a fixed HS256 header,
//! a JSON claims object, and an HMAC-SHA256 tag over the first two segments.
//! Validity is re-derived on every [`TokenCodec::verify`] call from the token
//! string, the shared secret, and the current time; no server-side state.

pub mod bearer;
pub mod clock;
pub mod config;
pub mod error;
pub mod token;

pub use bearer::bearer_token;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CodecConfig, DEFAULT_LIFETIME_SECONDS};
pub use error::{Error, Result};
pub use token::claims::Claims;
pub use token::TokenCodec;
