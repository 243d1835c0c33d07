//! Codec configuration: signing secret and default token lifetime.
//! Used by: token, binary entrypoints loading JWT_SECRET at startup.

use crate::error::{Error, Result};

pub const DEFAULT_LIFETIME_SECONDS: i64 = 86_400;

const SECRET_ENV: &str = "JWT_SECRET";

/// Explicit configuration passed to [`crate::TokenCodec`]. There is no
/// fallback secret: construction fails with [`Error::MissingSecret`] rather
/// than signing tokens under a predictable key.
#[derive(Clone)]
pub struct CodecConfig {
    secret: Vec<u8>,
    default_lifetime_seconds: i64,
}

impl CodecConfig {
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::MissingSecret);
        }
        Ok(Self {
            secret,
            default_lifetime_seconds: DEFAULT_LIFETIME_SECONDS,
        })
    }

    /// Read the secret from the `JWT_SECRET` environment variable.
    /// Unset and empty are both fatal: the process must refuse to start.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(SECRET_ENV)
    }

    pub fn from_env_var(key: &str) -> Result<Self> {
        match std::env::var(key) {
            Ok(value) if !value.is_empty() => Self::new(value.into_bytes()),
            _ => Err(Error::MissingSecret),
        }
    }

    pub fn with_default_lifetime(mut self, seconds: i64) -> Self {
        self.default_lifetime_seconds = seconds;
        self
    }

    pub fn default_lifetime(&self) -> i64 {
        self.default_lifetime_seconds
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecConfig")
            .field("secret", &"<redacted>")
            .field("default_lifetime_seconds", &self.default_lifetime_seconds)
            .finish()
    }
}
