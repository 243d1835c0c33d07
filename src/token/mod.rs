//! Token issuance and verification.
//! Used by: request-handling glue; see `bearer` for header extraction.

pub mod claims;

mod base64url;
mod sign;
mod verify;

use crate::clock::{Clock, SystemClock};
use crate::config::CodecConfig;
use crate::error::Result;
use claims::Claims;

/// Issues and verifies compact signed tokens. Holds the secret and a time
/// source, nothing else; calls are pure computation and safe to make from
/// any number of threads.
pub struct TokenCodec {
    config: CodecConfig,
    clock: Box<dyn Clock>,
}

impl TokenCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: CodecConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
        }
    }

    /// Encodes `claims` into a signed token expiring after the configured
    /// default lifetime.
    pub fn issue(&self, claims: Claims) -> Result<String> {
        self.issue_with_lifetime(claims, self.config.default_lifetime())
    }

    /// Encodes `claims` into a signed token expiring `lifetime_seconds` from
    /// now. The `exp` claim is stamped here, overwriting any caller value.
    pub fn issue_with_lifetime(&self, mut claims: Claims, lifetime_seconds: i64) -> Result<String> {
        let expires_at = self.clock.now_unix().saturating_add(lifetime_seconds);
        claims.set_exp(expires_at);
        let token = sign::sign_token(&claims, self.config.secret())?;
        tracing::debug!(exp = expires_at, claims = claims.len(), "token issued");
        Ok(token)
    }

    /// Decodes `token` if it is authentic and unexpired. Rejections come
    /// back as errors; arbitrary untrusted input never panics.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        verify::verify_token(token, self.config.secret(), self.clock.now_unix()).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::Error;
    use crate::token::sign::hmac_tag;
    use serde_json::json;

    fn codec_at(secret: &str, now_unix: i64) -> (TokenCodec, FixedClock) {
        let clock = FixedClock::at(now_unix);
        let config = CodecConfig::new(secret).unwrap();
        (TokenCodec::with_clock(config, clock.clone()), clock)
    }

    #[test]
    fn roundtrip_preserves_claims_and_adds_exp() -> Result<()> {
        let (codec, _) = codec_at("top-secret", 1_700_000_000);
        let mut claims = Claims::new();
        claims.insert("sub", "user-7");
        claims.insert("admin", false);
        let verified = codec.verify(&codec.issue_with_lifetime(claims, 600)?)?;
        assert_eq!(verified.get("sub"), Some(&json!("user-7")));
        assert_eq!(verified.get("admin"), Some(&json!(false)));
        assert_eq!(verified.exp(), Some(1_700_000_600));
        assert_eq!(verified.len(), 3);
        Ok(())
    }

    #[test]
    fn default_lifetime_is_a_day() -> Result<()> {
        let (codec, _) = codec_at("top-secret", 1_700_000_000);
        let verified = codec.verify(&codec.issue(Claims::new())?)?;
        assert_eq!(verified.exp(), Some(1_700_000_000 + 86_400));
        Ok(())
    }

    #[test]
    fn caller_exp_is_overwritten() -> Result<()> {
        let (codec, _) = codec_at("top-secret", 1_700_000_000);
        let mut claims = Claims::new();
        claims.insert("exp", 1);
        let verified = codec.verify(&codec.issue_with_lifetime(claims, 60)?)?;
        assert_eq!(verified.exp(), Some(1_700_000_060));
        Ok(())
    }

    #[test]
    fn expiry_boundary() -> Result<()> {
        let (codec, clock) = codec_at("top-secret", 1_700_000_000);
        let token = codec.issue_with_lifetime(Claims::new(), 300)?;

        clock.set(1_700_000_299);
        codec.verify(&token)?;
        clock.set(1_700_000_300);
        codec.verify(&token)?;
        clock.set(1_700_000_301);
        assert!(matches!(codec.verify(&token), Err(Error::Expired)));
        Ok(())
    }

    #[test]
    fn secrets_are_not_interchangeable() -> Result<()> {
        let (codec_a, _) = codec_at("secret-a", 1_700_000_000);
        let (codec_b, _) = codec_at("secret-b", 1_700_000_000);
        let token = codec_a.issue(Claims::new())?;
        assert!(matches!(
            codec_b.verify(&token),
            Err(Error::InvalidSignature)
        ));
        Ok(())
    }

    #[test]
    fn known_token_scenario() -> Result<()> {
        let (codec, clock) = codec_at("k", 1_000_000_000);
        let mut claims = Claims::new();
        claims.insert("user_id", 42);
        claims.insert("email", "a@b.it");
        let token = codec.issue_with_lifetime(claims, 3600)?;

        let (signing_input, sig_b64) = token.rsplit_once('.').unwrap();
        assert_eq!(
            base64url::decode(sig_b64).unwrap(),
            hmac_tag(signing_input.as_bytes(), b"k")
        );

        clock.set(1_000_003_599);
        let verified = codec.verify(&token)?;
        assert_eq!(verified.get("user_id"), Some(&json!(42)));
        assert_eq!(verified.get("email"), Some(&json!("a@b.it")));
        assert_eq!(verified.exp(), Some(1_000_003_600));

        clock.set(1_000_003_601);
        assert!(matches!(codec.verify(&token), Err(Error::Expired)));
        Ok(())
    }

    #[test]
    fn verify_twice_yields_identical_claims() -> Result<()> {
        let (codec, _) = codec_at("top-secret", 1_700_000_000);
        let mut claims = Claims::new();
        claims.insert("sub", "user-7");
        let token = codec.issue(claims)?;
        assert_eq!(codec.verify(&token)?, codec.verify(&token)?);
        Ok(())
    }

    #[test]
    fn system_clock_codec_roundtrips() -> Result<()> {
        let codec = TokenCodec::new(CodecConfig::new("top-secret").unwrap());
        let mut claims = Claims::new();
        claims.insert("sub", "user-7");
        let verified = codec.verify(&codec.issue(claims)?)?;
        assert_eq!(verified.get("sub"), Some(&json!("user-7")));
        Ok(())
    }
}
