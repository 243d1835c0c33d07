//! HS256 token verification.
//! Used by: token::TokenCodec.

use hmac::Mac;

use crate::error::{Error, Result};
use crate::token::base64url;
use crate::token::claims::Claims;
use crate::token::sign::{Header, HmacSha256};

/// Authenticates and decodes `token` against `secret` at time `now_unix`.
/// The signature is checked, in constant time, before any header or claims
/// content is parsed; expiry rejects only when `now_unix` is strictly past
/// the `exp` claim.
pub(crate) fn verify_token(token: &str, secret: &[u8], now_unix: i64) -> Result<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    let (header_b64, claims_b64, sig_b64) = match segments.as_slice() {
        [h, c, s] => (*h, *c, *s),
        _ => {
            return Err(Error::MalformedToken(format!(
                "expected 3 segments, got {}",
                segments.len()
            )))
        }
    };

    let tag = base64url::decode(sig_b64)
        .map_err(|e| Error::MalformedToken(format!("signature segment: {e}")))?;

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 takes keys of any length");
    mac.update(header_b64.as_bytes());
    mac.update(b".");
    mac.update(claims_b64.as_bytes());
    mac.verify_slice(&tag).map_err(|_| Error::InvalidSignature)?;

    let header_json = base64url::decode(header_b64)
        .map_err(|e| Error::MalformedToken(format!("header segment: {e}")))?;
    let header: Header = serde_json::from_slice(&header_json)
        .map_err(|e| Error::MalformedToken(format!("header segment: {e}")))?;
    if !header.is_hs256() {
        return Err(Error::UnsupportedHeader(format!(
            "typ={} alg={}",
            header.typ, header.alg
        )));
    }

    let claims_json = base64url::decode(claims_b64)
        .map_err(|e| Error::MalformedToken(format!("claims segment: {e}")))?;
    let claims: Claims = serde_json::from_slice(&claims_json)
        .map_err(|e| Error::MalformedToken(format!("claims segment: {e}")))?;

    if let Some(exp) = claims.exp() {
        if now_unix > exp {
            return Err(Error::Expired);
        }
    }

    Ok(claims)
}
