//! HS256 token signing.
//! Used by: token::TokenCodec.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::Result;
use crate::token::base64url;
use crate::token::claims::Claims;

pub(crate) type HmacSha256 = Hmac<Sha256>;

pub(crate) const TOKEN_TYPE: &str = "JWT";
pub(crate) const ALGORITHM: &str = "HS256";

/// Fixed token header. Field order matters: the wire form is exactly
/// `{"typ":"JWT","alg":"HS256"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Header {
    pub typ: String,
    pub alg: String,
}

impl Header {
    pub(crate) fn hs256() -> Self {
        Self {
            typ: TOKEN_TYPE.to_owned(),
            alg: ALGORITHM.to_owned(),
        }
    }

    pub(crate) fn is_hs256(&self) -> bool {
        self.typ == TOKEN_TYPE && self.alg == ALGORITHM
    }
}

pub(crate) fn sign_token(claims: &Claims, secret: &[u8]) -> Result<String> {
    let header_json = serde_json::to_vec(&Header::hs256())?;
    let claims_json = serde_json::to_vec(claims)?;
    Ok(seal(&header_json, &claims_json, secret))
}

/// Assembles `b64(header).b64(claims).b64(tag)` with the tag computed over
/// the first two segments as they appear in the token.
pub(crate) fn seal(header_json: &[u8], claims_json: &[u8], secret: &[u8]) -> String {
    let signing_input = format!(
        "{}.{}",
        base64url::encode(header_json),
        base64url::encode(claims_json)
    );
    let tag = hmac_tag(signing_input.as_bytes(), secret);
    format!("{}.{}", signing_input, base64url::encode(tag))
}

pub(crate) fn hmac_tag(data: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 takes keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
