//! Claims: the ordered key/value payload carried inside a token.
//! Used by: token::sign, token::verify, callers building tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key holding the absolute expiry instant in Unix seconds.
pub const EXP_CLAIM: &str = "exp";

/// A JSON object of application facts. Keys keep insertion order, so the
/// serialized payload round-trips byte-for-byte. The codec stamps
/// [`EXP_CLAIM`] at issuance, overwriting any caller-supplied value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The expiry instant, if present and numeric.
    pub fn exp(&self) -> Option<i64> {
        match self.0.get(EXP_CLAIM)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            _ => None,
        }
    }

    pub(crate) fn set_exp(&mut self, expires_at: i64) {
        self.0.insert(EXP_CLAIM.to_owned(), Value::from(expires_at));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
