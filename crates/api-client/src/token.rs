//! Best-effort decoding of the bearer token's payload segment.
//!
//! The signature and expiry are NOT verified here. The decoded identity only
//! labels the UI and picks a dashboard; every authorization decision is made
//! by the backend when the token is presented.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;
use shared_types::{Identity, Role};

/// Claim names seen in issued tokens. Several spellings are accepted per field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Claims {
    id: Option<serde_json::Value>,
    #[serde(rename = "_id")]
    mongo_id: Option<String>,
    sub: Option<serde_json::Value>,
    name: Option<String>,
    username: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    role: Option<String>,
    profile_image: Option<String>,
    #[serde(rename = "profileImage")]
    profile_image_camel: Option<String>,
}

fn value_to_string(v: serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_blank(claim: Option<String>) -> Option<String> {
    claim.filter(|s| !s.trim().is_empty())
}

impl Claims {
    fn into_identity(self) -> Identity {
        let defaults = Identity::default();
        Identity {
            id: self
                .id
                .and_then(value_to_string)
                .or(self.mongo_id)
                .or_else(|| self.sub.and_then(value_to_string))
                .unwrap_or(defaults.id),
            name: non_blank(self.name)
                .or_else(|| non_blank(self.username))
                .unwrap_or(defaults.name),
            email: self.email.unwrap_or(defaults.email),
            phone: self.phone.unwrap_or(defaults.phone),
            role: self
                .role
                .as_deref()
                .map(Role::from_str_or_default)
                .unwrap_or(defaults.role),
            profile_image: self.profile_image.or(self.profile_image_camel),
        }
    }
}

/// Why a token payload could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenDecodeError {
    /// Fewer than three dot-separated segments.
    Malformed,
    Base64(String),
    Json(String),
}

impl std::fmt::Display for TokenDecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenDecodeError::Malformed => write!(f, "token is not a three-part JWT"),
            TokenDecodeError::Base64(e) => write!(f, "payload is not base64url: {e}"),
            TokenDecodeError::Json(e) => write!(f, "payload is not JSON claims: {e}"),
        }
    }
}

impl std::error::Error for TokenDecodeError {}

/// Decode the middle segment of a JWT into an [`Identity`].
pub fn try_decode_identity(token: &str) -> Result<Identity, TokenDecodeError> {
    let mut segments = token.trim().split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if !payload.is_empty() => payload,
        _ => return Err(TokenDecodeError::Malformed),
    };

    let bytes = if payload.ends_with('=') {
        URL_SAFE.decode(payload)
    } else {
        URL_SAFE_NO_PAD.decode(payload)
    }
    .map_err(|e| TokenDecodeError::Base64(e.to_string()))?;

    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|e| TokenDecodeError::Json(e.to_string()))?;
    Ok(claims.into_identity())
}

/// Decode the identity, falling back to defaults and logging on failure.
pub fn decode_identity(token: &str) -> Identity {
    try_decode_identity(token).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not decode session token, using default identity");
        Identity::default()
    })
}
