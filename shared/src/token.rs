//! Session token decoding
//!
//! The admin panel never verifies token signatures; the backend checks the
//! token on every protected call. The client only reads the payload to decide
//! whether the admin view should be shown at all.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role that is allowed into the admin view
pub const SUPERUSER_ROLE: &str = "superuser";

/// Payload segments are base64url in practice, but they are normalized to the
/// standard alphabet first so both encodings are accepted. Padding is optional.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Errors produced while decoding a token payload
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("expected 3 token segments, found {0}")]
    Malformed(usize),

    #[error("payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("payload is not a valid claims object: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The subset of the token payload the client looks at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Role name assigned by the backend
    #[serde(default)]
    pub role: Option<String>,

    /// Expiry as Unix seconds
    #[serde(default)]
    pub exp: Option<f64>,
}

impl Claims {
    pub fn is_superuser(&self) -> bool {
        self.role.as_deref() == Some(SUPERUSER_ROLE)
    }

    /// Whether the token is still live at `now_ms` (Unix milliseconds).
    /// A missing expiry never counts as live.
    pub fn is_live_at(&self, now_ms: f64) -> bool {
        self.exp.is_some_and(|exp| exp * 1000.0 > now_ms)
    }

    /// Role and expiry check combined
    pub fn admits_at(&self, now_ms: f64) -> bool {
        self.is_superuser() && self.is_live_at(now_ms)
    }

    /// Expiry as a timestamp, for display
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.exp.filter(|exp| exp.is_finite())?;
        DateTime::from_timestamp(exp.trunc() as i64, 0)
    }
}

/// Decode the payload segment of a JWT without verifying it
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Malformed(segments.len()));
    }

    let normalized: String = segments[1]
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE.decode(normalized)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Outcome of checking a stored token against the admin gate
#[derive(Debug)]
pub enum Gate {
    /// No token stored
    Missing,
    /// A token is stored but its payload could not be read
    Undecodable(TokenError),
    /// Decoded, but the role or expiry check failed
    Rejected(Claims),
    /// Decoded and admitted into the admin view
    Admitted(Claims),
}

impl Gate {
    pub fn evaluate(token: Option<&str>, now_ms: f64) -> Self {
        let Some(token) = token else {
            return Gate::Missing;
        };

        match decode_claims(token) {
            Err(e) => Gate::Undecodable(e),
            Ok(claims) if claims.admits_at(now_ms) => Gate::Admitted(claims),
            Ok(claims) => Gate::Rejected(claims),
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, Gate::Admitted(_))
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            Gate::Admitted(claims) | Gate::Rejected(claims) => Some(claims),
            Gate::Missing | Gate::Undecodable(_) => None,
        }
    }
}

/// Build an unsigned token around `payload`
#[cfg(any(test, feature = "test-util"))]
pub fn encode_test_token(payload: &serde_json::Value) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}
