//! Access-token payload inspection.
//!
//! The client never verifies signatures; it only peeks at the JWT payload
//! to read the expiry claim so the UI can fail closed before the backend
//! does. Verification stays on the server.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Claims the client cares about from the access token payload.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Claims {
    pub sub: Option<String>,
    pub exp: Option<i64>,
}

/// Decode the payload segment of a JWT without verifying the signature.
///
/// Only the segment after the first `.` is inspected; returns `None` when
/// there is no such segment or it is not base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether the token's embedded expiry has passed at `now_secs`.
///
/// A token we cannot parse, or one without an `exp` claim, counts as
/// expired so the session check fails closed.
pub fn is_expired(token: &str, now_secs: i64) -> bool {
    match decode_claims(token).and_then(|c| c.exp) {
        Some(exp) => exp <= now_secs,
        None => true,
    }
}

/// Current Unix time in seconds.
///
/// Outside the browser this returns 0; server-rendered shells never hold
/// tokens, so the value is only read after hydration.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
