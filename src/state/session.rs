//! Session state: bearer credentials plus the signed-in user profile.
//!
//! DESIGN
//! ======
//! The session lives in a `RwSignal<Session>` provided via context by the
//! root component, so pages and the fetch layer share one injectable
//! instance instead of a module-level singleton. All mutations go through a
//! single `update()` call; in particular a logout resets profile and tokens
//! in one transition so an interleaved read can never observe a
//! half-cleared session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::token;

/// Bearer credentials as returned by the login and refresh endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Tokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub token_type: String,
}

/// User profile as served by `GET /users/`.
///
/// Wire field names follow the backend (`fullName` is camelCase there,
/// the role flags are snake_case).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Single source of truth for credentials and the signed-in profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub profile: UserProfile,
    pub tokens: Tokens,
}

impl Session {
    /// Replace the stored token fields. No validation beyond shape.
    pub fn set_tokens(&mut self, tokens: Tokens) {
        self.tokens = tokens;
    }

    /// Replace the stored profile.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    /// Reset profile and tokens together. Idempotent.
    pub fn clear(&mut self) {
        *self = Session::default();
    }

    /// True iff the profile id and all three token fields are present and
    /// the access token has not expired at `now_secs`. A token that fails to
    /// parse counts as logged out.
    pub fn logged_in(&self, now_secs: i64) -> bool {
        let complete = !self.profile.id.is_empty()
            && !self.tokens.refresh_token.is_empty()
            && !self.tokens.token_type.is_empty()
            && !self.tokens.access_token.is_empty();
        complete && !token::is_expired(&self.tokens.access_token, now_secs)
    }

    /// Admin pages require a live session and both role flags.
    pub fn is_admin(&self, now_secs: i64) -> bool {
        self.logged_in(now_secs) && self.profile.is_superuser && self.profile.is_active
    }

    /// Access token for the `Authorization` header, if one is stored.
    pub fn bearer(&self) -> Option<&str> {
        if self.tokens.access_token.is_empty() {
            None
        } else {
            Some(&self.tokens.access_token)
        }
    }
}
