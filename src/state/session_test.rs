use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

const NOW: i64 = 1_700_000_000;

fn make_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::json!({ "sub": "u-1", "exp": exp }).to_string());
    format!("{header}.{payload}.sig")
}

fn live_session() -> Session {
    let mut s = Session::default();
    s.set_profile(UserProfile {
        id: "u-1".to_owned(),
        email: "jo@example.com".to_owned(),
        full_name: "Jo".to_owned(),
        is_active: true,
        is_superuser: false,
        ..UserProfile::default()
    });
    s.set_tokens(Tokens {
        access_token: make_token(NOW + 3600),
        refresh_token: "refresh-1".to_owned(),
        token_type: "bearer".to_owned(),
    });
    s
}

// =============================================================
// logged_in
// =============================================================

#[test]
fn logged_in_with_complete_session() {
    assert!(live_session().logged_in(NOW));
}

#[test]
fn logged_in_false_when_any_field_missing() {
    let blank_each: [fn(&mut Session); 4] = [
        |s| s.profile.id = String::new(),
        |s| s.tokens.access_token = String::new(),
        |s| s.tokens.refresh_token = String::new(),
        |s| s.tokens.token_type = String::new(),
    ];
    for blank in blank_each {
        let mut s = live_session();
        blank(&mut s);
        assert!(!s.logged_in(NOW));
    }
}

#[test]
fn logged_in_false_when_access_token_expired() {
    let mut s = live_session();
    s.tokens.access_token = make_token(NOW - 1);
    assert!(!s.logged_in(NOW));
}

#[test]
fn logged_in_false_when_access_token_garbled() {
    let mut s = live_session();
    s.tokens.access_token = "not-a-jwt".to_owned();
    assert!(!s.logged_in(NOW));
}

// =============================================================
// is_admin
// =============================================================

#[test]
fn is_admin_requires_both_role_flags() {
    let mut s = live_session();
    assert!(!s.is_admin(NOW));

    s.profile.is_superuser = true;
    assert!(s.is_admin(NOW));

    s.profile.is_active = false;
    assert!(!s.is_admin(NOW));
}

#[test]
fn is_admin_false_when_logged_out_despite_flags() {
    let mut s = live_session();
    s.profile.is_superuser = true;
    s.tokens.access_token = make_token(NOW - 1);
    assert!(!s.is_admin(NOW));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_resets_profile_and_tokens_together() {
    let mut s = live_session();
    s.clear();
    assert_eq!(s, Session::default());
}

#[test]
fn clear_is_idempotent() {
    let mut s = live_session();
    s.clear();
    let once = s.clone();
    s.clear();
    assert_eq!(s, once);
}

// =============================================================
// bearer
// =============================================================

#[test]
fn bearer_reflects_access_token() {
    assert!(Session::default().bearer().is_none());
    let s = live_session();
    assert_eq!(s.bearer(), Some(s.tokens.access_token.as_str()));
}
