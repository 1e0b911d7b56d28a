use super::*;

use std::cell::Cell;

use futures::executor::block_on;

use crate::state::session::{Session, Tokens, UserProfile};

fn populated_session() -> Session {
    let mut s = Session::default();
    s.set_profile(UserProfile {
        id: "u-1".to_owned(),
        email: "jo@example.com".to_owned(),
        is_active: true,
        is_superuser: true,
        ..UserProfile::default()
    });
    s.set_tokens(Tokens {
        access_token: "a".to_owned(),
        refresh_token: "r".to_owned(),
        token_type: "bearer".to_owned(),
    });
    s
}

// =============================================================
// classify
// =============================================================

#[test]
fn classify_401_and_403_as_unauthorized() {
    assert_eq!(classify(401, ""), Classified::Unauthorized);
    assert_eq!(classify(403, r#"{"detail":"nope"}"#), Classified::Unauthorized);
}

#[test]
fn classify_500_detail_message() {
    assert_eq!(
        classify(500, r#"{"detail":"boom"}"#),
        Classified::Failed(ApiError::RequestFailed("boom".to_owned()))
    );
}

#[test]
fn classify_prefers_detail_over_error() {
    assert_eq!(
        classify(400, r#"{"detail":"first","error":"second"}"#),
        Classified::Failed(ApiError::RequestFailed("first".to_owned()))
    );
    assert_eq!(
        classify(400, r#"{"error":"second"}"#),
        Classified::Failed(ApiError::RequestFailed("second".to_owned()))
    );
}

#[test]
fn classify_falls_back_to_status_message() {
    assert_eq!(
        classify(502, "<html>bad gateway</html>"),
        Classified::Failed(ApiError::RequestFailed("HTTP 502".to_owned()))
    );
    // A JSON body without a recognized message field also falls back.
    assert_eq!(
        classify(500, r#"{"oops":true}"#),
        Classified::Failed(ApiError::RequestFailed("HTTP 500".to_owned()))
    );
}

#[test]
fn classify_success_returns_parsed_body() {
    assert_eq!(
        classify(200, r#"{"id":"u1"}"#),
        Classified::Ok(serde_json::json!({ "id": "u1" }))
    );
}

#[test]
fn classify_success_with_invalid_json_is_malformed() {
    match classify(200, "not json") {
        Classified::Failed(ApiError::MalformedResponse(_)) => {}
        other => panic!("expected malformed response, got {other:?}"),
    }
}

// =============================================================
// on_unauthorized
// =============================================================

#[test]
fn on_unauthorized_clears_session_and_navigates_once() {
    let mut session = populated_session();
    let mut paths = Vec::new();
    on_unauthorized(&mut session, &mut |path| paths.push(path.to_owned()));

    assert_eq!(session, Session::default());
    assert_eq!(paths, vec![LOGIN_PATH.to_owned()]);
}

// =============================================================
// attempt_with_refresh
// =============================================================

#[test]
fn refresh_not_attempted_on_success() {
    let refreshed = Cell::new(false);
    let result = block_on(attempt_with_refresh(
        || async { Ok(serde_json::json!(1)) },
        || async {
            refreshed.set(true);
            Ok(())
        },
    ));
    assert_eq!(result, Ok(serde_json::json!(1)));
    assert!(!refreshed.get());
}

#[test]
fn unauthorized_then_refresh_then_retry_succeeds() {
    let attempts = Cell::new(0u32);
    let result = block_on(attempt_with_refresh(
        || {
            attempts.set(attempts.get() + 1);
            let n = attempts.get();
            async move {
                if n == 1 {
                    Err(ApiError::Unauthorized)
                } else {
                    Ok(serde_json::json!({ "ok": true }))
                }
            }
        },
        || async { Ok(()) },
    ));
    assert_eq!(result, Ok(serde_json::json!({ "ok": true })));
    assert_eq!(attempts.get(), 2);
}

#[test]
fn failed_refresh_stops_after_one_attempt() {
    let attempts = Cell::new(0u32);
    let result: Result<serde_json::Value, ApiError> = block_on(attempt_with_refresh(
        || {
            attempts.set(attempts.get() + 1);
            async { Err(ApiError::Unauthorized) }
        },
        || async { Err(ApiError::RequestFailed("refresh down".to_owned())) },
    ));
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(attempts.get(), 1);
}

#[test]
fn non_auth_errors_pass_through_without_refresh() {
    let refreshed = Cell::new(false);
    let result: Result<serde_json::Value, ApiError> = block_on(attempt_with_refresh(
        || async { Err(ApiError::RequestFailed("boom".to_owned())) },
        || async {
            refreshed.set(true);
            Ok(())
        },
    ));
    assert_eq!(result, Err(ApiError::RequestFailed("boom".to_owned())));
    assert!(!refreshed.get());
}
