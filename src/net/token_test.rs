use super::*;

fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.sig")
}

#[test]
fn decode_claims_reads_sub_and_exp() {
    let token = make_token(&serde_json::json!({ "sub": "u-7", "exp": 1234 }));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.sub.as_deref(), Some("u-7"));
    assert_eq!(claims.exp, Some(1234));
}

#[test]
fn decode_claims_rejects_non_jwt_input() {
    assert!(decode_claims("").is_none());
    assert!(decode_claims("only-one-segment").is_none());
    assert!(decode_claims("a.!!!not-base64!!!.c").is_none());
}

#[test]
fn decode_claims_ignores_missing_signature_segment() {
    // Only the payload segment matters; a token without the trailing
    // signature segment still decodes.
    let payload = URL_SAFE_NO_PAD.encode(serde_json::json!({ "exp": 99 }).to_string());
    let claims = decode_claims(&format!("h.{payload}")).expect("claims");
    assert_eq!(claims.exp, Some(99));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode("plain text");
    assert!(decode_claims(&format!("h.{payload}.s")).is_none());
}

#[test]
fn is_expired_compares_against_now() {
    let token = make_token(&serde_json::json!({ "exp": 1000 }));
    assert!(!is_expired(&token, 999));
    // Boundary counts as expired.
    assert!(is_expired(&token, 1000));
    assert!(is_expired(&token, 1001));
}

#[test]
fn is_expired_fails_closed() {
    // Unparseable token.
    assert!(is_expired("garbage", 0));
    // Parseable token without an exp claim.
    let token = make_token(&serde_json::json!({ "sub": "u-1" }));
    assert!(is_expired(&token, 0));
}
