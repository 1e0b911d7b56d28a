use super::*;

#[test]
fn login_redirect_encodes_plain_path() {
    assert_eq!(login_redirect("/admin"), "/login?next=%2Fadmin");
}

#[test]
fn login_redirect_encodes_root() {
    assert_eq!(login_redirect("/"), "/login?next=%2F");
}

#[test]
fn login_redirect_encodes_query_string() {
    assert_eq!(
        login_redirect("/bird-observations?species=blue jay"),
        "/login?next=%2Fbird-observations%3Fspecies%3Dblue+jay"
    );
}
