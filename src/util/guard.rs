//! Route guards: redirect-to-login checks for protected pages.
//!
//! The redirect target is computed by a pure function so the encoding is
//! testable; the hooks wire it to the session context and router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::LOGIN_PATH;
use crate::net::token;
use crate::state::session::Session;

/// Login entry point carrying the caller's return path:
/// `/admin` becomes `/login?next=%2Fadmin`.
pub fn login_redirect(current_path: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(current_path.as_bytes()).collect();
    format!("{LOGIN_PATH}?next={encoded}")
}

/// Current path plus query string, or `/` outside the browser.
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(w) = web_sys::window() {
            let loc = w.location();
            let path = loc.pathname().unwrap_or_else(|_| "/".to_owned());
            let search = loc.search().unwrap_or_default();
            return format!("{path}{search}");
        }
        "/".to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}

/// Require a live session; redirect to the login page when there is none.
///
/// Returns a reactive boolean so the page can suppress protected content
/// until the check settles. Before hydration the default session has no
/// tokens, so this reports "not logged in" instead of flashing content.
pub fn use_require_login() -> Memo<bool> {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let ok = Memo::new(move |_| session.get().logged_in(token::now_secs()));
    Effect::new(move || {
        if !ok.get() {
            navigate(&login_redirect(&current_path()), NavigateOptions::default());
        }
    });
    ok
}

/// Require an admin session; anonymous users go to login, signed-in
/// non-admins back to the home page.
pub fn use_require_admin() -> Memo<bool> {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let ok = Memo::new(move |_| session.get().is_admin(token::now_secs()));
    Effect::new(move || {
        let s = session.get();
        if !s.logged_in(token::now_secs()) {
            navigate(&login_redirect(&current_path()), NavigateOptions::default());
        } else if !s.is_admin(token::now_secs()) {
            navigate("/", NavigateOptions::default());
        }
    });
    ok
}
