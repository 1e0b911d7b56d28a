//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;

use crate::net::http::AuthFetch;
use crate::net::token;

/// Navigation bar shown on every page.
///
/// Admin links only render for admin sessions; the logout button clears the
/// session atomically and hard-navigates to login for a clean slate.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let session = auth.session();

    let logged_in = move || session.get().logged_in(token::now_secs());
    let is_admin = move || session.get().is_admin(token::now_secs());
    let user_name = move || {
        let profile = session.get().profile;
        if profile.full_name.is_empty() {
            profile.email
        } else {
            profile.full_name
        }
    };

    let on_logout = move |_| auth.force_logout();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Fieldfare"</a>
            <Show when=logged_in>
                <a href="/bird-observations">"Observations"</a>
                <a href="/map-search">"Map search"</a>
                <a href="/locate-to-map">"Range map"</a>
                <a href="/analytics">"Analytics"</a>
                <a href="/settings">"Settings"</a>
            </Show>
            <Show when=is_admin>
                <a href="/admin">"Users"</a>
                <a href="/etl">"ETL"</a>
            </Show>
            <span class="navbar__spacer"></span>
            <Show
                when=logged_in
                fallback=|| view! { <a class="btn" href="/login">"Sign in"</a> }
            >
                <span class="navbar__user">{user_name}</span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
