//! Login page: credential form that honors the `next` return path.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::state::toasts::{ToastKind, Toasts};

/// Email/password form. On success the browser returns to the `next` query
/// parameter the route guard recorded, or to the home page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let username = email.get_untracked().trim().to_owned();
        let pass = password.get_untracked();
        if username.is_empty() || pass.is_empty() {
            return;
        }
        let next = query
            .get_untracked()
            .get("next")
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "/".to_owned());
        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::sign_in(auth, &username, &pass).await {
                Ok(()) => navigate(&next, NavigateOptions::default()),
                Err(e) => {
                    toasts.update(|t| {
                        t.push("Login error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Sign in"</h1>
            <form class="auth-page__form" on:submit=submit>
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "No account yet? " <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
