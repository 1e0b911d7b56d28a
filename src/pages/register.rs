//! Registration page: open profile creation followed by auto-login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::net::types::UserRegister;
use crate::state::toasts::{ToastKind, Toasts};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = UserRegister {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            full_name: Some(full_name.get_untracked().trim().to_owned()).filter(|n| !n.is_empty()),
            latitude: None,
            longitude: None,
        };
        if payload.email.is_empty() || payload.password.is_empty() {
            toasts.update(|t| {
                t.push(
                    "Registration error",
                    "Email and password are required.",
                    ToastKind::Error,
                );
            });
            return;
        }
        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = async {
                api::register(&payload).await?;
                api::sign_in(auth, &payload.email, &payload.password).await
            }
            .await;
            match outcome {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    toasts.update(|t| {
                        t.push("Registration error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Create account"</h1>
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
                    "Full name"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
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
                    {move || if pending.get() { "Creating..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-page__alt">
                "Already registered? " <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
