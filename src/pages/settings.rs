//! Settings page: profile details and password change.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::net::types::UserUpdate;
use crate::state::toasts::{ToastKind, Toasts};
use crate::util::guard::use_require_login;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let logged_in = use_require_login();
    let session = auth.session();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Prefill from the profile once the session is live.
    Effect::new(move || {
        if logged_in.get() {
            let profile = session.get_untracked().profile;
            full_name.set(profile.full_name);
            email.set(profile.email);
            latitude.set(profile.latitude.map(|v| v.to_string()).unwrap_or_default());
            longitude.set(profile.longitude.map(|v| v.to_string()).unwrap_or_default());
        }
    });

    let save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let update = UserUpdate {
            email: Some(email.get_untracked().trim().to_owned()).filter(|e| !e.is_empty()),
            full_name: Some(full_name.get_untracked().trim().to_owned()).filter(|n| !n.is_empty()),
            latitude: latitude.get_untracked().trim().parse().ok(),
            longitude: longitude.get_untracked().trim().parse().ok(),
            ..UserUpdate::default()
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            match api::update_profile(auth, &update).await {
                Ok(profile) => {
                    session.update(|s| s.set_profile(profile));
                    toasts.update(|t| {
                        t.push(
                            "Profile update",
                            "Your settings have been updated.",
                            ToastKind::Success,
                        );
                    });
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.push("Profile update error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
            saving.set(false);
        });
    };

    view! {
        <Show when=move || logged_in.get()>
            <div class="settings-page">
                <h1>"Settings"</h1>

                <form class="settings-page__form" on:submit=save_profile>
                    <h2>"Profile"</h2>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Latitude"
                        <input
                            type="text"
                            prop:value=move || latitude.get()
                            on:input=move |ev| latitude.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Longitude"
                        <input
                            type="text"
                            prop:value=move || longitude.get()
                            on:input=move |ev| longitude.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        "Save profile"
                    </button>
                </form>

                <PasswordForm/>
            </div>
        </Show>
    }
}

/// Password change section; requires the current password.
#[component]
fn PasswordForm() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let toasts = expect_context::<RwSignal<Toasts>>();

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let original = current.get_untracked();
        let password = new_password.get_untracked();
        if password.is_empty() || password != confirm.get_untracked() {
            toasts.update(|t| {
                t.push(
                    "Password error",
                    "New passwords are empty or do not match.",
                    ToastKind::Error,
                );
            });
            return;
        }
        let update = UserUpdate {
            original: Some(original),
            password: Some(password),
            ..UserUpdate::default()
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            match api::update_profile(auth, &update).await {
                Ok(_) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    toasts.update(|t| {
                        t.push(
                            "Password update",
                            "Your password has been changed.",
                            ToastKind::Success,
                        );
                    });
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.push("Password error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
            saving.set(false);
        });
    };

    view! {
        <form class="settings-page__form" on:submit=submit>
            <h2>"Security"</h2>
            <label>
                "Current password"
                <input
                    type="password"
                    prop:value=move || current.get()
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
            </label>
            <label>
                "New password"
                <input
                    type="password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Confirm new password"
                <input
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                "Change password"
            </button>
        </form>
    }
}
