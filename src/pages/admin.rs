//! Admin page: user management table plus the recent login-activity log.
//!
//! Admin-only; the guard sends anonymous visitors to login and signed-in
//! non-admins back home. All calls here ride the refresh-and-retry
//! composition because the page tends to stay open past token expiry.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::net::types::{UserCreate, UserUpdate};
use crate::state::session::UserProfile;
use crate::state::toasts::{ToastKind, Toasts};
use crate::util::guard::use_require_admin;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let is_admin = use_require_admin();

    // Bumped after every mutation to refetch the table.
    let version = RwSignal::new(0u32);
    let users = LocalResource::new(move || {
        let ready = is_admin.get();
        version.track();
        async move {
            if !ready {
                return None;
            }
            Some(api::fetch_all_users(auth).await)
        }
    });

    // Login logs are read-only, so they skip the mutation version.
    let logs = LocalResource::new(move || {
        let ready = is_admin.get();
        async move {
            if !ready {
                return None;
            }
            Some(api::fetch_login_logs(auth).await)
        }
    });

    let show_create = RwSignal::new(false);
    let on_create = Callback::new(move |_| show_create.set(true));
    let on_cancel = Callback::new(move |_| show_create.set(false));
    let on_done = Callback::new(move |_| {
        show_create.set(false);
        version.update(|v| *v += 1);
    });

    let toggle = Callback::new(move |email: String| {
        leptos::task::spawn_local(async move {
            match api::toggle_user_state(auth, &email).await {
                Ok(msg) => {
                    toasts.update(|t| {
                        t.push("User updated", &msg.msg, ToastKind::Success);
                    });
                    version.update(|v| *v += 1);
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.push("Update error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
        });
    });

    let set_role = Callback::new(move |(user_id, superuser): (String, bool)| {
        let update = UserUpdate {
            is_superuser: Some(superuser),
            ..UserUpdate::default()
        };
        leptos::task::spawn_local(async move {
            match api::update_user(auth, &user_id, &update).await {
                Ok(updated) => {
                    toasts.update(|t| {
                        t.push("Role updated", &updated.email, ToastKind::Success);
                    });
                    version.update(|v| *v += 1);
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.push("Role error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
        });
    });

    let delete = Callback::new(move |user_id: String| {
        leptos::task::spawn_local(async move {
            match api::delete_user(auth, &user_id).await {
                Ok(_) => {
                    toasts.update(|t| {
                        t.push("User deleted", "", ToastKind::Success);
                    });
                    version.update(|v| *v += 1);
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.push("Delete error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
        });
    });

    view! {
        <Show when=move || is_admin.get()>
            <div class="admin-page">
                <header class="admin-page__header">
                    <h1>"Users"</h1>
                    <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                        "+ New user"
                    </button>
                </header>

                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        users.get().flatten().map(|outcome| match outcome {
                            Err(e) => {
                                view! { <p class="error">{format!("Could not load users: {e}")}</p> }
                                    .into_any()
                            }
                            Ok(list) => view! {
                                <table class="admin-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Email"</th>
                                            <th>"Name"</th>
                                            <th>"Active"</th>
                                            <th>"Admin"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|u| view! { <UserRow user=u toggle=toggle set_role=set_role delete=delete/> })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>

                <h2>"Login activity"</h2>
                <Suspense fallback=move || view! { <p>"Loading login logs..."</p> }>
                    {move || {
                        logs.get().flatten().map(|outcome| match outcome {
                            Err(e) => {
                                view! { <p class="error">{format!("Could not load login logs: {e}")}</p> }
                                    .into_any()
                            }
                            Ok(entries) if entries.is_empty() => {
                                view! { <p>"No login logs recorded."</p> }.into_any()
                            }
                            Ok(entries) => view! {
                                <table class="admin-page__logs">
                                    <thead>
                                        <tr>
                                            <th>"Email"</th>
                                            <th>"Outcome"</th>
                                            <th>"Timestamp"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {entries
                                            .into_iter()
                                            .map(|log| view! {
                                                <tr>
                                                    <td>{log.email}</td>
                                                    <td>{if log.success { "success" } else { "failed" }}</td>
                                                    <td>{log.timestamp}</td>
                                                </tr>
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>

                <Show when=move || show_create.get()>
                    <CreateUserDialog on_cancel=on_cancel on_done=on_done/>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn UserRow(
    user: UserProfile,
    toggle: Callback<String>,
    set_role: Callback<(String, bool)>,
    delete: Callback<String>,
) -> impl IntoView {
    let email = user.email.clone();
    let id = user.id.clone();
    let role_id = user.id.clone();
    let promote = !user.is_superuser;
    view! {
        <tr>
            <td>{user.email.clone()}</td>
            <td>{user.full_name}</td>
            <td>{if user.is_active { "yes" } else { "no" }}</td>
            <td>{if user.is_superuser { "yes" } else { "no" }}</td>
            <td class="admin-page__actions">
                <button class="btn" on:click=move |_| toggle.run(email.clone())>
                    {if user.is_active { "Deactivate" } else { "Activate" }}
                </button>
                <button class="btn" on:click=move |_| set_role.run((role_id.clone(), promote))>
                    {if promote { "Make admin" } else { "Revoke admin" }}
                </button>
                <button class="btn btn--danger" on:click=move |_| delete.run(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Modal dialog for creating a user.
#[component]
fn CreateUserDialog(on_cancel: Callback<()>, on_done: Callback<()>) -> impl IntoView {
    let auth = AuthFetch::from_context();
    let toasts = expect_context::<RwSignal<Toasts>>();

    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let active = RwSignal::new(true);
    let superuser = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        let payload = UserCreate {
            email: email.get_untracked().trim().to_owned(),
            password: Some(password.get_untracked()).filter(|p| !p.is_empty()),
            full_name: Some(full_name.get_untracked().trim().to_owned()).filter(|n| !n.is_empty()),
            is_active: active.get_untracked(),
            is_superuser: superuser.get_untracked(),
        };
        if payload.email.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::create_user(auth, &payload).await {
                Ok(created) => {
                    toasts.update(|t| {
                        t.push("User created", &created.email, ToastKind::Success);
                    });
                    on_done.run(());
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.push("Create error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create user"</h2>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Full name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || active.get()
                        on:change=move |ev| active.set(event_target_checked(&ev))
                    />
                    "Active"
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || superuser.get()
                        on:change=move |ev| superuser.set(event_target_checked(&ev))
                    />
                    "Administrator"
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
