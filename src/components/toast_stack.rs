//! Toast stack rendering the shared notice queue.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, Toasts};

/// Auto-dismiss delay for notices.
#[cfg(feature = "hydrate")]
const DISMISS_MS: u32 = 6_000;

/// Fixed-position stack of notices; click or timeout dismisses.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<Toasts>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get().items
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    let kind_class = match toast.kind {
                        ToastKind::Info => "toast toast--info",
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };

                    #[cfg(feature = "hydrate")]
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(DISMISS_MS).await;
                        toasts.update(|t| t.dismiss(id));
                    });

                    view! {
                        <div class=kind_class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            <strong>{toast.title.clone()}</strong>
                            <p>{toast.content.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
