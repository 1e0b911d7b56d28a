//! ETL trigger panel: run a provider's pipeline and inspect recent runs.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::net::types::{EtlProvider, EtlRunRequest};
use crate::state::toasts::{ToastKind, Toasts};
use crate::util::guard::use_require_admin;

const RESULT_LIMIT: u32 = 10;

#[component]
pub fn EtlPage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let is_admin = use_require_admin();

    let provider = RwSignal::new(EtlProvider::Wildlife);
    let running = RwSignal::new(false);
    let version = RwSignal::new(0u32);

    // eBird is the only provider with run parameters.
    let region = RwSignal::new("world".to_owned());
    let species = RwSignal::new(String::new());

    let history = LocalResource::new(move || {
        let ready = is_admin.get();
        let provider = provider.get();
        version.track();
        async move {
            if !ready {
                return None;
            }
            Some(api::etl_history(auth, provider, RESULT_LIMIT).await)
        }
    });

    let results = LocalResource::new(move || {
        let ready = is_admin.get();
        let provider = provider.get();
        version.track();
        async move {
            if !ready {
                return None;
            }
            Some(api::etl_results(auth, provider, RESULT_LIMIT).await)
        }
    });

    let run = move |_| {
        if running.get_untracked() {
            return;
        }
        let selected = provider.get_untracked();
        let params = (selected == EtlProvider::Ebird).then(|| EtlRunRequest {
            region_code: region.get_untracked(),
            species: species.get_untracked().trim().to_owned(),
            max_results: 100,
        });
        running.set(true);
        leptos::task::spawn_local(async move {
            match api::run_etl(auth, selected, params.as_ref()).await {
                Ok(started) => {
                    toasts.update(|t| {
                        t.push("ETL started", &started.message, ToastKind::Success);
                    });
                    version.update(|v| *v += 1);
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.push("ETL error", &e.to_string(), ToastKind::Error);
                    });
                }
            }
            running.set(false);
        });
    };

    view! {
        <Show when=move || is_admin.get()>
            <div class="etl-page">
                <h1>"ETL control"</h1>

                <div class="etl-page__controls">
                    <label>
                        "Provider"
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(p) = EtlProvider::ALL.iter().find(|p| p.as_str() == value) {
                                provider.set(*p);
                            }
                        }>
                            {EtlProvider::ALL
                                .into_iter()
                                .map(|p| view! {
                                    <option value=p.as_str() selected=move || provider.get() == p>
                                        {p.label()}
                                    </option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <Show when=move || provider.get() == EtlProvider::Ebird>
                        <label>
                            "Region"
                            <input
                                type="text"
                                prop:value=move || region.get()
                                on:input=move |ev| region.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Species"
                            <input
                                type="text"
                                prop:value=move || species.get()
                                on:input=move |ev| species.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <button class="btn btn--primary" on:click=run disabled=move || running.get()>
                        {move || if running.get() { "Starting..." } else { "Run ETL" }}
                    </button>
                </div>

                <h2>"Recent runs"</h2>
                <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
                    {move || {
                        history.get().flatten().map(|outcome| match outcome {
                            Err(e) => {
                                view! { <p class="error">{format!("Could not load history: {e}")}</p> }
                                    .into_any()
                            }
                            Ok(entries) if entries.is_empty() => {
                                view! { <p>"No runs recorded for this provider."</p> }.into_any()
                            }
                            Ok(entries) => view! {
                                <table class="etl-page__history">
                                    <thead>
                                        <tr>
                                            <th>"Fetched at"</th>
                                            <th>"Status"</th>
                                            <th>"Error"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {entries
                                            .into_iter()
                                            .map(|e| view! {
                                                <tr>
                                                    <td>{e.fetched_at.unwrap_or_default()}</td>
                                                    <td>{e.status}</td>
                                                    <td>{e.error_message.unwrap_or_default()}</td>
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

                <h2>"Latest records"</h2>
                <Suspense fallback=move || view! { <p>"Loading records..."</p> }>
                    {move || {
                        results.get().flatten().map(|outcome| match outcome {
                            Err(e) => {
                                view! { <p class="error">{format!("Could not load records: {e}")}</p> }
                                    .into_any()
                            }
                            Ok(records) if records.is_empty() => {
                                view! { <p>"No stored records for this provider."</p> }.into_any()
                            }
                            Ok(records) => view! {
                                <table class="etl-page__results">
                                    <thead>
                                        <tr>
                                            <th>"Fetched at"</th>
                                            <th>"Status"</th>
                                            <th>"Items"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {records
                                            .into_iter()
                                            .map(|r| {
                                                let items = r
                                                    .data
                                                    .as_array()
                                                    .map_or(1, Vec::len);
                                                view! {
                                                    <tr>
                                                        <td>{r.fetched_at.unwrap_or_default()}</td>
                                                        <td>{r.status}</td>
                                                        <td>{items}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </div>
        </Show>
    }
}
