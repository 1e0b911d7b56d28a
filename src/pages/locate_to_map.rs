//! Animal range lookup: geocoded locations for an animal name.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::net::types::AnimalMap;
use crate::util::guard::use_require_login;

#[component]
pub fn LocateToMapPage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let logged_in = use_require_login();
    let navigate = use_navigate();
    let query = use_query_map();

    let name = Memo::new(move |_| query.get().get("name").unwrap_or_default());
    let search = RwSignal::new(String::new());

    let map = LocalResource::new(move || {
        let name = name.get();
        let ready = logged_in.get();
        async move {
            if !ready || name.is_empty() {
                return None;
            }
            Some(api::animal_to_map(auth, &name).await)
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get_untracked().trim().to_owned();
        if !term.is_empty() {
            let href = format!("/locate-to-map?{}", api::query_string(&[("name", &term)]));
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <Show when=move || logged_in.get()>
            <div class="locate-page">
                <h1>"Animal range map"</h1>
                <form class="locate-page__search" on:submit=submit.clone()>
                    <input
                        type="text"
                        placeholder="Animal name"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>

                <Suspense fallback=move || view! { <p>"Looking up locations..."</p> }>
                    {move || {
                        map.get().map(|outcome| match outcome {
                            None => view! { <p>"Search for an animal to map its range."</p> }
                                .into_any(),
                            Some(Err(e)) => {
                                view! { <p class="error">{format!("Lookup failed: {e}")}</p> }
                                    .into_any()
                            }
                            Some(Ok(mut result)) => {
                                if let Some(err) = result.error.take() {
                                    view! { <p class="error">{err}</p> }.into_any()
                                } else {
                                    view! { <RangeResult result=result/> }.into_any()
                                }
                            }
                        })
                    }}
                </Suspense>
            </div>
        </Show>
    }
}

#[component]
fn RangeResult(result: AnimalMap) -> impl IntoView {
    view! {
        <div class="locate-page__result">
            <h2>{result.animal_name}</h2>
            <p>{format!("Known range: {}", result.locations.join(", "))}</p>
            <table class="locate-page__points">
                <thead>
                    <tr>
                        <th>"Location"</th>
                        <th>"Latitude"</th>
                        <th>"Longitude"</th>
                    </tr>
                </thead>
                <tbody>
                    {result
                        .map_data
                        .into_iter()
                        .map(|p| view! {
                            <tr>
                                <td>{p.location}</td>
                                <td>{format!("{:.4}", p.lat)}</td>
                                <td>{format!("{:.4}", p.lon)}</td>
                            </tr>
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
