//! Bird observation lookup: recent eBird sightings for a species.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::net::types::Observation;
use crate::util::guard::use_require_login;

#[component]
pub fn ObservationsPage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let logged_in = use_require_login();
    let navigate = use_navigate();
    let query = use_query_map();

    let species = Memo::new(move |_| query.get().get("species").unwrap_or_default());
    let search = RwSignal::new(String::new());

    // Refetches whenever the species in the URL changes.
    let observations = LocalResource::new(move || {
        let species = species.get();
        let ready = logged_in.get();
        async move {
            if !ready || species.is_empty() {
                return None;
            }
            Some(api::ebird_observations_map(auth, &species).await)
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get_untracked().trim().to_owned();
        if !term.is_empty() {
            let href = format!(
                "/bird-observations?{}",
                api::query_string(&[("species", &term)])
            );
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <Show when=move || logged_in.get()>
            <div class="observations-page">
                <h1>"Bird observations"</h1>
                <form class="observations-page__search" on:submit=submit.clone()>
                    <input
                        type="text"
                        placeholder="Species (common or scientific name)"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>

                <Suspense fallback=move || view! { <p>"Loading observations..."</p> }>
                    {move || {
                        observations.get().map(|outcome| match outcome {
                            None => view! { <p>"Search for a species to see recent sightings."</p> }
                                .into_any(),
                            Some(Err(e)) => {
                                view! { <p class="error">{format!("Lookup failed: {e}")}</p> }
                                    .into_any()
                            }
                            Some(Ok(map)) => {
                                if let Some(err) = map.error {
                                    view! { <p class="error">{err}</p> }.into_any()
                                } else if map.observations.is_empty() {
                                    view! { <p>"No recent observations for this species."</p> }
                                        .into_any()
                                } else {
                                    view! { <ObservationTable rows=map.observations/> }.into_any()
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
fn ObservationTable(rows: Vec<Observation>) -> impl IntoView {
    view! {
        <table class="observations-page__table">
            <thead>
                <tr>
                    <th>"Species"</th>
                    <th>"Scientific name"</th>
                    <th>"Count"</th>
                    <th>"Date"</th>
                    <th>"Location"</th>
                    <th>"Coordinates"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|obs| {
                        let coords = match (obs.lat, obs.lon) {
                            (Some(lat), Some(lon)) => format!("{lat:.4}, {lon:.4}"),
                            _ => String::new(),
                        };
                        view! {
                            <tr>
                                <td>{obs.species.unwrap_or_default()}</td>
                                <td class="sci-name">{obs.sci_name.unwrap_or_default()}</td>
                                <td>{obs.how_many.map(|n| n.to_string()).unwrap_or_default()}</td>
                                <td>{obs.date.unwrap_or_default()}</td>
                                <td>{obs.location.unwrap_or_default()}</td>
                                <td>{coords}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
