//! Observation map: eBird and community sightings for a country.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::net::types::{LocalObservation, Observation, SearchResults};
use crate::util::guard::use_require_login;

const SEARCH_LIMIT: u32 = 100;

#[component]
pub fn MapSearchPage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let logged_in = use_require_login();
    let navigate = use_navigate();
    let query = use_query_map();

    let country = Memo::new(move |_| query.get().get("country").unwrap_or_default());
    let search = RwSignal::new(String::new());

    let results = LocalResource::new(move || {
        let country = country.get();
        let ready = logged_in.get();
        async move {
            if !ready || country.is_empty() {
                return None;
            }
            Some(api::search_observations(auth, &country, SEARCH_LIMIT).await)
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get_untracked().trim().to_owned();
        if !term.is_empty() {
            let href = format!("/map-search?{}", api::query_string(&[("country", &term)]));
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <Show when=move || logged_in.get()>
            <div class="map-search-page">
                <h1>"Observation map"</h1>
                <p>"Search for a country to see sightings from eBird and our community."</p>
                <form class="map-search-page__search" on:submit=submit.clone()>
                    <input
                        type="text"
                        placeholder="Country name or code (e.g. Spain, US)"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>

                <Suspense fallback=move || view! { <p>"Searching observations..."</p> }>
                    {move || {
                        results.get().flatten().map(|outcome| match outcome {
                            Err(e) => {
                                view! { <p class="error">{format!("Search failed: {e}")}</p> }
                                    .into_any()
                            }
                            Ok(found) => view! { <SearchResultView found=found/> }.into_any(),
                        })
                    }}
                </Suspense>
            </div>
        </Show>
    }
}

#[component]
fn SearchResultView(found: SearchResults) -> impl IntoView {
    view! {
        <div class="map-search-page__results">
            <p class="map-search-page__region">{format!("Region: {}", found.region_code)}</p>

            <h2>"eBird sightings"</h2>
            {match found.ebird_error {
                Some(err) => view! { <p class="error">{err}</p> }.into_any(),
                None if found.ebird.is_empty() => {
                    view! { <p>"No eBird sightings for this region."</p> }.into_any()
                }
                None => view! { <EbirdTable rows=found.ebird/> }.into_any(),
            }}

            <h2>"Community observations"</h2>
            {match found.local_error {
                Some(err) => view! { <p class="error">{err}</p> }.into_any(),
                None if found.local.is_empty() => {
                    view! { <p>"No community uploads for this region."</p> }.into_any()
                }
                None => view! { <LocalTable rows=found.local/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn EbirdTable(rows: Vec<Observation>) -> impl IntoView {
    view! {
        <table class="map-search-page__ebird">
            <thead>
                <tr>
                    <th>"Species"</th>
                    <th>"Location"</th>
                    <th>"Date"</th>
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
                                <td>{obs.location.unwrap_or_default()}</td>
                                <td>{obs.date.unwrap_or_default()}</td>
                                <td>{coords}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn LocalTable(rows: Vec<LocalObservation>) -> impl IntoView {
    view! {
        <table class="map-search-page__local">
            <thead>
                <tr>
                    <th>"Photo"</th>
                    <th>"Species"</th>
                    <th>"Confidence"</th>
                    <th>"Spotted by"</th>
                    <th>"Date"</th>
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
                                <td>
                                    <img
                                        class="map-search-page__photo"
                                        src=obs.image
                                        alt=obs.species.clone()
                                    />
                                </td>
                                <td>{obs.species}</td>
                                <td>{format!("{:.1}%", obs.confidence * 100.0)}</td>
                                <td>{obs.user_name}</td>
                                <td>{obs.timestamp.unwrap_or_default()}</td>
                                <td>{coords}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
