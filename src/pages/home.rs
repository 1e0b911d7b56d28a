//! Home page: image-to-animal identification.
//!
//! Picking a file uploads it straight away; the identified animal links to
//! the observation and map pages for the same species.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::AuthFetch;
use crate::net::types::Identification;
use crate::state::toasts::{ToastKind, Toasts};
use crate::util::guard::use_require_login;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = AuthFetch::from_context();
    let toasts = expect_context::<RwSignal<Toasts>>();
    let logged_in = use_require_login();

    let result = RwSignal::new(None::<Identification>);
    let busy = RwSignal::new(false);

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|f| f.get(0)) else {
                return;
            };
            busy.set(true);
            result.set(None);
            leptos::task::spawn_local(async move {
                match api::identify_image(auth, &file).await {
                    Ok(id) if id.error.is_none() => result.set(Some(id)),
                    Ok(id) => {
                        let msg = id.error.unwrap_or_else(|| "Identification failed.".to_owned());
                        toasts.update(|t| {
                            t.push("Identification error", &msg, ToastKind::Error);
                        });
                    }
                    Err(e) => {
                        toasts.update(|t| {
                            t.push("Identification error", &e.to_string(), ToastKind::Error);
                        });
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, auth, toasts);
        }
    };

    view! {
        <Show when=move || logged_in.get()>
            <div class="home-page">
                <h1>"What animal is this?"</h1>
                <p>"Upload a photo and the Wildlife API will identify it."</p>
                <label class="home-page__upload">
                    "Choose image"
                    <input type="file" accept="image/*" on:change=on_file disabled=move || busy.get()/>
                </label>
                <Show when=move || busy.get()>
                    <p>"Identifying..."</p>
                </Show>
                {move || result.get().map(|id| view! { <IdentificationCard id=id/> })}
            </div>
        </Show>
    }
}

/// Result card with taxonomy rows and links to observations and range map.
#[component]
fn IdentificationCard(id: Identification) -> impl IntoView {
    let name = id.name.clone().unwrap_or_else(|| "Unknown".to_owned());
    let score = id
        .score
        .map(|s| format!("{:.0}% confidence", s * 100.0))
        .unwrap_or_default();
    let obs_href = format!(
        "/bird-observations?{}",
        api::query_string(&[("species", &name)])
    );
    let map_href = format!("/locate-to-map?{}", api::query_string(&[("name", &name)]));

    let taxonomy = [
        ("Class", id.class),
        ("Order", id.order),
        ("Family", id.family),
        ("Genus", id.genus),
        ("Species", id.species),
    ];

    view! {
        <div class="identification-card">
            <h2>{name}</h2>
            <p class="identification-card__score">{score}</p>
            <table class="identification-card__taxonomy">
                <tbody>
                    {taxonomy
                        .into_iter()
                        .filter_map(|(rank, value)| {
                            value.map(|v| view! {
                                <tr>
                                    <th>{rank}</th>
                                    <td>{v}</td>
                                </tr>
                            })
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
            <div class="identification-card__links">
                <a class="btn" href=obs_href>"Recent sightings"</a>
                <a class="btn" href=map_href>"Range map"</a>
            </div>
        </div>
    }
}
