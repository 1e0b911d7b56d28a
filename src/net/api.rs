//! Typed REST helpers for the backend's `/api/v1` surface.
//!
//! Everything that runs with a session goes through the [`AuthFetch`]
//! contract; only the token endpoints (no session yet) and the multipart
//! image upload (browser-managed content type) build their own requests.

use crate::net::http::{ApiError, AuthFetch, Method};
use crate::net::types::{
    AnimalMap, EtlHistoryEntry, EtlProvider, EtlRecord, EtlRunRequest, EtlStarted, Identification,
    LoginLog, Msg, ObservationMap, SearchResults, TemporalPatterns, UserCreate, UserRegister,
    UserUpdate, from_value,
};
use crate::state::session::{Session, Tokens, UserProfile};

/// Backend base URL, overridable at build time.
pub fn api_base() -> &'static str {
    option_env!("FIELDFARE_API_URL").unwrap_or("/api/v1")
}

/// Form-encode query pairs (`/` and spaces escaped) for URLs and bodies.
pub fn query_string(pairs: &[(&str, &str)]) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        ser.append_pair(name, value);
    }
    ser.finish()
}

/// Drain a raw response through the contract classifier.
#[cfg(feature = "hydrate")]
async fn classified(resp: gloo_net::http::Response) -> Result<serde_json::Value, ApiError> {
    use crate::net::http::{Classified, classify};

    let text = resp.text().await.unwrap_or_default();
    match classify(resp.status(), &text) {
        Classified::Ok(value) => Ok(value),
        Classified::Unauthorized => Err(ApiError::Unauthorized),
        Classified::Failed(err) => Err(err),
    }
}

/// Exchange credentials for tokens via `POST /login/oauth` (form-encoded).
///
/// Runs outside the fetch contract: there is no session yet, and a 401 here
/// means bad credentials rather than an expired session.
pub async fn login(username: &str, password: &str) -> Result<Tokens, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = query_string(&[("username", username), ("password", password)]);
        let resp = gloo_net::http::Request::post(&format!("{}/login/oauth", api_base()))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        from_value(classified(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Trade the refresh token for fresh credentials via `POST /login/refresh`.
pub async fn refresh(refresh_token: &str) -> Result<Tokens, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{}/login/refresh", api_base()))
            .header("Authorization", &format!("Bearer {refresh_token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        from_value(classified(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Full sign-in flow: exchange credentials, store tokens, load the profile.
///
/// Any failure clears the session so a half-initialized login is never kept.
pub async fn sign_in(auth: AuthFetch, username: &str, password: &str) -> Result<(), ApiError> {
    use leptos::prelude::Update;

    let tokens = login(username, password).await?;
    auth.session().update(|s| s.set_tokens(tokens));
    match fetch_profile(auth).await {
        Ok(profile) => {
            auth.session().update(|s| s.set_profile(profile));
            Ok(())
        }
        Err(e) => {
            auth.session().update(Session::clear);
            Err(e)
        }
    }
}

/// Open registration via `POST /users/`.
pub async fn register(payload: &UserRegister) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{}/users/", api_base()))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        from_value(classified(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the signed-in user's profile via `GET /users/`.
pub async fn fetch_profile(auth: AuthFetch) -> Result<UserProfile, ApiError> {
    let url = format!("{}/users/", api_base());
    from_value(auth.fetch_json(Method::Get, &url, None).await?)
}

/// Update the signed-in user's profile via `PUT /users/`.
pub async fn update_profile(auth: AuthFetch, update: &UserUpdate) -> Result<UserProfile, ApiError> {
    let url = format!("{}/users/", api_base());
    let body = serde_json::to_value(update).map_err(|e| ApiError::Network(e.to_string()))?;
    from_value(auth.fetch_json(Method::Put, &url, Some(&body)).await?)
}

/// Admin: list every user via `GET /users/all`.
///
/// Uses the refresh-and-retry composition since admin sessions routinely
/// outlive one access token while the page sits open.
pub async fn fetch_all_users(auth: AuthFetch) -> Result<Vec<UserProfile>, ApiError> {
    let url = format!("{}/users/all", api_base());
    from_value(auth.fetch_json_with_refresh(Method::Get, &url, None).await?)
}

/// Admin: flip a user's active flag via `POST /users/toggle-state`.
pub async fn toggle_user_state(auth: AuthFetch, email: &str) -> Result<Msg, ApiError> {
    let url = format!("{}/users/toggle-state", api_base());
    let body = serde_json::json!({ "email": email });
    from_value(
        auth.fetch_json_with_refresh(Method::Post, &url, Some(&body))
            .await?,
    )
}

/// Admin: create a user via `POST /users/create`.
pub async fn create_user(auth: AuthFetch, payload: &UserCreate) -> Result<UserProfile, ApiError> {
    let url = format!("{}/users/create", api_base());
    let body = serde_json::to_value(payload).map_err(|e| ApiError::Network(e.to_string()))?;
    from_value(
        auth.fetch_json_with_refresh(Method::Post, &url, Some(&body))
            .await?,
    )
}

/// Admin: edit another user via `PUT /users/{id}`.
pub async fn update_user(
    auth: AuthFetch,
    user_id: &str,
    update: &UserUpdate,
) -> Result<UserProfile, ApiError> {
    let url = format!("{}/users/{user_id}", api_base());
    let body = serde_json::to_value(update).map_err(|e| ApiError::Network(e.to_string()))?;
    from_value(
        auth.fetch_json_with_refresh(Method::Put, &url, Some(&body))
            .await?,
    )
}

/// Admin: delete a user via `DELETE /users/{id}`.
pub async fn delete_user(auth: AuthFetch, user_id: &str) -> Result<Msg, ApiError> {
    let url = format!("{}/users/{user_id}", api_base());
    from_value(
        auth.fetch_json_with_refresh(Method::Delete, &url, None)
            .await?,
    )
}

/// Trigger an ETL run via `POST /etl/{provider}/run`.
///
/// Only the eBird provider takes a request body (region/species/limit).
pub async fn run_etl(
    auth: AuthFetch,
    provider: EtlProvider,
    params: Option<&EtlRunRequest>,
) -> Result<EtlStarted, ApiError> {
    let url = format!("{}/etl/{}/run", api_base(), provider.as_str());
    let body = match params {
        Some(p) => Some(serde_json::to_value(p).map_err(|e| ApiError::Network(e.to_string()))?),
        None => None,
    };
    from_value(auth.fetch_json(Method::Post, &url, body.as_ref()).await?)
}

/// Latest stored records via `GET /etl/{provider}/results`.
pub async fn etl_results(
    auth: AuthFetch,
    provider: EtlProvider,
    limit: u32,
) -> Result<Vec<EtlRecord>, ApiError> {
    let url = format!(
        "{}/etl/{}/results?limit={limit}",
        api_base(),
        provider.as_str()
    );
    from_value(auth.fetch_json(Method::Get, &url, None).await?)
}

/// Run history via `GET /etl/{provider}/history`.
pub async fn etl_history(
    auth: AuthFetch,
    provider: EtlProvider,
    limit: u32,
) -> Result<Vec<EtlHistoryEntry>, ApiError> {
    let url = format!(
        "{}/etl/{}/history?limit={limit}",
        api_base(),
        provider.as_str()
    );
    from_value(auth.fetch_json(Method::Get, &url, None).await?)
}

/// Admin: recent login attempts via `GET /logs/`, newest first.
pub async fn fetch_login_logs(auth: AuthFetch) -> Result<Vec<LoginLog>, ApiError> {
    let url = format!("{}/logs/", api_base());
    from_value(auth.fetch_json_with_refresh(Method::Get, &url, None).await?)
}

/// eBird plus community sightings for a country via
/// `GET /observations/search`. The backend resolves country names to region
/// codes; anything it does not recognize passes through uppercased.
pub async fn search_observations(
    auth: AuthFetch,
    country: &str,
    max_results: u32,
) -> Result<SearchResults, ApiError> {
    let max = max_results.to_string();
    let url = format!(
        "{}/observations/search?{}",
        api_base(),
        query_string(&[("country", country), ("max_results", &max)])
    );
    from_value(auth.fetch_json(Method::Get, &url, None).await?)
}

/// Temporal activity analysis via `GET /analytics/temporal-patterns`.
///
/// An empty `species` analyzes all species and is omitted from the query,
/// matching what the endpoint expects.
pub async fn temporal_patterns(
    auth: AuthFetch,
    species: &str,
    days: u32,
    include_habitat: bool,
) -> Result<TemporalPatterns, ApiError> {
    let days = days.to_string();
    let habitat = include_habitat.to_string();
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if !species.is_empty() {
        pairs.push(("species", species));
    }
    pairs.push(("days", &days));
    pairs.push(("include_habitat", &habitat));
    let url = format!(
        "{}/analytics/temporal-patterns?{}",
        api_base(),
        query_string(&pairs)
    );
    from_value(auth.fetch_json(Method::Get, &url, None).await?)
}

/// Geocode an animal's range via `GET /maps/animal-to-map`.
pub async fn animal_to_map(auth: AuthFetch, name: &str) -> Result<AnimalMap, ApiError> {
    let url = format!("{}/maps/animal-to-map?{}", api_base(), query_string(&[("name", name)]));
    from_value(auth.fetch_json(Method::Get, &url, None).await?)
}

/// Recent eBird sightings for a species via `GET /maps/ebird-observations-map`.
pub async fn ebird_observations_map(
    auth: AuthFetch,
    species: &str,
) -> Result<ObservationMap, ApiError> {
    let url = format!(
        "{}/maps/ebird-observations-map?{}",
        api_base(),
        query_string(&[("species", species)])
    );
    from_value(auth.fetch_json(Method::Get, &url, None).await?)
}

/// Identify an uploaded image via `POST /image-to-animal-info` (multipart).
///
/// Built outside `fetch_json` because the browser must pick the multipart
/// boundary; the unauthorized side effect is applied manually so the
/// contract semantics still hold.
#[cfg(feature = "hydrate")]
pub async fn identify_image(
    auth: AuthFetch,
    file: &web_sys::File,
) -> Result<Identification, ApiError> {
    use leptos::prelude::GetUntracked;

    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("form data".to_owned()))?;

    let mut req = gloo_net::http::Request::post(&format!("{}/image-to-animal-info", api_base()));
    let session = auth.session().get_untracked();
    if let Some(token) = session.bearer() {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = req
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let result = classified(resp).await;
    if matches!(result, Err(ApiError::Unauthorized)) {
        auth.force_logout();
    }
    from_value(result?)
}
