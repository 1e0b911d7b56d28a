//! Authenticated fetch layer shared by every API call.
//!
//! DESIGN
//! ======
//! Response handling is split into a pure classifier (`classify`) and a thin
//! adapter (`AuthFetch`) that performs the session-clearing and navigation
//! side effects only for the unauthorized tag. The classifier and the
//! `on_unauthorized` helper have no browser dependencies, so the contract is
//! testable on the host.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as an `ApiError`; the only controlled side effect
//! is the 401/403 path, which clears the session atomically and issues
//! exactly one navigation to the login page. Callers must not expect a
//! response body after an `Unauthorized` error.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

use leptos::prelude::{RwSignal, Update};

use crate::state::session::Session;

/// Login entry point used by the forced-logout redirect.
pub const LOGIN_PATH: &str = "/login";

/// Failure taxonomy of the fetch contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401/403; the session has been cleared and navigation issued.
    #[error("unauthorized")]
    Unauthorized,
    /// Non-2xx with a best-effort human message from the body.
    #[error("{0}")]
    RequestFailed(String),
    /// 2xx whose body was not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// Transport-level failure before any status was available.
    #[error("network error: {0}")]
    Network(String),
}

/// HTTP method for the fetch contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Pure classification of a response, independent of any UI runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum Classified {
    Ok(serde_json::Value),
    Unauthorized,
    Failed(ApiError),
}

/// Classify a status/body pair per the fetch contract.
///
/// 401/403 tag as `Unauthorized`. Other non-2xx extract the first of
/// `detail`, `error` from a JSON body, falling back to `HTTP <status>`.
/// 2xx parses the body as JSON and tags a parse failure as malformed.
pub fn classify(status: u16, body: &str) -> Classified {
    if status == 401 || status == 403 {
        return Classified::Unauthorized;
    }
    if (200..300).contains(&status) {
        return match serde_json::from_str(body) {
            Ok(value) => Classified::Ok(value),
            Err(e) => Classified::Failed(ApiError::MalformedResponse(e.to_string())),
        };
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["detail", "error"]
                .into_iter()
                .find_map(|k| v.get(k).and_then(serde_json::Value::as_str).map(str::to_owned))
        })
        .unwrap_or_else(|| format!("HTTP {status}"));
    Classified::Failed(ApiError::RequestFailed(message))
}

/// Side-effect core of the unauthorized path: one atomic session clear and
/// one navigation. The navigation hook is injected so tests can observe it.
pub fn on_unauthorized(session: &mut Session, navigate: &mut dyn FnMut(&str)) {
    session.clear();
    navigate(LOGIN_PATH);
}

/// Run `attempt`; on an unauthorized outcome run `refresh` once and retry
/// once. Any other outcome passes through untouched. The refresh closure is
/// responsible for storing the new tokens.
pub async fn attempt_with_refresh<T, A, AF, R, RF>(mut attempt: A, refresh: R) -> Result<T, ApiError>
where
    A: FnMut() -> AF,
    AF: Future<Output = Result<T, ApiError>>,
    R: FnOnce() -> RF,
    RF: Future<Output = Result<(), ApiError>>,
{
    match attempt().await {
        Err(ApiError::Unauthorized) => match refresh().await {
            Ok(()) => attempt().await,
            Err(_) => Err(ApiError::Unauthorized),
        },
        other => other,
    }
}

/// Hard navigation, dropping all reactive state.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Wraps API calls with credential attachment and uniform failure handling.
///
/// Holds the shared session signal. Construct once per call site from the
/// context the root component provides; the adapter is `Copy` like the
/// signal it wraps.
#[derive(Clone, Copy)]
pub struct AuthFetch {
    session: RwSignal<Session>,
}

impl AuthFetch {
    pub fn new(session: RwSignal<Session>) -> Self {
        Self { session }
    }

    /// Grab the adapter from the session context provided by `App`.
    pub fn from_context() -> Self {
        Self::new(leptos::prelude::expect_context::<RwSignal<Session>>())
    }

    pub fn session(&self) -> RwSignal<Session> {
        self.session
    }

    /// Clear the session and send the browser to the login page.
    pub fn force_logout(&self) {
        self.session
            .update(|s| on_unauthorized(s, &mut |path| redirect(path)));
    }

    /// Base contract: attach credentials, classify, and on 401/403 clear
    /// the session and navigate. No automatic retry.
    pub async fn fetch_json(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch_json_with(method, url, &[], body).await
    }

    /// Base contract with caller-supplied headers, which win over the
    /// injected `Content-Type` and `Authorization` defaults.
    #[cfg(feature = "hydrate")]
    pub async fn fetch_json_with(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        match self.request(method, url, headers, body).await? {
            Classified::Ok(value) => Ok(value),
            Classified::Unauthorized => {
                log::warn!("unauthorized response from {url}; clearing session");
                self.force_logout();
                Err(ApiError::Unauthorized)
            }
            Classified::Failed(err) => Err(err),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_async)]
    pub async fn fetch_json_with(
        &self,
        _method: Method,
        _url: &str,
        _headers: &[(&str, &str)],
        _body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        Err(ApiError::Network("not available on server".to_owned()))
    }

    /// Refresh decorator: attempt, on unauthorized refresh the tokens once
    /// and retry once, otherwise force the logout path. Composed over the
    /// base contract instead of being re-implemented per page.
    #[cfg(feature = "hydrate")]
    pub async fn fetch_json_with_refresh(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        let result = attempt_with_refresh(
            || self.fetch_json_quiet(method, url, body),
            || self.refresh_session(),
        )
        .await;
        if matches!(result, Err(ApiError::Unauthorized)) {
            log::warn!("refresh-and-retry for {url} failed; clearing session");
            self.force_logout();
        }
        result
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_async)]
    pub async fn fetch_json_with_refresh(
        &self,
        _method: Method,
        _url: &str,
        _body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        Err(ApiError::Network("not available on server".to_owned()))
    }

    /// One classified request without the unauthorized side effects.
    #[cfg(feature = "hydrate")]
    async fn fetch_json_quiet(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        match self.request(method, url, &[], body).await? {
            Classified::Ok(value) => Ok(value),
            Classified::Unauthorized => Err(ApiError::Unauthorized),
            Classified::Failed(err) => Err(err),
        }
    }

    /// Exchange the stored refresh token for fresh credentials.
    #[cfg(feature = "hydrate")]
    async fn refresh_session(&self) -> Result<(), ApiError> {
        use leptos::prelude::GetUntracked;

        let refresh_token = self.session.get_untracked().tokens.refresh_token;
        if refresh_token.is_empty() {
            return Err(ApiError::Unauthorized);
        }
        let mut tokens = crate::net::api::refresh(&refresh_token).await?;
        self.session.update(|s| {
            // The refresh endpoint may rotate only the access token.
            if tokens.refresh_token.is_empty() {
                tokens.refresh_token = s.tokens.refresh_token.clone();
            }
            s.set_tokens(tokens);
        });
        Ok(())
    }

    /// Build, send, and classify one request. No side effects.
    #[cfg(feature = "hydrate")]
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> Result<Classified, ApiError> {
        use leptos::prelude::GetUntracked;

        let mut req = gloo_net::http::RequestBuilder::new(url)
            .method(to_gloo(method))
            .header("Content-Type", "application/json");
        let session = self.session.get_untracked();
        if let Some(token) = session.bearer() {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        for (name, value) in headers {
            req = req.header(name, value);
        }
        let req = match body {
            Some(json) => req
                .body(json.to_string())
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => req.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = resp.text().await.unwrap_or_default();
        Ok(classify(resp.status(), &text))
    }
}

#[cfg(feature = "hydrate")]
fn to_gloo(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}
