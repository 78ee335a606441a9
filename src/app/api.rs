//! HTTP helpers for the UI.
//!
//! In the browser these go through `fetch` against same-origin paths; in
//! the server build they use reqwest against the configured public URL.
//! Either way, failures come back as [`SessionError`] so callers get one
//! error vocabulary.

use market_types::{ApiResponse, SignInRequest, UserPayload, Viewer};
use serde::{de::DeserializeOwned, Serialize};

use crate::session::{resolve_session, SessionError, SessionState, DEFAULT_SESSION_RETRIES};

pub const ME_PATH: &str = "/api/auth/me";
pub const SIGN_IN_API_PATH: &str = "/api/auth/sign-in";
pub const SIGN_OUT_API_PATH: &str = "/api/auth/sign-out";

/// GET a JSON document.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, SessionError> {
    let body = send("GET", path, None).await?;
    decode(&body)
}

/// POST a JSON body and decode the JSON reply.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, SessionError> {
    let reply = send("POST", path, Some(encode(body)?)).await?;
    decode(&reply)
}

/// POST a JSON body, ignoring whatever comes back.
pub async fn post_no_response<B: Serialize>(path: &str, body: &B) -> Result<(), SessionError> {
    send("POST", path, Some(encode(body)?)).await.map(|_| ())
}

/// Resolve the current session, failing closed.
pub async fn check_session() -> SessionState {
    resolve_session(DEFAULT_SESSION_RETRIES, || async {
        fetch_json::<ApiResponse<UserPayload>>(ME_PATH)
            .await
            .map(|response| response.into_data().user)
    })
    .await
}

/// Sign in; on success the backend has set the session cookie.
pub async fn sign_in(request: &SignInRequest) -> Result<Viewer, SessionError> {
    post_json::<_, ApiResponse<UserPayload>>(SIGN_IN_API_PATH, request)
        .await
        .map(|response| response.into_data().user)
}

pub async fn sign_out() -> Result<(), SessionError> {
    post_no_response(SIGN_OUT_API_PATH, &()).await
}

fn encode<B: Serialize>(body: &B) -> Result<String, SessionError> {
    serde_json::to_string(body).map_err(|e| SessionError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, SessionError> {
    serde_json::from_str(body).map_err(|e| SessionError::Decode(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn send(method: &str, path: &str, body: Option<String>) -> Result<String, SessionError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    fn js_err(e: JsValue) -> SessionError {
        SessionError::Network(format!("{e:?}"))
    }

    let window = web_sys::window().ok_or_else(|| SessionError::Network("no window".into()))?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(path, &init).map_err(js_err)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_err)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(js_err)?;
    }

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = value.dyn_into().map_err(js_err)?;

    if !response.ok() {
        return Err(SessionError::from_status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(text.as_string().unwrap_or_default())
}

#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
async fn send(method: &str, path: &str, body: Option<String>) -> Result<String, SessionError> {
    use reqwest::header::{ACCEPT, CONTENT_TYPE};

    let config = crate::config::load_config().map_err(|e| SessionError::Network(e.to_string()))?;
    let url = format!("{}{}", config.public_url(), path);
    let method = reqwest::Method::from_bytes(method.as_bytes())
        .map_err(|e| SessionError::Network(e.to_string()))?;

    let mut request = reqwest::Client::new()
        .request(method, &url)
        .header(ACCEPT, "application/json");
    if let Some(body) = body {
        request = request.header(CONTENT_TYPE, "application/json").body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SessionError::from_status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))
}

#[cfg(not(any(feature = "server", target_arch = "wasm32")))]
async fn send(_method: &str, _path: &str, _body: Option<String>) -> Result<String, SessionError> {
    Err(SessionError::Network("no HTTP transport in this build".into()))
}
