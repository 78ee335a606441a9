//! HTTP API handlers
//!
//! Same-origin proxy in front of the auth backend. The browser only ever
//! talks to these routes; cookies are passed through in both directions.

use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use market_types::{ApiResponse, SignInRequest, SignInValidation, UserPayload};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::app::api::{ME_PATH, SIGN_IN_API_PATH, SIGN_OUT_API_PATH};
use crate::backend::AuthClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthClient>,
}

impl AppState {
    pub fn new(auth: AuthClient) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}

/// API routes, ready to be merged with the Dioxus application.
///
/// The returned router is generic over its outer state so the Dioxus
/// fullstack router can be layered on top of it.
pub fn router<S>(state: AppState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/status", get(status_handler))
        .route(ME_PATH, get(me_handler))
        .route(SIGN_IN_API_PATH, post(sign_in_handler))
        .route(SIGN_OUT_API_PATH, post(sign_out_handler))
        .with_state(state)
}

/// Errors returned to the browser by the proxy.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not signed in")]
    Unauthorized,
    #[error(transparent)]
    Invalid(#[from] SignInValidation),
    #[error("auth backend unavailable")]
    BadGateway,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway => StatusCode::BAD_GATEWAY,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub backend: String,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "event-market",
        version: env!("CARGO_PKG_VERSION"),
        backend: state.auth.base_url().to_string(),
    })
}

/// GET /api/auth/me - Current viewer
///
/// 401/403 from the backend become 401. Any other backend failure is a 502,
/// which the browser retries once before treating the viewer as signed out.
pub async fn me_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserPayload>>, ApiError> {
    match state.auth.me(cookie_header(&headers)).await {
        Ok(user) => Ok(Json(ApiResponse::new(UserPayload { user }))),
        Err(e) if e.is_unauthorized() => {
            debug!("No backend session for request");
            Err(ApiError::Unauthorized)
        }
        Err(e) => {
            warn!(error = %e, "Session check against backend failed");
            Err(ApiError::BadGateway)
        }
    }
}

/// POST /api/auth/sign-in
pub async fn sign_in_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SignInRequest>,
) -> Result<Response, ApiError> {
    request.validate()?;

    let reply = state
        .auth
        .sign_in(cookie_header(&headers), &request.normalized())
        .await
        .map_err(|e| {
            if e.is_unauthorized() {
                ApiError::Unauthorized
            } else {
                warn!(error = %e, "Sign-in against backend failed");
                ApiError::BadGateway
            }
        })?;

    info!(role = %reply.body.role, "Viewer signed in");
    let mut response = Json(ApiResponse::new(UserPayload { user: reply.body })).into_response();
    relay_cookies(response.headers_mut(), reply.set_cookies);
    Ok(response)
}

/// POST /api/auth/sign-out
///
/// Always succeeds from the browser's point of view.
pub async fn sign_out_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    match state.auth.sign_out(cookie_header(&headers)).await {
        Ok(reply) => relay_cookies(response.headers_mut(), reply.set_cookies),
        Err(e) => warn!(error = %e, "Sign-out against backend failed"),
    }
    response
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(COOKIE).and_then(|v| v.to_str().ok())
}

fn relay_cookies(headers: &mut HeaderMap, cookies: Vec<HeaderValue>) {
    for cookie in cookies {
        headers.append(SET_COOKIE, cookie);
    }
}
