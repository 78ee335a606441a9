//! Auth backend HTTP client
//!
//! The marketplace backend owns sessions. This client forwards the
//! browser's cookie to it and relays any `Set-Cookie` headers it returns.

use market_types::{ApiResponse, SignInRequest, UserPayload, Viewer};
use reqwest::header::{HeaderValue, ACCEPT, COOKIE, SET_COOKIE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("auth backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("auth backend returned {0}")]
    Status(StatusCode),
}

impl BackendError {
    /// Backend rejected the credentials or has no session for them.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            BackendError::Status(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }
}

/// Backend response body plus the cookies it wants the browser to store.
#[derive(Debug)]
pub struct BackendReply<T> {
    pub body: T,
    pub set_cookies: Vec<HeaderValue>,
}

/// Client for the backend's `/auth/*` endpoints.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, BackendError> {
        // No cookie store: cookies belong to browsers, never to this shared client
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, cookie: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        request
    }

    /// `GET /auth/me` - the viewer behind the cookie.
    pub async fn me(&self, cookie: Option<&str>) -> Result<Viewer, BackendError> {
        let response = check_status(self.request(Method::GET, "/auth/me", cookie).send().await?)?;
        let payload: ApiResponse<UserPayload> = response.json().await?;
        debug!(role = %payload.data.user.role, "Backend confirmed session");
        Ok(payload.into_data().user)
    }

    /// `POST /auth/sign-in`
    pub async fn sign_in(
        &self,
        cookie: Option<&str>,
        request: &SignInRequest,
    ) -> Result<BackendReply<Viewer>, BackendError> {
        let response = check_status(
            self.request(Method::POST, "/auth/sign-in", cookie)
                .json(request)
                .send()
                .await?,
        )?;
        let set_cookies = set_cookies(&response);
        let payload: ApiResponse<UserPayload> = response.json().await?;
        Ok(BackendReply {
            body: payload.into_data().user,
            set_cookies,
        })
    }

    /// `GET /auth/sign-out`
    pub async fn sign_out(&self, cookie: Option<&str>) -> Result<BackendReply<()>, BackendError> {
        let response = check_status(self.request(Method::GET, "/auth/sign-out", cookie).send().await?)?;
        Ok(BackendReply {
            body: (),
            set_cookies: set_cookies(&response),
        })
    }
}

fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status(status))
    }
}

fn set_cookies(response: &Response) -> Vec<HeaderValue> {
    response.headers().get_all(SET_COOKIE).iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::net::SocketAddr;

    async fn spawn(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr) -> AuthClient {
        let url = Url::parse(&format!("http://{addr}/api/v1/")).unwrap();
        AuthClient::new(&url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_me_forwards_cookie() {
        let backend = Router::new().route(
            "/api/v1/auth/me",
            get(|headers: HeaderMap| async move {
                match headers.get("cookie").and_then(|v| v.to_str().ok()) {
                    Some("sid=abc") => Ok(Json(serde_json::json!({
                        "data": { "user": { "id": 1, "role": "admin" } }
                    }))),
                    _ => Err(StatusCode::UNAUTHORIZED),
                }
            }),
        );
        let client = client_for(spawn(backend).await);

        let viewer = client.me(Some("sid=abc")).await.unwrap();
        assert_eq!(viewer.id, "1");
        assert_eq!(viewer.role, market_types::Role::Admin);

        let err = client.me(None).await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_me_server_error_is_not_unauthorized() {
        let backend = Router::new().route(
            "/api/v1/auth/me",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = client_for(spawn(backend).await);

        let err = client.me(Some("sid=abc")).await.unwrap_err();
        assert!(matches!(err, BackendError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        assert!(!err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_sign_out_collects_set_cookie() {
        let backend = Router::new().route(
            "/api/v1/auth/sign-out",
            get(|| async {
                (
                    [(axum::http::header::SET_COOKIE, "sid=; Max-Age=0; Path=/")],
                    StatusCode::OK,
                )
            }),
        );
        let client = client_for(spawn(backend).await);

        let reply = client.sign_out(Some("sid=abc")).await.unwrap();
        assert_eq!(reply.set_cookies.len(), 1);
        assert_eq!(reply.set_cookies[0], "sid=; Max-Age=0; Path=/");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(addr).me(None).await.unwrap_err();
        assert!(matches!(err, BackendError::Transport(_)));
    }
}
