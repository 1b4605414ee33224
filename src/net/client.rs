//! API gateway: uniform request dispatch with bearer attachment and
//! one-shot recovery from expired credentials.
//!
//! Every call goes through [`ApiClient::dispatch`], which attaches the
//! session's bearer token, surfaces backend error messages as toasts, and
//! runs the refresh protocol on a 401: mark the call as retried, exchange
//! the ambient credential for a new access token, and redispatch exactly
//! once. The transport is a trait seam so the whole protocol runs against
//! a scripted fake in tests; the production transport lives in
//! [`super::http`].

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::paths;
use super::types::{Envelope, TokenGrant};
use crate::state::session::SessionStore;
use crate::state::toasts::ToastLevel;

/// Shown when the backend supplies no message of its own.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// HTTP method of an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Request payload. Multipart bodies only exist in the browser build.
pub enum Payload {
    Empty,
    Json(serde_json::Value),
    #[cfg(feature = "hydrate")]
    Form(web_sys::FormData),
}

/// One API call: method, path, query, payload, and the per-call toast
/// opt-out. The retry attempt counter is kept by the dispatch loop, not
/// hidden on the request itself.
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Payload,
    pub notify_on_error: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Payload::Empty,
            notify_on_error: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Payload::Json(body);
        self
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn multipart(mut self, form: web_sys::FormData) -> Self {
        self.body = Payload::Form(form);
        self
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Suppress the error toast for this call; the caller handles failure
    /// presentation itself.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.notify_on_error = false;
        self
    }
}

/// A decoded-enough HTTP response: status plus raw body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The backend-supplied `message` field of an error body, if any.
    pub fn error_message(&self) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()?
            .get("message")?
            .as_str()
            .map(ToOwned::to_owned)
    }
}

/// Gateway failure taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response at all (network/transport failure).
    #[error("network error: {0}")]
    Transport(String),
    /// A non-2xx response the caller may recover from.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Credentials could not be refreshed; the session has been cleared.
    #[error("session expired")]
    SessionExpired,
    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Transport seam under the gateway: send one HTTP request with an
/// optional bearer credential and return the raw response.
pub trait Transport {
    fn send(
        &self,
        req: &ApiRequest,
        bearer: Option<&str>,
    ) -> impl Future<Output = Result<ApiResponse, String>>;
}

/// Side-effect hooks the gateway fires on failures: `notify` raises a
/// toast, `goto_login` forces navigation after unrecoverable session loss.
/// Injected so tests can record both.
#[derive(Clone)]
pub struct GatewayHooks {
    pub notify: Arc<dyn Fn(ToastLevel, &str) + Send + Sync>,
    pub goto_login: Arc<dyn Fn() + Send + Sync>,
}

/// The API gateway. Cheap to clone; all clones share one transport,
/// session store, and hook set.
pub struct ApiClient<T> {
    transport: Arc<T>,
    session: SessionStore,
    hooks: GatewayHooks,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            session: self.session.clone(),
            hooks: self.hooks.clone(),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: SessionStore, hooks: GatewayHooks) -> Self {
        Self {
            transport: Arc::new(transport),
            session,
            hooks,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Dispatch one call, running the recovery protocol on 401.
    ///
    /// # Errors
    ///
    /// Rejects with the [`ApiError`] taxonomy; the only silent recovery is
    /// the 401 → refresh → redispatch success path.
    pub async fn dispatch(&self, req: ApiRequest) -> Result<ApiResponse, ApiError> {
        // Explicit per-call attempt counter: 0 = first send, 1 = already
        // retried once after a refresh.
        let mut attempt: u8 = 0;

        loop {
            let token = self.session.token();
            let resp = match self.transport.send(&req, token.as_deref()).await {
                Ok(resp) => resp,
                Err(err) => {
                    leptos::logging::warn!("transport failure on {}: {err}", req.path);
                    if req.notify_on_error {
                        (self.hooks.notify)(ToastLevel::Error, FALLBACK_MESSAGE);
                    }
                    return Err(ApiError::Transport(err));
                }
            };

            if resp.is_success() {
                return Ok(resp);
            }

            // The logout endpoint never enters the refresh protocol: any
            // failure still ends the session and lands on the login page.
            if req.path == paths::USERS_LOGOUT {
                self.session.clear_session();
                (self.hooks.goto_login)();
                return Err(ApiError::Status {
                    status: resp.status,
                    message: resp
                        .error_message()
                        .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned()),
                });
            }

            if resp.status == 401 && attempt == 0 {
                attempt = 1;
                if self.refresh_session().await.is_ok() {
                    // Redispatch exactly once; the loop re-reads the store
                    // so the fresh token is attached.
                    continue;
                }
                leptos::logging::warn!("token refresh failed; ending session");
                self.session.clear_session();
                (self.hooks.goto_login)();
                return Err(ApiError::SessionExpired);
            }

            let message = resp
                .error_message()
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned());
            if req.notify_on_error {
                (self.hooks.notify)(ToastLevel::Error, &message);
            }
            return Err(ApiError::Status {
                status: resp.status,
                message,
            });
        }
    }

    /// Exchange the ambient credential for a new access token and persist
    /// it against the already-stored identity.
    ///
    /// Sent straight through the transport, bypassing `dispatch`, so a
    /// refresh can never recursively trigger another refresh. Without a
    /// stored identity there is nothing to pair a token with and the
    /// refresh is reported as failed.
    async fn refresh_session(&self) -> Result<(), ApiError> {
        let Some(user) = self.session.snapshot().user else {
            return Err(ApiError::SessionExpired);
        };

        let req = ApiRequest::post(paths::USERS_REFRESH_TOKEN);
        let resp = self
            .transport
            .send(&req, None)
            .await
            .map_err(ApiError::Transport)?;
        if !resp.is_success() {
            return Err(ApiError::Status {
                status: resp.status,
                message: resp
                    .error_message()
                    .unwrap_or_else(|| FALLBACK_MESSAGE.to_owned()),
            });
        }

        let grant: Envelope<TokenGrant> = resp.json()?;
        self.session.set_session(user, grant.data.access_token);
        Ok(())
    }
}
