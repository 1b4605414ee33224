//! Production transport over browser `fetch` via `gloo-net`.
//!
//! Client-side (hydrate): real HTTP calls with ambient cookies included,
//! since the refresh endpoint exchanges a cookie-held credential.
//! Server-side (SSR): an inert stub, matching how the rest of the network
//! layer degrades outside the browser.

use std::future::Future;

use super::client::{ApiRequest, ApiResponse, Transport};

/// Transport that talks to the configured backend base URL.
pub struct HttpTransport {
    base: String,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_base(super::API_BASE)
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        req: &ApiRequest,
        bearer: Option<&str>,
    ) -> impl Future<Output = Result<ApiResponse, String>> {
        send_once(&self.base, req, bearer)
    }
}

#[cfg(feature = "hydrate")]
async fn send_once(
    base: &str,
    req: &ApiRequest,
    bearer: Option<&str>,
) -> Result<ApiResponse, String> {
    use gloo_net::http::Request;

    use super::client::{Method, Payload};

    let url = format!("{base}{}", req.path);
    let mut builder = match req.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };

    if !req.query.is_empty() {
        builder = builder.query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    builder = builder.credentials(web_sys::RequestCredentials::Include);

    if let Some(token) = bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    // JSON by default; multipart when a file payload is present (the
    // browser sets the boundary header itself).
    let request = match &req.body {
        Payload::Empty => builder.build(),
        Payload::Json(value) => builder.json(value),
        Payload::Form(form) => builder.body(form.clone()),
    }
    .map_err(|e| e.to_string())?;

    let resp = request.send().await.map_err(|e| e.to_string())?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| e.to_string())?;

    Ok(ApiResponse { status, body })
}

#[cfg(not(feature = "hydrate"))]
async fn send_once(
    _base: &str,
    _req: &ApiRequest,
    _bearer: Option<&str>,
) -> Result<ApiResponse, String> {
    Err("not available on server".to_owned())
}
