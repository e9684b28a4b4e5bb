//! Request gateway: the single channel for all remote calls.
//!
//! Every call reads the token slot at call time, attaches it as a bearer
//! credential, and inspects the response before the caller sees it. A
//! `401` triggers the cross-cutting collapse policy: drop the stored
//! token, run the unauthorized hook, and still fail the call so pending
//! callers resolve.
//!
//! ERROR HANDLING
//! ==============
//! Every failure surfaces as a [`GatewayError`] with a [`GatewayErrorKind`]
//! so callers can distinguish a declined request from a dead network or a
//! rejected credential. Nothing is swallowed except the token-slot side
//! effects on `401`.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::net::token_store::TokenStore;

/// Default API endpoint when `PALACE_API_URL` is not set at build time.
const DEFAULT_API_URL: &str = "http://localhost:5000";

/// The remote service base endpoint, resolved once at build time.
pub fn api_base_url() -> &'static str {
    option_env!("PALACE_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Classification of a failed gateway call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// The request never completed (connectivity, DNS, aborted).
    Network,
    /// The bearer token was rejected; the session has been collapsed.
    Unauthorized,
    /// The server declined the request with an error status.
    Rejected,
    /// A success response carried a body that could not be parsed.
    Decode,
}

/// Typed failure returned from every gateway call.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
}

impl GatewayError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            kind: GatewayErrorKind::Unauthorized,
            message: "session expired or invalid".to_owned(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Rejected,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Decode,
            message: message.into(),
        }
    }
}

/// HTTP method subset the API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// An outbound request after the gateway has attached the credential.
#[derive(Clone, Debug)]
pub struct RawRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// A transport-level response before policy inspection.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between gateway policy and actual I/O.
///
/// `?Send` because browser futures are not `Send`.
#[async_trait(?Send)]
pub trait Transport {
    /// Perform one HTTP round-trip. Only connectivity-level failures are
    /// errors here; HTTP error statuses come back as a [`RawResponse`].
    async fn dispatch(&self, request: RawRequest) -> Result<RawResponse, GatewayError>;
}

/// `gloo-net` transport. Browser-only; on the server every dispatch fails
/// with a network error, mirroring the stubs elsewhere in the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn dispatch(&self, request: RawRequest) -> Result<RawResponse, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
            };
            let builder = match &request.bearer {
                Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
                None => builder,
            };
            let response = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| GatewayError::network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| GatewayError::network(e.to_string()))?;

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(GatewayError::network("not available on server"))
        }
    }
}

/// The single authenticated channel to the remote service.
#[derive(Clone)]
pub struct Gateway {
    base: String,
    transport: Rc<dyn Transport>,
    store: Rc<dyn TokenStore>,
    on_unauthorized: Rc<dyn Fn()>,
}

impl Gateway {
    pub fn new(
        base: impl Into<String>,
        transport: Rc<dyn Transport>,
        store: Rc<dyn TokenStore>,
        on_unauthorized: impl Fn() + 'static,
    ) -> Self {
        Self {
            base: base.into(),
            transport,
            store,
            on_unauthorized: Rc::new(on_unauthorized),
        }
    }

    /// The token store this gateway reads its credential from.
    pub fn store(&self) -> Rc<dyn TokenStore> {
        Rc::clone(&self.store)
    }

    pub async fn get(&self, path: &str) -> Result<Value, GatewayError> {
        self.send(Method::Get, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value, GatewayError> {
        self.send(Method::Post, path, Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value, GatewayError> {
        self.send(Method::Put, path, Some(body)).await
    }

    /// Dispatch one request with the current credential attached.
    ///
    /// The token is read from the store at call time, never memoized, so a
    /// slot cleared mid-flight simply means the next call goes out without
    /// a credential.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        let request = RawRequest {
            method,
            url: format!("{}{}", self.base, path),
            bearer: self.store.get(),
            body,
        };
        let response = self.transport.dispatch(request).await?;
        self.inspect(&response)
    }

    /// Response policy applied to every call.
    fn inspect(&self, response: &RawResponse) -> Result<Value, GatewayError> {
        if response.status == 401 {
            leptos::logging::warn!("bearer token rejected; collapsing session");
            self.store.clear();
            (self.on_unauthorized)();
            return Err(GatewayError::unauthorized());
        }
        if !(200..300).contains(&response.status) {
            return Err(GatewayError::rejected(Self::error_message(response)));
        }
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| GatewayError::decode(e.to_string()))
    }

    /// The server-supplied `{"error": …}` message, or a generic fallback.
    fn error_message(response: &RawResponse) -> String {
        serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_owned))
            .unwrap_or_else(|| format!("request failed with status {}", response.status))
    }
}
