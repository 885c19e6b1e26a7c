//! HTTP transport boundary.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe the wire exchange as plain data
//! so the client's request building and response interpretation stay
//! deterministic and testable without a network. `HttpTransport` is the seam:
//! production code uses `ReqwestTransport`, tests inject a stub. The
//! transport never interprets status codes; 4xx/5xx come back as data and the
//! client decides what they mean.
//!
//! All fields use owned types (`String`, `Vec`) so values can be captured by
//! recording stubs and moved across tasks without lifetime concerns.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Error;

/// HTTP method for a request. The Voidgate API only uses these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data, with a fully resolved URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data. `reason` is the status line's
/// reason phrase when the transport knows it; the client falls back to a
/// generic message when it is absent.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The injected HTTP mechanism the client sends through.
///
/// Implementations must be safe for concurrent use: a single transport may
/// carry multiple in-flight calls from the same client.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one round-trip. Non-2xx statuses are returned as data, not
    /// errors; `Err` means the exchange itself failed (connect, timeout,
    /// broken stream).
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// Production transport backed by a `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport, applying `timeout` to every request it carries.
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_send_error)?;

        let status = response.status();
        let reason = status.canonical_reason().map(str::to_string);
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        // Body read is best-effort: an unreadable body becomes an empty one
        // and status interpretation proceeds.
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            headers,
            body,
        })
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        Error::Transport(format!("connection failed: {err}"))
    } else {
        Error::Transport(err.to_string())
    }
}
