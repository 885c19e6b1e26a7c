//! Async client for the Voidgate remote command-execution API.
//!
//! # Overview
//! A thin request/response mapping layer: operations build JSON bodies, send
//! them through an injected [`HttpTransport`], and turn the reply into typed
//! results or a typed [`Error`]. Authentication is a password carried in each
//! request body, resolved per-call (override beats the configured default).
//!
//! # Design
//! - `VoidgateClient` holds only immutable configuration; every call is one
//!   stateless round-trip with no internal retries or logging.
//! - The transport seam (`HttpTransport`) keeps the client deterministic in
//!   tests; `ReqwestTransport` is the production implementation.
//! - A 2xx response with `success: false` is a legitimate result. Conflating
//!   it with errors would hide real command failures behind exceptions, so
//!   only non-2xx statuses map to `Error::Api`.
//! - Every operation takes a `CancellationToken`; a fired token aborts that
//!   call with `Error::Cancelled` and nothing else.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ClientOptions, VoidgateClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{
    ErrorPayload, ExecuteRequest, ExecuteResult, HealthStatus, RunScriptRequest, RunScriptResult,
};
