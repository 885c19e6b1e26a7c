//! The Voidgate client: request building, credential resolution, dispatch,
//! and response interpretation.
//!
//! # Design
//! `VoidgateClient` holds only immutable configuration (`base_url`, default
//! password) and an `Arc<dyn HttpTransport>`. Each operation is a single
//! stateless round-trip: validate, resolve the credential, serialize, send,
//! interpret the status. A 2xx response with `success: false` in the body is
//! a normal result; only non-2xx statuses become `Error::Api`.
//!
//! Transport ownership is expressed through the `Arc`: `new` creates the
//! transport and holds the only handle, so dropping the client releases it;
//! `with_transport` clones the caller's handle, so the caller's transport
//! outlives the client.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::types::{
    ErrorPayload, ExecuteRequest, ExecuteResult, HealthStatus, RunScriptRequest, RunScriptResult,
};

/// Endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const HEALTH_PATH: &str = "/health";
const EXECUTE_PATH: &str = "/execute";
const RUN_SCRIPT_PATH: &str = "/run_script";

/// Client configuration. All fields optional; `base_url` falls back to
/// [`DEFAULT_BASE_URL`], `timeout` only applies to transports the client
/// constructs itself.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub base_url: Option<String>,
    pub password: Option<String>,
    pub timeout: Option<Duration>,
}

/// Client for the Voidgate remote command-execution API.
///
/// Cloning is cheap and shares the underlying transport; concurrent calls on
/// the same client are safe and unordered.
#[derive(Clone)]
pub struct VoidgateClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    password: Option<String>,
}

impl VoidgateClient {
    /// Construct a client that builds and owns its own HTTP transport,
    /// configured with `options.timeout`.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let transport = Arc::new(ReqwestTransport::new(options.timeout)?);
        Ok(Self::with_transport(transport, options))
    }

    /// Construct a client over a caller-provided transport. The transport is
    /// shared, not owned: dropping the client leaves it usable.
    /// `options.timeout` is ignored here; timeouts belong to the transport's
    /// own configuration.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, options: ClientOptions) -> Self {
        let base_url = options
            .base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            password: options.password,
        }
    }

    /// GET /health. Unauthenticated.
    pub async fn get_health(&self, cancel: &CancellationToken) -> Result<HealthStatus, Error> {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{HEALTH_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        };
        let response = self.send(request, cancel).await?;
        if !response.is_success() {
            return Err(api_error(response));
        }
        deserialize_body(&response.body)
    }

    /// POST /execute. `password_override` takes precedence over the client's
    /// configured password for this call only.
    pub async fn execute(
        &self,
        command: &str,
        password_override: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ExecuteResult, Error> {
        require_non_blank(command, "command")?;
        let request = ExecuteRequest {
            password: self.resolve_password(password_override)?,
            command: command.to_string(),
        };
        self.post_json(EXECUTE_PATH, &request, cancel).await
    }

    /// POST /execute with a pre-built request. The request's password field
    /// acts as the per-call override; resolution happens on a private copy,
    /// so the caller's request is never mutated.
    pub async fn execute_request(
        &self,
        request: &ExecuteRequest,
        cancel: &CancellationToken,
    ) -> Result<ExecuteResult, Error> {
        require_non_blank(&request.command, "command")?;
        let resolved = ExecuteRequest {
            password: self.resolve_password(Some(&request.password))?,
            command: request.command.clone(),
        };
        self.post_json(EXECUTE_PATH, &resolved, cancel).await
    }

    /// POST /run_script. `args` order is preserved on the wire; absent
    /// optionals are omitted from the body entirely.
    pub async fn run_script(
        &self,
        script_path: &str,
        args: Option<Vec<String>>,
        working_dir: Option<&str>,
        password_override: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<RunScriptResult, Error> {
        require_non_blank(script_path, "script_path")?;
        let request = RunScriptRequest {
            password: self.resolve_password(password_override)?,
            script_path: script_path.to_string(),
            args,
            working_dir: working_dir.map(str::to_string),
        };
        self.post_json(RUN_SCRIPT_PATH, &request, cancel).await
    }

    /// POST /run_script with a pre-built request. Same pure-resolution
    /// contract as [`execute_request`](Self::execute_request).
    pub async fn run_script_request(
        &self,
        request: &RunScriptRequest,
        cancel: &CancellationToken,
    ) -> Result<RunScriptResult, Error> {
        require_non_blank(&request.script_path, "script_path")?;
        let resolved = RunScriptRequest {
            password: self.resolve_password(Some(&request.password))?,
            ..request.clone()
        };
        self.post_json(RUN_SCRIPT_PATH, &resolved, cancel).await
    }

    /// Per-call override if non-blank, else the configured default if
    /// non-blank, else a configuration error. Runs before any I/O.
    fn resolve_password(&self, candidate: Option<&str>) -> Result<String, Error> {
        if let Some(p) = candidate {
            if !p.trim().is_empty() {
                return Ok(p.to_string());
            }
        }
        match &self.password {
            Some(p) if !p.trim().is_empty() => Ok(p.clone()),
            _ => Err(Error::MissingPassword),
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<T, Error> {
        let json = serde_json::to_string(body).map_err(|e| Error::Serialization(e.to_string()))?;
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            headers: vec![(
                "content-type".to_string(),
                "application/json".to_string(),
            )],
            body: Some(json),
        };
        let response = self.send(request, cancel).await?;
        if !response.is_success() {
            return Err(api_error(response));
        }
        deserialize_body(&response.body)
    }

    /// Race the transport against the cancellation token. `biased` makes an
    /// already-fired token win without the transport ever being polled.
    async fn send(
        &self,
        request: HttpRequest,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, Error> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            result = self.transport.send(request) => result,
        }
    }
}

fn require_non_blank(value: &str, name: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{name} is required")));
    }
    Ok(())
}

fn deserialize_body<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| Error::Deserialization(e.to_string()))
}

/// Normalize a non-2xx response into `Error::Api`. The body is parsed as
/// `ErrorPayload` best-effort; a parse failure or blank `error` field falls
/// back to the reason phrase, so normalization itself never fails.
fn api_error(response: HttpResponse) -> Error {
    let status = response.status;
    let body = if response.body.is_empty() {
        None
    } else {
        Some(response.body.clone())
    };

    if let Ok(payload) = serde_json::from_str::<ErrorPayload>(&response.body) {
        if !payload.error.trim().is_empty() {
            return Error::Api {
                status,
                message: payload.error,
                body,
            };
        }
    }

    let message = response
        .reason
        .filter(|reason| !reason.trim().is_empty())
        .unwrap_or_else(|| "HTTP Error".to_string());
    Error::Api {
        status,
        message,
        body,
    }
}
