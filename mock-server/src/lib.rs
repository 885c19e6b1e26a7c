//! In-process implementation of the Voidgate HTTP API for tests and local
//! development.
//!
//! # Design
//! Commands are simulated, never actually run: a command whose first word is
//! `false` or `fail` produces a failing result, anything else an echoing
//! success. `run_script` echoes its inputs back the way the real service
//! does. DTOs are defined independently from the client crate; integration
//! tests catch schema drift.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone)]
struct AppState {
    password: Arc<String>,
}

#[derive(Deserialize)]
struct ExecuteRequest {
    #[serde(default)]
    password: String,
    #[serde(default)]
    command: String,
}

#[derive(Serialize)]
struct ExecuteResult {
    stdout: String,
    stderr: String,
    return_code: i32,
    success: bool,
}

#[derive(Deserialize)]
struct RunScriptRequest {
    #[serde(default)]
    password: String,
    #[serde(default)]
    script_path: String,
    args: Option<Vec<String>>,
    working_dir: Option<String>,
}

#[derive(Serialize)]
struct RunScriptResult {
    stdout: String,
    stderr: String,
    return_code: i32,
    success: bool,
    script_path: String,
    args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    working_dir: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

type Failure = (StatusCode, Json<ErrorBody>);

pub fn app(password: impl Into<String>) -> Router {
    let state = AppState {
        password: Arc::new(password.into()),
    };
    Router::new()
        .route("/health", get(health))
        .route("/execute", post(execute))
        .route("/run_script", post(run_script))
        .with_state(state)
}

pub async fn run(listener: TcpListener, password: impl Into<String>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(password)).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn execute(
    State(state): State<AppState>,
    Json(request): Json<ExecuteRequest>,
) -> Result<Json<ExecuteResult>, Failure> {
    check_password(&state, &request.password)?;
    if request.command.trim().is_empty() {
        return Err(bad_request("command is required"));
    }

    let first_word = request.command.split_whitespace().next().unwrap_or("");
    let result = if first_word == "false" || first_word == "fail" {
        ExecuteResult {
            stdout: String::new(),
            stderr: format!("command failed: {}", request.command),
            return_code: 1,
            success: false,
        }
    } else {
        ExecuteResult {
            stdout: format!("executed: {}", request.command),
            stderr: String::new(),
            return_code: 0,
            success: true,
        }
    };
    Ok(Json(result))
}

async fn run_script(
    State(state): State<AppState>,
    Json(request): Json<RunScriptRequest>,
) -> Result<Json<RunScriptResult>, Failure> {
    check_password(&state, &request.password)?;
    if request.script_path.trim().is_empty() {
        return Err(bad_request("script_path is required"));
    }

    Ok(Json(RunScriptResult {
        stdout: format!("ran: {}", request.script_path),
        stderr: String::new(),
        return_code: 0,
        success: true,
        script_path: request.script_path,
        args: request.args.unwrap_or_default(),
        working_dir: request.working_dir,
    }))
}

fn check_password(state: &AppState, candidate: &str) -> Result<(), Failure> {
    if candidate != state.password.as_str() {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody {
                error: "Invalid password".to_string(),
            }),
        ));
    }
    Ok(())
}

fn bad_request(message: &str) -> Failure {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

