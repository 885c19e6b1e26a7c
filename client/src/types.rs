//! Wire DTOs for the Voidgate API.
//!
//! # Design
//! Field names are lower-snake-case on the wire. Optional request fields are
//! skipped entirely when absent (never serialized as `null`), and response
//! types default missing fields instead of failing, because the service's
//! JSON has drifted in tolerance across versions. `alias` attributes accept
//! the camelCase and PascalCase spellings some deployments emit.

use serde::{Deserialize, Serialize};

/// Body of `POST /execute`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecuteRequest {
    #[serde(alias = "Password")]
    pub password: String,
    #[serde(alias = "Command")]
    pub command: String,
}

impl ExecuteRequest {
    /// Build a request with an empty password; the client fills it in from
    /// its configured credential when the request is sent.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            password: String::new(),
            command: command.into(),
        }
    }
}

/// Outcome of a remote command. `success: false` with a nonzero
/// `return_code` is a normal result, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ExecuteResult {
    #[serde(alias = "Stdout")]
    pub stdout: String,
    #[serde(alias = "Stderr")]
    pub stderr: String,
    #[serde(rename = "return_code", alias = "returnCode", alias = "ReturnCode")]
    pub return_code: i32,
    #[serde(alias = "Success")]
    pub success: bool,
}

/// Body of `POST /run_script`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunScriptRequest {
    #[serde(alias = "Password")]
    pub password: String,
    #[serde(rename = "script_path", alias = "scriptPath", alias = "ScriptPath")]
    pub script_path: String,
    #[serde(skip_serializing_if = "Option::is_none", default, alias = "Args")]
    pub args: Option<Vec<String>>,
    #[serde(
        rename = "working_dir",
        alias = "workingDir",
        alias = "WorkingDir",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub working_dir: Option<String>,
}

impl RunScriptRequest {
    /// Build a request with an empty password; the client fills it in from
    /// its configured credential when the request is sent.
    pub fn new(script_path: impl Into<String>) -> Self {
        Self {
            password: String::new(),
            script_path: script_path.into(),
            args: None,
            working_dir: None,
        }
    }
}

/// Outcome of a remote script run. Echoes back what was executed so callers
/// can correlate results without holding on to the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RunScriptResult {
    #[serde(alias = "Stdout")]
    pub stdout: String,
    #[serde(alias = "Stderr")]
    pub stderr: String,
    #[serde(rename = "return_code", alias = "returnCode", alias = "ReturnCode")]
    pub return_code: i32,
    #[serde(alias = "Success")]
    pub success: bool,
    #[serde(rename = "script_path", alias = "scriptPath", alias = "ScriptPath")]
    pub script_path: String,
    #[serde(alias = "Args")]
    pub args: Vec<String>,
    #[serde(
        rename = "working_dir",
        alias = "workingDir",
        alias = "WorkingDir",
        skip_serializing_if = "Option::is_none"
    )]
    pub working_dir: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct HealthStatus {
    #[serde(alias = "Status")]
    pub status: String,
}

/// Shape of a failure body. Parsed best-effort; a body that does not match
/// simply yields no structured message.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ErrorPayload {
    #[serde(alias = "Error")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_request_serializes_snake_case() {
        let req = ExecuteRequest {
            password: "pwd".to_string(),
            command: "ls -la".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["password"], "pwd");
        assert_eq!(json["command"], "ls -la");
    }

    #[test]
    fn run_script_request_omits_absent_optionals() {
        let req = RunScriptRequest::new("/opt/deploy.sh");
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("args").is_none());
        assert!(json.get("working_dir").is_none());
    }

    #[test]
    fn run_script_request_keeps_arg_order() {
        let req = RunScriptRequest {
            password: "pwd".to_string(),
            script_path: "/abs/script.sh".to_string(),
            args: Some(vec!["--flag".to_string(), "value".to_string()]),
            working_dir: Some("/abs/dir".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""args":["--flag","value"]"#));
        assert!(json.contains(r#""working_dir":"/abs/dir""#));
    }

    #[test]
    fn execute_result_accepts_camel_and_pascal_case() {
        let camel: ExecuteResult =
            serde_json::from_str(r#"{"stdout":"a","stderr":"","returnCode":3,"success":false}"#)
                .unwrap();
        assert_eq!(camel.return_code, 3);

        let pascal: ExecuteResult =
            serde_json::from_str(r#"{"Stdout":"a","Stderr":"","ReturnCode":3,"Success":true}"#)
                .unwrap();
        assert_eq!(pascal.return_code, 3);
        assert!(pascal.success);
    }

    #[test]
    fn execute_result_defaults_missing_fields() {
        let result: ExecuteResult = serde_json::from_str(r#"{"stdout":"hi"}"#).unwrap();
        assert_eq!(result.stdout, "hi");
        assert_eq!(result.return_code, 0);
        assert!(!result.success);
    }

    #[test]
    fn run_script_result_defaults_args_to_empty() {
        let result: RunScriptResult =
            serde_json::from_str(r#"{"success":true,"script_path":"/a.sh"}"#).unwrap();
        assert!(result.args.is_empty());
        assert!(result.working_dir.is_none());
    }

    #[test]
    fn error_payload_tolerates_unknown_shape() {
        let payload: ErrorPayload = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
        assert!(payload.error.is_empty());
    }
}
