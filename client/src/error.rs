//! Error types for the Voidgate client.
//!
//! # Design
//! One variant per failure class so callers can pattern-match instead of
//! string-matching messages. `Api` carries the HTTP status, a normalized
//! message, and the raw response body when it could be read; local failures
//! (`InvalidArgument`, `MissingPassword`) never touch the network.

use std::fmt;

/// Errors returned by `VoidgateClient` operations.
#[derive(Debug)]
pub enum Error {
    /// A required string argument was empty or whitespace-only.
    InvalidArgument(String),

    /// No password was supplied per-call and none is configured on the client.
    MissingPassword,

    /// The service returned a non-2xx status. `message` is the structured
    /// `error` field when the body had one, otherwise the HTTP reason phrase.
    Api {
        status: u16,
        message: String,
        body: Option<String>,
    },

    /// The transport failed before a response arrived (connect, timeout, I/O).
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// A success-status response body did not match the expected shape.
    Deserialization(String),

    /// The caller's cancellation token fired while the call was in flight.
    Cancelled,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::MissingPassword => write!(
                f,
                "password is required; set it on the client options or pass it per-call"
            ),
            Error::Api {
                status, message, ..
            } => write!(f, "HTTP {status}: {message}"),
            Error::Transport(msg) => write!(f, "transport failed: {msg}"),
            Error::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            Error::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
            Error::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for Error {}
