//! Error types for the list client.

use std::fmt;
use tms_odata::ODataError;

/// List client error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error, including an unconfigured list.
    Config(String),
    /// Input the request cannot carry (bad digest, unserializable payload).
    InvalidInput(String),
    /// Connection failure or timeout.
    Transport(String),
    /// Non-2xx response from the list API.
    Status { status: u16, body: String },
    /// Response body did not have the expected shape.
    Decode(String),
}

impl Error {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Error::Transport(msg) => write!(f, "transport error: {msg}"),
            Error::Status { status, body } if body.is_empty() => {
                write!(f, "list API returned HTTP {status}")
            }
            Error::Status { status, body } => write!(f, "list API returned HTTP {status}: {body}"),
            Error::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ODataError> for Error {
    fn from(e: ODataError) -> Self {
        match e {
            ODataError::MissingEnvelope(_) => Error::Decode(e.to_string()),
            ODataError::InvalidItemId(_)
            | ODataError::UnparsableItemId(_)
            | ODataError::NotAnObject => {
                Error::InvalidInput(e.to_string())
            }
        }
    }
}
