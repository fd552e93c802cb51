use std::fmt;

use http::StatusCode;
use thiserror::Error;

/// The error type for tosspayments operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    body: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Secret key is missing or empty.
    CredentialInvalid,

    /// Toss Payments answered with a status outside the success band.
    ApiError,

    /// The request could not be executed: transport faults, json
    /// (de)serialization faults or a failed blocking wait.
    ExecutionFailure,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the raw response body returned along with an api error.
    pub fn with_response_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The http status returned by Toss Payments.
    ///
    /// Only set for [`ErrorKind::ApiError`].
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status
    }

    /// The raw response body returned by Toss Payments, if any.
    pub fn response_body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Check if this is an api error
    pub fn is_api_error(&self) -> bool {
        self.kind == ErrorKind::ApiError
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create an api error for the given response status
    pub fn api_error(status: StatusCode) -> Self {
        let mut err = Self::new(
            ErrorKind::ApiError,
            format!("Toss Api http request failed {}", status.as_u16()),
        );
        err.status = Some(status);
        err
    }

    /// Create an execution failure
    pub fn execution_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExecutionFailure, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credential"),
            ErrorKind::ApiError => write!(f, "api error"),
            ErrorKind::ExecutionFailure => write!(f, "execution failure"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::execution_failure(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::execution_failure(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::execution_failure(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::execution_failure(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
