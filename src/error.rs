// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
}

/// Specific error types for backend requests.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request did not complete within the client timeout
    Timeout,

    /// The server could not be reached (DNS, refused connection, ...)
    Unreachable(String),

    /// The server answered with a non-success status code
    Status(u16),

    /// The response body could not be decoded
    Decode(String),

    /// Generic error with raw message
    Other(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Timeout => "error-api-timeout",
            ApiError::Unreachable(_) => "error-api-unreachable",
            ApiError::Status(_) => "error-api-status",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::Other(_) => "error-api-general",
        }
    }

    /// Attempts to parse a raw transport error message into a specific
    /// ApiError type. Used to categorize errors whose source only
    /// surfaces as a string.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("timed out") || msg_lower.contains("timeout") {
            return ApiError::Timeout;
        }

        if msg_lower.contains("connection refused")
            || msg_lower.contains("dns")
            || msg_lower.contains("no route to host")
            || msg_lower.contains("network unreachable")
        {
            return ApiError::Unreachable(msg.to_string());
        }

        if msg_lower.contains("json")
            || msg_lower.contains("decode")
            || msg_lower.contains("expected value")
        {
            return ApiError::Decode(msg.to_string());
        }

        ApiError::Other(msg.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Unreachable(msg) => write!(f, "Server unreachable: {}", msg),
            ApiError::Status(code) => write!(f, "Server returned status {}", code),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ApiError::Timeout;
        }
        if err.is_connect() {
            return ApiError::Unreachable(err.to_string());
        }
        if let Some(status) = err.status() {
            return ApiError::Status(status.as_u16());
        }
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        ApiError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
