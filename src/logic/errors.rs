use anyhow::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    HttpStatus,   // any other non-2xx
    NetworkError, // DNS, routing, etc.
    Other,
}

impl ErrorType {
    /// Short lowercase label for toasts
    pub fn label(&self) -> &'static str {
        match self {
            ErrorType::ConnectionRefused => "connection refused",
            ErrorType::Timeout => "request timed out",
            ErrorType::NotFound => "not found",
            ErrorType::ServerError => "server error",
            ErrorType::HttpStatus => "unexpected response",
            ErrorType::NetworkError => "network error",
            ErrorType::Other => "request failed",
        }
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // HTTP status errors raised by the client
    if let Some(ApiError::Status { status, .. }) = error.downcast_ref::<ApiError>() {
        return match status {
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::HttpStatus,
        };
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if reqwest_err.is_connect() {
                return ErrorType::NetworkError;
            }
        }
    }

    // Network-level errors
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for logs and toasts - show raw error details
pub fn format_error_message(error: &Error) -> String {
    if let Some(api_err) = error.downcast_ref::<ApiError>() {
        return api_err.to_string();
    }

    // Walk the error chain to find reqwest::Error (most informative for network errors)
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    // If no reqwest error found, the deepest cause is the most specific
    error
        .chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| error.to_string())
}

/// User-facing description: the error kind followed by the raw detail
pub fn describe_error(error: &Error) -> String {
    format!(
        "{} ({})",
        classify_error(error).label(),
        format_error_message(error)
    )
}
