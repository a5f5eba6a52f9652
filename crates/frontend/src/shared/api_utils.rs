//! API utilities for frontend-backend communication
//!
//! Provides the API base URL and the error type shared by every request.

use thiserror::Error;

/// Compile-time override for the backend location, e.g. `https://api.example.org`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("SOCIETY_API_BASE");

/// Get the base URL for API requests
///
/// Uses `SOCIETY_API_BASE` when it was set at build time, otherwise derives
/// the URL from the current window location with the backend on port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/Society/Get-All-Society");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response at all: DNS, TLS, CORS or connection failure.
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("request timed out")]
    Timeout,
}

impl ApiError {
    /// Message suitable for showing to the operator.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Timeout => {
                "Cannot reach the server. Check your connection.".to_string()
            }
            Self::Status { status, .. } => status_message(*status),
            Self::Encode(_) => "The data could not be prepared for sending.".to_string(),
            Self::Decode(_) => "The server sent an unexpected response.".to_string(),
            Self::NotAuthenticated => status_message(401),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// User-facing message for an HTTP status code.
pub fn status_message(status: u16) -> String {
    let text = match status {
        400 => "The request was invalid. Please check the entered data.",
        401 => "Your session has expired. Please log in again.",
        403 => "You do not have permission to perform this action.",
        404 => "The requested record was not found.",
        409 => "This record conflicts with an existing one.",
        422 => "Some fields failed server validation.",
        500 => "The server encountered an error. Please try again later.",
        503 => "The service is temporarily unavailable.",
        _ => return format!("Unexpected error (HTTP {}).", status),
    };
    text.to_string()
}
