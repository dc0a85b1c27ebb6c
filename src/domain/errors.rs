//! Domain errors. Used by ports and use cases.
//!
//! Adapters report raw failures as [`BackendFailure`]; use cases classify them
//! into the sanitized enums below. Display strings of the sanitized enums are
//! the only error text that ever reaches the logs.

use std::fmt;
use thiserror::Error;

/// Sanitized failure of the quote generator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("❌ Gemini Auth Error: Invalid API Key.")]
    Auth,

    #[error("⏳ Gemini Quota Error: Rate limit exceeded.")]
    Quota,

    #[error("❌ Gemini Network Error: Failed to connect.")]
    Network,

    #[error("❌ Gemini Internal Error (Details hidden).")]
    Internal,
}

/// Sanitized failure of the message dispatcher.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Missing Telegram Credentials")]
    MissingCredentials,

    #[error("❌ Network Error: Failed to connect to Telegram API.")]
    Connection,

    #[error("⏳ Timeout Error: Telegram API did not respond.")]
    Timeout,

    #[error("🔒 SSL Error: Certificate verification failed.")]
    Tls,

    #[error("❌ Telegram Send Failed: Unknown error occurred.")]
    Unknown,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Whether the harness may run a failed step again.
pub trait Retryable {
    fn is_retryable(&self) -> bool;
}

impl Retryable for GenerationError {
    fn is_retryable(&self) -> bool {
        true
    }
}

impl Retryable for DeliveryError {
    fn is_retryable(&self) -> bool {
        !matches!(self, DeliveryError::MissingCredentials)
    }
}

impl Retryable for DomainError {
    fn is_retryable(&self) -> bool {
        match self {
            DomainError::Generation(e) => e.is_retryable(),
            DomainError::Delivery(e) => e.is_retryable(),
            DomainError::Config(_) => false,
        }
    }
}

/// Transport-level cause of a failed request, when the HTTP client exposes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Connect,
    Timeout,
    Tls,
}

/// Raw failure reported by an outbound adapter.
///
/// `detail` may embed credentials (request URLs, echoed keys), so it is only
/// readable for classification: `Debug` redacts it and there is no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendFailure {
    pub status: Option<u16>,
    pub transport: Option<TransportKind>,
    detail: String,
}

impl BackendFailure {
    /// Failure described only by text (client libraries without structured errors).
    pub fn from_text(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            transport: None,
            detail: detail.into(),
        }
    }

    /// Non-success HTTP response; `body` is kept for classification only.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            transport: None,
            detail: body.into(),
        }
    }

    /// Request never produced a response.
    pub fn transport(kind: Option<TransportKind>, detail: impl Into<String>) -> Self {
        Self {
            status: None,
            transport: kind,
            detail: detail.into(),
        }
    }

    /// Lowercased detail for substring matching.
    pub(crate) fn detail_lowercase(&self) -> String {
        self.detail.to_lowercase()
    }
}

impl fmt::Debug for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendFailure")
            .field("status", &self.status)
            .field("transport", &self.transport)
            .field("detail", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_failure_debug_hides_detail() {
        let f = BackendFailure::from_text("https://api.telegram.org/bot123:SECRET/sendMessage");
        let dbg = format!("{:?}", f);
        assert!(!dbg.contains("SECRET"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn missing_credentials_is_not_retryable() {
        assert!(!DeliveryError::MissingCredentials.is_retryable());
        assert!(DeliveryError::Timeout.is_retryable());
        assert!(GenerationError::Auth.is_retryable());
        assert!(!DomainError::Config("x".into()).is_retryable());
    }

    #[test]
    fn domain_error_display_is_sanitized_message() {
        let e: DomainError = GenerationError::Network.into();
        assert_eq!(e.to_string(), "❌ Gemini Network Error: Failed to connect.");
    }
}
