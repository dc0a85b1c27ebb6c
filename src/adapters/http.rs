//! Shared reqwest plumbing for the outbound adapters.
//!
//! Every transport error goes through [`transport_failure`], which strips the
//! request URL first: the Bot API carries the token in the path.

use crate::domain::{BackendFailure, DomainError, TransportKind};
use std::error::Error as StdError;
use std::time::Duration;

const TLS_MARKERS: &[&str] = &["certificate", "tls", "ssl"];

/// Build the HTTP client shared by both adapters.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DomainError::Config(format!("HTTP client init failed: {}", e.without_url())))
}

/// Convert a failed `send()` into a [`BackendFailure`] with a structured transport kind.
pub(crate) fn transport_failure(err: reqwest::Error) -> BackendFailure {
    let err = err.without_url();
    let detail = error_chain(&err);
    let lower = detail.to_lowercase();
    let kind = if TLS_MARKERS.iter().any(|m| lower.contains(m)) {
        Some(TransportKind::Tls)
    } else if err.is_timeout() {
        Some(TransportKind::Timeout)
    } else if err.is_connect() {
        Some(TransportKind::Connect)
    } else {
        None
    };
    BackendFailure::transport(kind, detail)
}

/// Display of the error and all of its sources, joined with ": ".
fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(e) = source {
        out.push_str(": ");
        out.push_str(&e.to_string());
        source = e.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryError, classify_delivery};

    #[tokio::test]
    async fn refused_connection_maps_to_connect() {
        let client = build_client(Duration::from_secs(5)).unwrap();
        // Port 1 is reserved; nothing listens there.
        let err = client
            .get("http://127.0.0.1:1/bot123:SECRET/sendMessage")
            .send()
            .await
            .unwrap_err();
        let failure = transport_failure(err);
        assert_eq!(failure.transport, Some(TransportKind::Connect));
        assert!(!failure.detail_lowercase().contains("secret"));
        assert_eq!(classify_delivery(&failure), DeliveryError::Connection);
    }
}
