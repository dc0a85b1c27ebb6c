//! Maps raw backend failures onto the sanitized error taxonomy.
//!
//! Structured information (HTTP status, transport kind) wins; substring
//! matching on the lowercased detail is the fallback for unstructured text
//! and depends on vendor wording, so keep the needle lists short.

use crate::domain::errors::{BackendFailure, DeliveryError, GenerationError, TransportKind};

const AUTH_NEEDLES: &[&str] = &["401", "api_key"];
const QUOTA_NEEDLES: &[&str] = &["429", "quota"];
const NETWORK_NEEDLES: &[&str] = &["connection"];

const CONNECTION_NEEDLES: &[&str] = &["connection", "dns"];
const TIMEOUT_NEEDLES: &[&str] = &["timeout"];
const TLS_NEEDLES: &[&str] = &["ssl"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Classify a failed text-generation call.
pub fn classify_generation(failure: &BackendFailure) -> GenerationError {
    match failure.status {
        Some(401) | Some(403) => return GenerationError::Auth,
        Some(429) => return GenerationError::Quota,
        _ => {}
    }
    if failure.transport.is_some() {
        return GenerationError::Network;
    }
    classify_generation_text(&failure.detail_lowercase())
}

/// Substring rules for generator failures. `text` must already be lowercase.
pub fn classify_generation_text(text: &str) -> GenerationError {
    if contains_any(text, AUTH_NEEDLES) {
        GenerationError::Auth
    } else if contains_any(text, QUOTA_NEEDLES) {
        GenerationError::Quota
    } else if contains_any(text, NETWORK_NEEDLES) {
        GenerationError::Network
    } else {
        GenerationError::Internal
    }
}

/// Classify a failed send-message call.
pub fn classify_delivery(failure: &BackendFailure) -> DeliveryError {
    match failure.transport {
        Some(TransportKind::Connect) => DeliveryError::Connection,
        Some(TransportKind::Timeout) => DeliveryError::Timeout,
        Some(TransportKind::Tls) => DeliveryError::Tls,
        None => classify_delivery_text(&failure.detail_lowercase()),
    }
}

/// Substring rules for dispatcher failures. `text` must already be lowercase.
pub fn classify_delivery_text(text: &str) -> DeliveryError {
    if contains_any(text, CONNECTION_NEEDLES) {
        DeliveryError::Connection
    } else if contains_any(text, TIMEOUT_NEEDLES) {
        DeliveryError::Timeout
    } else if contains_any(text, TLS_NEEDLES) {
        DeliveryError::Tls
    } else {
        DeliveryError::Unknown
    }
}
