//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the error taxonomy, and failure classification live here.

pub mod classify;
pub mod entities;
pub mod errors;

pub use classify::{classify_delivery, classify_generation};
pub use entities::{CompletionRequest, Quote, RunReport, TextFormat};
pub use errors::{
    BackendFailure, DeliveryError, DomainError, GenerationError, Retryable, TransportKind,
};
