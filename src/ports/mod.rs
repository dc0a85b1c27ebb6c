//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into the generation and chat backends.

pub mod outbound;

pub use outbound::{ChatPort, CompletionPort};
