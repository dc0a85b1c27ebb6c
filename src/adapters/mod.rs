//! Infrastructure adapters. Implement outbound ports.
//!
//! Gemini and Telegram over HTTP. Raw failures are reported as BackendFailure.

pub mod ai;
pub mod http;
pub mod telegram;

#[cfg(test)]
pub(crate) mod fakes;
