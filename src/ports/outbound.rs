//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. Both return the raw [`BackendFailure`]; use cases
//! own classification so every adapter is sanitized the same way.

use crate::domain::{BackendFailure, CompletionRequest, TextFormat};

/// Text-generation backend (e.g. Gemini).
#[async_trait::async_trait]
pub trait CompletionPort: Send + Sync {
    /// Send one single-turn prompt and return the raw completion text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendFailure>;
}

/// Chat-delivery backend (e.g. Telegram Bot API).
#[async_trait::async_trait]
pub trait ChatPort: Send + Sync {
    /// Send `text` as one message to `chat_id`, authenticating with `bot_token`.
    ///
    /// The token is passed per call: the caller validates credentials before
    /// any session with the backend is opened.
    async fn send_message(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
        format: TextFormat,
    ) -> Result<(), BackendFailure>;
}
