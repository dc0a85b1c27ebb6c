//! Message dispatcher use case. Delivers one quote to the configured chat.
//!
//! Credentials are checked before the chat port is touched. Raw backend
//! errors can carry the bot token, so only the classified message is logged.

use crate::domain::{DeliveryError, Quote, TextFormat, classify_delivery};
use crate::ports::ChatPort;
use std::sync::Arc;
use tracing::{error, info};

/// Bot token and destination chat. Either may be missing at startup.
#[derive(Clone, Default)]
pub struct BotCredentials {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl BotCredentials {
    /// Both values, if both are present and non-blank.
    fn complete(&self) -> Option<(&str, &str)> {
        let token = self.bot_token.as_deref().filter(|s| !s.trim().is_empty())?;
        let chat_id = self.chat_id.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((token, chat_id))
    }
}

pub struct MessageDispatcher {
    chat: Arc<dyn ChatPort>,
    credentials: BotCredentials,
    format: TextFormat,
}

impl MessageDispatcher {
    pub fn new(chat: Arc<dyn ChatPort>, credentials: BotCredentials, format: TextFormat) -> Self {
        Self {
            chat,
            credentials,
            format,
        }
    }

    /// Send `quote` as a single message.
    ///
    /// # Errors
    /// `MissingCredentials` without any network call, otherwise the classified send failure.
    pub async fn send_message(&self, quote: &Quote) -> Result<(), DeliveryError> {
        let Some((token, chat_id)) = self.credentials.complete() else {
            error!("❌ Telegram credentials are missing");
            return Err(DeliveryError::MissingCredentials);
        };

        info!(chat_id, "🚀 sending message via Telegram Bot API");
        match self
            .chat
            .send_message(token, chat_id, quote.as_str(), self.format)
            .await
        {
            Ok(()) => {
                info!(chat_id, "✅ message sent to Telegram");
                Ok(())
            }
            Err(failure) => {
                let e = classify_delivery(&failure);
                error!(reason = %e, "telegram delivery failed");
                Err(e)
            }
        }
    }
}
