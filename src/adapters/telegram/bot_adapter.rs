//! Implements ChatPort using the Telegram Bot API (`sendMessage`).
//!
//! The token is part of the request path, so transport errors are stripped of
//! their URL before they become a `BackendFailure`.

use crate::adapters::http::transport_failure;
use crate::domain::{BackendFailure, TextFormat};
use crate::ports::ChatPort;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Telegram Bot API adapter. One stateless HTTP call per message.
pub struct TelegramBotAdapter {
    client: reqwest::Client,
    api_url: String,
}

impl TelegramBotAdapter {
    /// `api_url` is the Bot API base, e.g. "https://api.telegram.org".
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    fn method_url(&self, bot_token: &str, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_url.trim_end_matches('/'),
            bot_token,
            method
        )
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'static str>,
}

/// Envelope of every Bot API response.
#[derive(Deserialize)]
struct BotResponse {
    ok: bool,
    error_code: Option<u16>,
    description: Option<String>,
}

#[async_trait]
impl ChatPort for TelegramBotAdapter {
    async fn send_message(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
        format: TextFormat,
    ) -> Result<(), BackendFailure> {
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: format.parse_mode(),
        };

        let response = self
            .client
            .post(self.method_url(bot_token, "sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        let raw = response.text().await.map_err(transport_failure)?;
        let envelope: Option<BotResponse> = serde_json::from_str(&raw).ok();

        match envelope {
            Some(r) if r.ok && status.is_success() => {
                debug!(chat_id, text_len = text.len(), "sendMessage accepted");
                Ok(())
            }
            Some(r) => Err(BackendFailure::http(
                r.error_code.unwrap_or(status.as_u16()),
                r.description.unwrap_or(raw),
            )),
            None => Err(BackendFailure::http(status.as_u16(), raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::build_client;
    use crate::domain::{DeliveryError, classify_delivery};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter(server: &MockServer) -> TelegramBotAdapter {
        TelegramBotAdapter::new(reqwest::Client::new(), server.uri())
    }

    #[tokio::test]
    async fn posts_markdown_message_to_chat() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_json(json!({
                "chat_id": "42",
                "text": "Code fearlessly.",
                "parse_mode": "Markdown"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": {"message_id": 7, "chat": {"id": 42, "type": "private"}, "date": 0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        adapter(&server)
            .send_message("123:abc", "42", "Code fearlessly.", TextFormat::Markdown)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn plain_text_omits_parse_mode() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"chat_id": "@mentor", "text": "hi"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        adapter(&server)
            .send_message("t", "@mentor", "hi", TextFormat::Plain)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn api_rejection_carries_error_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let failure = adapter(&server)
            .send_message("t", "1", "x", TextFormat::Markdown)
            .await
            .unwrap_err();
        assert_eq!(failure.status, Some(400));
        assert_eq!(classify_delivery(&failure), DeliveryError::Unknown);
    }

    #[tokio::test]
    async fn slow_backend_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": true}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = build_client(Duration::from_millis(50)).unwrap();
        let failure = TelegramBotAdapter::new(client, server.uri())
            .send_message("123:SECRET", "1", "x", TextFormat::Markdown)
            .await
            .unwrap_err();
        assert_eq!(classify_delivery(&failure), DeliveryError::Timeout);
        assert!(!format!("{:?}", failure).contains("SECRET"));
    }
}
