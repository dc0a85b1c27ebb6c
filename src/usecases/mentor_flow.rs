//! Daily mentor flow: generate a quote, then deliver it.
//!
//! Strictly sequential. The generate step runs under its retry policy; the
//! dispatcher only runs after a successful generation and runs once.

use crate::domain::{CompletionRequest, DomainError, RunReport};
use crate::ports::{ChatPort, CompletionPort};
use crate::shared::AppConfig;
use crate::usecases::message_dispatcher::{BotCredentials, MessageDispatcher};
use crate::usecases::quote_generator::QuoteGenerator;
use crate::usecases::retry::{RetryPolicy, run_with_retry};
use std::sync::Arc;
use tracing::info;

pub const FLOW_NAME: &str = "Daily Mentor Flow";
pub const GENERATE_TASK: &str = "Generate Quote";
pub const SEND_TASK: &str = "Send to Telegram";

pub struct MentorFlow {
    generator: QuoteGenerator,
    dispatcher: MessageDispatcher,
    generate_policy: RetryPolicy,
    send_policy: RetryPolicy,
}

impl MentorFlow {
    pub fn new(
        generator: QuoteGenerator,
        dispatcher: MessageDispatcher,
        generate_policy: RetryPolicy,
    ) -> Self {
        Self {
            generator,
            dispatcher,
            generate_policy,
            send_policy: RetryPolicy::none(),
        }
    }

    /// Wire generator and dispatcher from configuration.
    pub fn from_config(
        cfg: &AppConfig,
        ai: Arc<dyn CompletionPort>,
        chat: Arc<dyn ChatPort>,
    ) -> Self {
        let request = CompletionRequest {
            model: cfg.gemini_model_or_default(),
            prompt: cfg.prompt_or_default(),
            temperature: cfg.temperature_or_default(),
        };
        let credentials = BotCredentials {
            bot_token: cfg.telegram_token(),
            chat_id: cfg.telegram_chat_id(),
        };
        Self::new(
            QuoteGenerator::new(ai, request),
            MessageDispatcher::new(chat, credentials, cfg.parse_mode_or_default()),
            RetryPolicy::fixed(cfg.generate_retries_or_default(), cfg.generate_retry_delay()),
        )
    }

    /// One Generator→Dispatcher cycle. Independent of any previous run.
    pub async fn run_once(&self) -> Result<RunReport, DomainError> {
        info!(flow = FLOW_NAME, "flow run started");

        let generator = &self.generator;
        let (quote, generation_attempts) =
            run_with_retry(GENERATE_TASK, self.generate_policy, move || {
                generator.generate_quote()
            })
            .await?;

        let dispatcher = &self.dispatcher;
        let to_send = &quote;
        run_with_retry(SEND_TASK, self.send_policy, move || {
            dispatcher.send_message(to_send)
        })
        .await?;

        info!(flow = FLOW_NAME, generation_attempts, "flow run completed");
        Ok(RunReport {
            quote,
            generation_attempts,
        })
    }
}
