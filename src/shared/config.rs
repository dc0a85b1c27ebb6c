//! Application configuration. API credentials, model settings, schedule.

use crate::domain::TextFormat;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_PROMPT: &str =
    "Create 1 short, punchy motivational quote for a programmer. Just the quote, no intro text.";

/// Generator retries after the first failed attempt.
pub const DEFAULT_GENERATE_RETRIES: u32 = 3;
pub const DEFAULT_GENERATE_RETRY_DELAY_SECS: u64 = 5;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Credentials
    // ─────────────────────────────────────────────────────────────────────────
    /// Gemini API key. Read from MENTOR_GOOGLE_API_KEY or GOOGLE_API_KEY.
    #[serde(default)]
    pub google_api_key: Option<String>,

    /// Telegram bot token. Read from MENTOR_TELEGRAM_TOKEN or TELEGRAM_TOKEN.
    #[serde(default)]
    pub telegram_token: Option<String>,

    /// Destination chat id (numeric id or @channel). Read from MENTOR_TELEGRAM_CHAT_ID or TELEGRAM_CHAT_ID.
    #[serde(default)]
    pub telegram_chat_id: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Generator
    // ─────────────────────────────────────────────────────────────────────────
    /// Model name. Defaults to "gemini-2.5-flash". Read from MENTOR_GEMINI_MODEL.
    #[serde(default)]
    pub gemini_model: Option<String>,

    /// API base URL (without the /models path). Read from MENTOR_GEMINI_API_URL.
    #[serde(default)]
    pub gemini_api_url: Option<String>,

    /// Sampling temperature. Defaults to 0.7. Read from MENTOR_TEMPERATURE.
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Prompt override. Read from MENTOR_PROMPT.
    #[serde(default)]
    pub prompt: Option<String>,

    /// Retries of the generate step after the first failure. Read from MENTOR_GENERATE_RETRIES.
    #[serde(default)]
    pub generate_retries: Option<u32>,

    /// Fixed delay between generate attempts. Read from MENTOR_GENERATE_RETRY_DELAY_SECS.
    #[serde(default)]
    pub generate_retry_delay_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatcher
    // ─────────────────────────────────────────────────────────────────────────
    /// Bot API base URL. Read from MENTOR_TELEGRAM_API_URL.
    #[serde(default)]
    pub telegram_api_url: Option<String>,

    /// markdown | markdownv2 | html | plain. Read from MENTOR_PARSE_MODE.
    #[serde(default)]
    pub parse_mode: Option<TextFormat>,

    /// Per-request HTTP timeout for both backends. Read from MENTOR_HTTP_TIMEOUT_SECS.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Continuous mode (off unless one of these is set)
    // ─────────────────────────────────────────────────────────────────────────
    /// Run every N seconds. Read from MENTOR_SERVE_INTERVAL_SECS.
    #[serde(default)]
    pub serve_interval_secs: Option<u64>,

    /// Run daily at HH:MM local time. Read from MENTOR_SERVE_DAILY_AT.
    #[serde(default)]
    pub serve_daily_at: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::from_sources(None, std::env::var("MENTOR_CONFIG").ok())
    }

    /// Builds from `MENTOR_*` variables and an optional config file.
    /// `env` replaces the process environment when given.
    pub fn from_sources(
        env: Option<config::Map<String, String>>,
        file: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        c = c.add_source(
            config::Environment::with_prefix("MENTOR")
                .try_parsing(true)
                .source(env),
        );
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Credential helpers (unprefixed env fallback, blank counts as unset)
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the Gemini API key from config or GOOGLE_API_KEY env.
    pub fn google_api_key(&self) -> Option<String> {
        non_blank(self.google_api_key.clone().or_else(|| std::env::var("GOOGLE_API_KEY").ok()))
    }

    /// Returns the bot token from config or TELEGRAM_TOKEN env.
    pub fn telegram_token(&self) -> Option<String> {
        non_blank(self.telegram_token.clone().or_else(|| std::env::var("TELEGRAM_TOKEN").ok()))
    }

    /// Returns the chat id from config or TELEGRAM_CHAT_ID env.
    pub fn telegram_chat_id(&self) -> Option<String> {
        non_blank(
            self.telegram_chat_id
                .clone()
                .or_else(|| std::env::var("TELEGRAM_CHAT_ID").ok()),
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tunables
    // ─────────────────────────────────────────────────────────────────────────

    pub fn gemini_model_or_default(&self) -> String {
        self.gemini_model
            .clone()
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string())
    }

    pub fn gemini_api_url_or_default(&self) -> String {
        self.gemini_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string())
    }

    pub fn temperature_or_default(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn prompt_or_default(&self) -> String {
        non_blank(self.prompt.clone()).unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    pub fn generate_retries_or_default(&self) -> u32 {
        self.generate_retries.unwrap_or(DEFAULT_GENERATE_RETRIES)
    }

    pub fn generate_retry_delay(&self) -> Duration {
        Duration::from_secs(
            self.generate_retry_delay_secs
                .unwrap_or(DEFAULT_GENERATE_RETRY_DELAY_SECS),
        )
    }

    pub fn telegram_api_url_or_default(&self) -> String {
        self.telegram_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string())
    }

    pub fn parse_mode_or_default(&self) -> TextFormat {
        self.parse_mode.unwrap_or_default()
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// True if continuous mode was requested.
    pub fn is_serve_configured(&self) -> bool {
        self.serve_interval_secs.is_some() || self.serve_daily_at.is_some()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn redact(value: &Option<String>) -> &'static str {
    if value.is_some() { "<set>" } else { "<unset>" }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &redact(&self.google_api_key))
            .field("telegram_token", &redact(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_url", &self.gemini_api_url)
            .field("temperature", &self.temperature)
            .field("prompt", &self.prompt)
            .field("generate_retries", &self.generate_retries)
            .field("generate_retry_delay_secs", &self.generate_retry_delay_secs)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("parse_mode", &self.parse_mode)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("serve_interval_secs", &self.serve_interval_secs)
            .field("serve_daily_at", &self.serve_daily_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.gemini_model_or_default(), "gemini-2.5-flash");
        assert_eq!(cfg.temperature_or_default(), 0.7);
        assert_eq!(cfg.prompt_or_default(), DEFAULT_PROMPT);
        assert_eq!(cfg.generate_retries_or_default(), 3);
        assert_eq!(cfg.generate_retry_delay(), Duration::from_secs(5));
        assert_eq!(cfg.parse_mode_or_default(), TextFormat::Markdown);
        assert!(!cfg.is_serve_configured());
    }

    #[test]
    fn explicit_credentials_take_precedence() {
        let cfg = AppConfig {
            telegram_token: Some("123:abc".into()),
            telegram_chat_id: Some("42".into()),
            ..Default::default()
        };
        assert_eq!(cfg.telegram_token().as_deref(), Some("123:abc"));
        assert_eq!(cfg.telegram_chat_id().as_deref(), Some("42"));
    }

    #[test]
    fn blank_prompt_falls_back_to_default() {
        let cfg = AppConfig {
            prompt: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(cfg.prompt_or_default(), DEFAULT_PROMPT);
    }

    #[test]
    fn debug_redacts_secrets() {
        let cfg = AppConfig {
            google_api_key: Some("AIza-secret".into()),
            telegram_token: Some("123:bot-secret".into()),
            ..Default::default()
        };
        let dbg = format!("{:?}", cfg);
        assert!(!dbg.contains("AIza-secret"));
        assert!(!dbg.contains("bot-secret"));
        assert!(dbg.contains("<set>"));
    }

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn env_values_are_parsed() {
        let cfg = AppConfig::from_sources(
            env(&[
                ("MENTOR_TELEGRAM_TOKEN", "123:abc"),
                ("MENTOR_SERVE_DAILY_AT", "07:00"),
                ("MENTOR_GENERATE_RETRIES", "5"),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(cfg.telegram_token.as_deref(), Some("123:abc"));
        assert_eq!(cfg.serve_daily_at.as_deref(), Some("07:00"));
        assert_eq!(cfg.generate_retries, Some(5));
    }

    #[test]
    fn malformed_env_value_is_an_error() {
        let res = AppConfig::from_sources(
            env(&[
                ("MENTOR_TELEGRAM_TOKEN", "123:abc"),
                ("MENTOR_SERVE_DAILY_AT", "07:00"),
                ("MENTOR_GENERATE_RETRIES", "three"),
            ]),
            None,
        );
        assert!(res.is_err());
    }

    #[test]
    fn serve_mode_detected() {
        let cfg = AppConfig {
            serve_daily_at: Some("07:00".into()),
            ..Default::default()
        };
        assert!(cfg.is_serve_configured());
    }
}
