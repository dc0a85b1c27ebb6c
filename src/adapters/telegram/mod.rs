//! Telegram adapter module. Implements ChatPort over the Bot API.

pub mod bot_adapter;

pub use bot_adapter::TelegramBotAdapter;
