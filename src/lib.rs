//! daily-mentor: Gemini-generated motivational quote delivered to Telegram, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
