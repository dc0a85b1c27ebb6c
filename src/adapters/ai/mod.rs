//! AI adapter module. Implements CompletionPort for LLM integration.

pub mod gemini_adapter;

pub use gemini_adapter::GeminiAdapter;
