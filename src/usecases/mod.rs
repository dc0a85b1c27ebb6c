//! Application use cases. Orchestrate domain logic via ports.

pub mod mentor_flow;
pub mod message_dispatcher;
pub mod quote_generator;
pub mod retry;
pub mod schedule_service;

pub use mentor_flow::MentorFlow;
pub use message_dispatcher::{BotCredentials, MessageDispatcher};
pub use quote_generator::QuoteGenerator;
pub use retry::{RetryPolicy, run_with_retry};
pub use schedule_service::{Schedule, ScheduleService};
