//! Quote generator use case. One prompt in, one trimmed quote out.
//!
//! Backend failures are classified here; only the sanitized category is logged.

use crate::domain::{CompletionRequest, GenerationError, Quote, classify_generation};
use crate::ports::CompletionPort;
use std::sync::Arc;
use tracing::{error, info};

const RULE: &str = "------------------------------------------------";

pub struct QuoteGenerator {
    ai: Arc<dyn CompletionPort>,
    request: CompletionRequest,
}

impl QuoteGenerator {
    /// `request` is fixed for the generator's lifetime (model, prompt, temperature).
    pub fn new(ai: Arc<dyn CompletionPort>, request: CompletionRequest) -> Self {
        Self { ai, request }
    }

    /// Ask the backend for one quote.
    ///
    /// # Errors
    /// Returns the classified [`GenerationError`]; an empty completion is `Internal`.
    pub async fn generate_quote(&self) -> Result<Quote, GenerationError> {
        info!(model = %self.request.model, "⏰ initiating connection to Gemini");

        let raw = match self.ai.complete(&self.request).await {
            Ok(text) => text,
            Err(failure) => {
                let e = classify_generation(&failure);
                error!(reason = %e, "quote generation failed");
                return Err(e);
            }
        };

        let Some(quote) = Quote::new(&raw) else {
            let e = GenerationError::Internal;
            error!(reason = %e, "backend returned an empty completion");
            return Err(e);
        };

        println!("{}", RULE);
        println!("🤖 AI MENTOR SAYS:\n{}", quote);
        println!("{}", RULE);

        Ok(quote)
    }
}
