//! In-memory port implementations for use-case tests.

use crate::domain::{BackendFailure, CompletionRequest, TextFormat};
use crate::ports::{ChatPort, CompletionPort};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Replays a fixed script of completion outcomes, then keeps returning the last one.
pub struct ScriptedCompletion {
    script: Mutex<VecDeque<Result<String, BackendFailure>>>,
    last: Mutex<Option<Result<String, BackendFailure>>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn new(script: Vec<Result<String, BackendFailure>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn always(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionPort for ScriptedCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        match next {
            Some(outcome) => {
                *last = Some(outcome.clone());
                outcome
            }
            None => last
                .clone()
                .unwrap_or_else(|| Err(BackendFailure::from_text("script exhausted"))),
        }
    }
}

/// A message as the chat backend saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub bot_token: String,
    pub chat_id: String,
    pub text: String,
    pub format: TextFormat,
}

/// Records every send; optionally fails each one with the given failure.
#[derive(Default)]
pub struct RecordingChat {
    sent: Mutex<Vec<SentMessage>>,
    failure: Option<BackendFailure>,
    calls: AtomicUsize,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: BackendFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ChatPort for RecordingChat {
    async fn send_message(
        &self,
        bot_token: &str,
        chat_id: &str,
        text: &str,
        format: TextFormat,
    ) -> Result<(), BackendFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(f) = &self.failure {
            return Err(f.clone());
        }
        self.sent.lock().unwrap().push(SentMessage {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
            text: text.to_string(),
            format,
        });
        Ok(())
    }
}
