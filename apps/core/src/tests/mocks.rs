//! Mock components shared by the test modules.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::ChatConfig;
use crate::dataset::RoleDataset;
use crate::llm::{Completion, CompletionError, CompletionRequest, CompletionResult, LlmClient, Sleeper};
use crate::responder::ResponseAssembler;

/// Mock completion client that returns a fixed outcome and records every request.
pub struct MockLlmClient {
    outcome: Result<String, CompletionError>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new(response: &str) -> Self {
        Self {
            outcome: Ok(response.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: CompletionError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> CompletionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        match &self.outcome {
            Ok(text) => Ok(Completion {
                text: text.clone(),
                raw: serde_json::json!({"choices": [{"text": text}]}),
            }),
            Err(e) => Err(e.clone()),
        }
    }
}

/// Sleeper that records requested delays and returns immediately.
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// The dataset shipped with the crate.
pub fn bundled_dataset() -> RoleDataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("role_skill_map.json");
    RoleDataset::load(path).expect("bundled dataset should load")
}

pub fn assembler_with(client: MockLlmClient) -> (ResponseAssembler<MockLlmClient>, Arc<MockLlmClient>) {
    let client = Arc::new(client);
    let assembler = ResponseAssembler::new(
        Arc::new(bundled_dataset()),
        client.clone(),
        ChatConfig::default(),
    );
    (assembler, client)
}
