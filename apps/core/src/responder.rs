//! Response Assembler.
//!
//! Combines intent, extracted role, dataset content and (optionally) one
//! completion call into the final reply text. Completion failures never
//! escape: they degrade to deterministic text. Only a broken deployment
//! (missing credential) is returned as an error.

use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::brain::prompts::{
    self, COMPARE_FALLBACK, COMPARE_HEADING, COMPARE_NEEDS_TWO_ROLES, EXPANSION_HEADING,
    GENERAL_HEADING, GENERAL_HELP, GREETING, RESUME_CHECKLIST, SYSTEM_PROMPT,
};
use crate::brain::{
    clean_output, extract_role, resolve_comparison, wants_expansion, Intent, IntentClassifier,
};
use crate::config::ChatConfig;
use crate::dataset::RoleDataset;
use crate::error::AppError;
use crate::llm::{CompletionRequest, LlmClient};

/// One handled turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub role: Option<String>,
    pub text: String,
}

pub struct ResponseAssembler<L>
where
    L: LlmClient,
{
    dataset: Arc<RoleDataset>,
    llm: Arc<L>,
    config: ChatConfig,
    classifier: IntentClassifier,
}

impl<L> ResponseAssembler<L>
where
    L: LlmClient,
{
    pub fn new(dataset: Arc<RoleDataset>, llm: Arc<L>, config: ChatConfig) -> Self {
        Self {
            dataset,
            llm,
            config,
            classifier: IntentClassifier::new(),
        }
    }

    pub fn dataset(&self) -> &RoleDataset {
        &self.dataset
    }

    pub fn classify(&self, message: &str) -> Intent {
        self.classifier.classify(message)
    }

    /// Classifies `message` and responds to it.
    pub async fn handle(&self, message: &str) -> Result<Reply, AppError> {
        let detail = self.classifier.classify_detailed(message);
        let role = extract_role(&self.dataset, message).map(str::to_string);
        debug!(intent = %detail.intent, matched = ?detail.matched, role = ?role, "Message classified");

        let text = self.respond(message, detail.intent).await?;
        Ok(Reply {
            intent: detail.intent,
            role,
            text,
        })
    }

    /// Responds to an intent given by label. Unknown labels get the greeting.
    pub async fn respond_to_label(&self, message: &str, label: &str) -> Result<String, AppError> {
        match label.parse::<Intent>() {
            Ok(intent) => self.respond(message, intent).await,
            Err(e) => {
                warn!("{}", e);
                Ok(GREETING.to_string())
            }
        }
    }

    #[instrument(skip_all, fields(intent = %intent))]
    pub async fn respond(&self, message: &str, intent: Intent) -> Result<String, AppError> {
        match intent {
            Intent::SkillsNeeded | Intent::Roadmap | Intent::Projects | Intent::RoleInfo => {
                self.role_content(message, intent).await
            }
            Intent::CompareRoles => self.compare(message).await,
            Intent::ResumeTip => Ok(RESUME_CHECKLIST.to_string()),
            Intent::General => self.general(message).await,
        }
    }

    async fn role_content(&self, message: &str, intent: Intent) -> Result<String, AppError> {
        let Some(role) = extract_role(&self.dataset, message) else {
            return Ok(prompts::need_role(intent).to_string());
        };
        let Some(entry) = self.dataset.get(role) else {
            return Ok(prompts::need_role(intent).to_string());
        };

        let block = prompts::role_block(intent, role, entry);
        if !wants_expansion(message) {
            return Ok(block);
        }

        info!(role, "Expansion requested");
        let prompt = prompts::expansion_prompt(intent, role, entry);
        match self.generate(prompt).await? {
            Some(expansion) => Ok(format!("{}\n\n{}\n\n{}", block, EXPANSION_HEADING, expansion)),
            None => Ok(format!("{}\n\n{}", block, prompts::follow_up(role))),
        }
    }

    async fn compare(&self, message: &str) -> Result<String, AppError> {
        let Some(pair) = resolve_comparison(&self.dataset, message) else {
            return Ok(COMPARE_NEEDS_TWO_ROLES.to_string());
        };
        info!(first = %pair.first, second = %pair.second, from_dataset = pair.from_dataset, "Comparing roles");

        let prompt = prompts::compare_prompt(&pair.first, &pair.second);
        match self.generate(prompt).await? {
            Some(text) => Ok(format!("{}\n\n{}", COMPARE_HEADING, text)),
            None => Ok(COMPARE_FALLBACK.to_string()),
        }
    }

    async fn general(&self, message: &str) -> Result<String, AppError> {
        match self.generate(message.to_string()).await? {
            Some(text) => Ok(format!("{}\n\n{}", GENERAL_HEADING, text)),
            None => Ok(GENERAL_HELP.to_string()),
        }
    }

    /// One completion call. `Ok(None)` means "no expansion available".
    async fn generate(&self, user_prompt: String) -> Result<Option<String>, AppError> {
        let request = CompletionRequest::prompt(SYSTEM_PROMPT, user_prompt, &self.config);

        match self.llm.complete(request).await {
            Ok(completion) => {
                let text = clean_output(&completion.text);
                if text.is_empty() {
                    warn!("Completion was empty after sanitization");
                    Ok(None)
                } else {
                    Ok(Some(text))
                }
            }
            Err(e) if e.is_fatal() => {
                error!("Completion client misconfigured: {}", e);
                Err(AppError::Config(e.to_string()))
            }
            Err(e) => {
                warn!(kind = e.kind(), status = ?e.status(), "Completion unavailable, using fallback");
                Ok(None)
            }
        }
    }
}
