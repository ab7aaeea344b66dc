mod prompt;
mod types;

pub use prompt::ACCOUNTANT_PROMPT;
pub use types::TransactionRecord;

use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use std::sync::Arc;
use tracing::debug;

/// Turns a free-text description into the model's JSON transaction record.
/// Holds no per-request state; every call makes exactly one upstream request.
pub struct TransactionParser {
    client: Arc<dyn LlmClient>,
}

impl TransactionParser {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn build_request(text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(ACCOUNTANT_PROMPT),
                ChatMessage::user(text),
            ],
            json_output: true,
        }
    }

    /// Returns the model's message content exactly as received, after
    /// checking that it decodes as a [`TransactionRecord`].
    pub async fn parse(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .create_chat_completion(Self::build_request(text))
            .await?;

        let content = response
            .first_content()
            .ok_or_else(|| Error::llm("response contained no message content"))?
            .to_string();

        let record = TransactionRecord::from_model_output(&content)?;
        debug!(
            category = %record.category,
            is_income = record.is_income,
            is_outstanding = record.is_outstanding,
            "Model returned a valid transaction record"
        );

        Ok(content)
    }
}
