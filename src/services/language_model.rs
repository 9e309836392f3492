use async_trait::async_trait;

use crate::domain::commit::CommitMessage;
use crate::domain::prompt::Prompt;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    async fn suggest_commit_message(&self, prompt: &Prompt) -> AppResult<CommitMessage>;
}
