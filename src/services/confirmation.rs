use async_trait::async_trait;

use crate::domain::commit::CommitMessage;
use crate::error::AppResult;

#[async_trait]
pub trait ConfirmationService: Send + Sync {
    /// Asks once whether `message` should be committed.
    async fn confirm(&self, message: &CommitMessage) -> AppResult<bool>;
}
