use async_trait::async_trait;

use crate::domain::change::ChangeSummary;
use crate::domain::commit::CommitMessage;
use crate::error::AppResult;

/// Pathspecs excluded from the staged diff so dependency lockfiles never
/// reach the prompt.
pub const EXCLUDED_PATHSPECS: [&str; 2] = [":(exclude)*lock.json", ":(exclude)*lock.yaml"];

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Staged diff of the whole repository minus lockfiles, or `None` when
    /// nothing remains after exclusion.
    async fn staged_changes(&self) -> AppResult<Option<ChangeSummary>>;
    async fn commit(&self, message: &CommitMessage) -> AppResult<()>;
}
