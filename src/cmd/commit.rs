use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::commit::{CommitWorkflowOutcome, commit_staged_changes};

pub async fn run(ctx: &AppContext) -> AppResult<CommitWorkflowOutcome> {
    commit_staged_changes(ctx).await
}
