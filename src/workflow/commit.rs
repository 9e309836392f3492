use tracing::debug;

use crate::context::AppContext;
use crate::domain::commit::CommitMessage;
use crate::domain::prompt::Prompt;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitWorkflowOutcome {
    NoChanges,
    Committed(CommitMessage),
    Declined(CommitMessage),
}

pub async fn commit_staged_changes(ctx: &AppContext) -> AppResult<CommitWorkflowOutcome> {
    debug!(workspace = %ctx.config.workspace_root.display(), "reading staged changes");
    let Some(changes) = ctx.version_control.staged_changes().await? else {
        return Ok(CommitWorkflowOutcome::NoChanges);
    };

    let prompt = Prompt::for_changes(&changes);
    let message = ctx.language_model.suggest_commit_message(&prompt).await?;

    if !ctx.confirmation.confirm(&message).await? {
        return Ok(CommitWorkflowOutcome::Declined(message));
    }

    ctx.version_control.commit(&message).await?;
    Ok(CommitWorkflowOutcome::Committed(message))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::config::{AppConfig, DEFAULT_BASE_URL};
    use crate::domain::change::ChangeSummary;
    use crate::error::AppError;
    use crate::services::{ConfirmationService, LanguageModelService, VersionControlService};

    struct FakeGit {
        diff: String,
        commits: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl VersionControlService for FakeGit {
        async fn staged_changes(&self) -> AppResult<Option<ChangeSummary>> {
            Ok(ChangeSummary::from_diff_output(&self.diff))
        }

        async fn commit(&self, message: &CommitMessage) -> AppResult<()> {
            self.commits.lock().unwrap().push(message.as_str().to_string());
            Ok(())
        }
    }

    struct FailingGit;

    #[async_trait]
    impl VersionControlService for FailingGit {
        async fn staged_changes(&self) -> AppResult<Option<ChangeSummary>> {
            Err(AppError::VersionControl("not a git repository".to_string()))
        }

        async fn commit(&self, _message: &CommitMessage) -> AppResult<()> {
            panic!("commit must not run after a failed diff");
        }
    }

    struct FakeModel {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LanguageModelService for FakeModel {
        async fn suggest_commit_message(&self, prompt: &Prompt) -> AppResult<CommitMessage> {
            self.prompts.lock().unwrap().push(prompt.as_str().to_string());
            match &self.reply {
                Ok(text) => Ok(CommitMessage::from_completion(text).unwrap()),
                Err(err) => Err(AppError::LanguageModel(err.clone())),
            }
        }
    }

    struct FakeConfirmation {
        answer: bool,
        asked: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ConfirmationService for FakeConfirmation {
        async fn confirm(&self, message: &CommitMessage) -> AppResult<bool> {
            self.asked.lock().unwrap().push(message.as_str().to_string());
            Ok(self.answer)
        }
    }

    struct Harness {
        git: Arc<FakeGit>,
        model: Arc<FakeModel>,
        confirmation: Arc<FakeConfirmation>,
        ctx: AppContext,
    }

    fn config() -> AppConfig {
        AppConfig {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            workspace_root: PathBuf::from("."),
        }
    }

    fn harness(diff: &str, reply: Result<&str, &str>, answer: bool) -> Harness {
        let git = Arc::new(FakeGit {
            diff: diff.to_string(),
            commits: Mutex::new(Vec::new()),
        });
        let model = Arc::new(FakeModel {
            reply: reply.map(str::to_string).map_err(str::to_string),
            prompts: Mutex::new(Vec::new()),
        });
        let confirmation = Arc::new(FakeConfirmation {
            answer,
            asked: Mutex::new(Vec::new()),
        });
        let ctx = AppContext::new(config(), git.clone(), model.clone(), confirmation.clone());
        Harness {
            git,
            model,
            confirmation,
            ctx,
        }
    }

    #[tokio::test]
    async fn confirmed_suggestion_is_committed_verbatim() {
        let h = harness("diff --git a/f b/f\n+hello", Ok("\"Add hello line\""), true);

        let outcome = commit_staged_changes(&h.ctx).await.unwrap();

        let expected = CommitMessage::from_completion("\"Add hello line\"").unwrap();
        assert_eq!(outcome, CommitWorkflowOutcome::Committed(expected));
        let prompts = h.model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("diff --git a/f b/f\n+hello"));
        assert_eq!(*h.git.commits.lock().unwrap(), vec!["\"Add hello line\"".to_string()]);
    }

    #[tokio::test]
    async fn empty_diff_stops_before_model() {
        let h = harness("  \n", Ok("\"unused\""), true);

        let outcome = commit_staged_changes(&h.ctx).await.unwrap();

        assert_eq!(outcome, CommitWorkflowOutcome::NoChanges);
        assert!(h.model.prompts.lock().unwrap().is_empty());
        assert!(h.confirmation.asked.lock().unwrap().is_empty());
        assert!(h.git.commits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn declined_suggestion_is_not_committed() {
        let h = harness("+hello", Ok("\"Add hello line\""), false);

        let outcome = commit_staged_changes(&h.ctx).await.unwrap();

        assert!(matches!(outcome, CommitWorkflowOutcome::Declined(_)));
        assert_eq!(h.confirmation.asked.lock().unwrap().len(), 1);
        assert!(h.git.commits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn service_failure_skips_confirmation_and_commit() {
        let h = harness("+hello", Err("connection refused"), true);

        let err = commit_staged_changes(&h.ctx).await.unwrap_err();

        assert!(matches!(err, AppError::LanguageModel(_)));
        assert!(h.confirmation.asked.lock().unwrap().is_empty());
        assert!(h.git.commits.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn diff_failure_is_propagated() {
        let h = harness("", Ok("\"unused\""), true);
        let ctx = AppContext::new(
            config(),
            Arc::new(FailingGit),
            h.model.clone(),
            h.confirmation.clone(),
        );

        let err = commit_staged_changes(&ctx).await.unwrap_err();

        assert!(matches!(err, AppError::VersionControl(_)));
        assert!(h.model.prompts.lock().unwrap().is_empty());
    }
}
