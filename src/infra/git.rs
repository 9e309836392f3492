use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::change::ChangeSummary;
use crate::domain::commit::CommitMessage;
use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;
use crate::services::version_control::EXCLUDED_PATHSPECS;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    fn diff_args() -> Vec<&'static str> {
        let mut args = vec!["diff", "--cached", "--", "."];
        args.extend(EXCLUDED_PATHSPECS);
        args
    }

    async fn run(&self, args: &[&str]) -> Result<String, String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| format!("failed to run git {}: {err}", args[0]))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "git {} exited with {}: {}",
                args[0],
                output.status,
                stderr.trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn staged_changes(&self) -> AppResult<Option<ChangeSummary>> {
        let stdout = self
            .run(&Self::diff_args())
            .await
            .map_err(AppError::VersionControl)?;
        debug!(bytes = stdout.len(), "collected staged diff");
        Ok(ChangeSummary::from_diff_output(&stdout))
    }

    async fn commit(&self, message: &CommitMessage) -> AppResult<()> {
        self.run(&["commit", "-m", message.as_str()])
            .await
            .map_err(AppError::Commit)?;
        Ok(())
    }
}
