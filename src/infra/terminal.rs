use async_trait::async_trait;
use dialoguer::Confirm;

use crate::domain::commit::CommitMessage;
use crate::error::{AppError, AppResult};
use crate::services::ConfirmationService;

pub struct TerminalConfirmation;

impl TerminalConfirmation {
    pub fn new() -> Self {
        Self
    }

    fn question(message: &CommitMessage) -> String {
        format!("{}.", message.as_str())
    }
}

#[async_trait]
impl ConfirmationService for TerminalConfirmation {
    async fn confirm(&self, message: &CommitMessage) -> AppResult<bool> {
        let question = Self::question(message);
        tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(question)
                .default(true)
                .interact()
                .map_err(|err| AppError::Confirmation(err.to_string()))
        })
        .await
        .map_err(|err| AppError::Confirmation(format!("prompt task failed: {err}")))?
    }
}
