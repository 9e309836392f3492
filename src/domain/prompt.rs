use crate::domain::change::ChangeSummary;

const PROMPT_CUE: &str = "Commit message: ";

/// Completion prompt for a single change summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn for_changes(changes: &ChangeSummary) -> Self {
        Self(format!(
            "Generate a Git commit message based on the following summary: {}\n  \n\nThe Commit message must wrap with double quote like this \"your commit message\"\n  \n\n{PROMPT_CUE}",
            changes.as_str()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
