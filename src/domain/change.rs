/// Staged diff text, trimmed. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSummary(String);

impl ChangeSummary {
    /// Returns `None` when the diff output is blank.
    pub fn from_diff_output(output: &str) -> Option<Self> {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
