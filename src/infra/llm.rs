use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::commit::CommitMessage;
use crate::domain::prompt::Prompt;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
const MAX_TOKENS: u32 = 50;

pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    fn completions_endpoint(&self) -> String {
        format!("{}/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LanguageModelService for OpenAiClient {
    async fn suggest_commit_message(&self, prompt: &Prompt) -> AppResult<CommitMessage> {
        let request_body = CompletionRequest::new(prompt.as_str());

        let mut request = self
            .http
            .post(self.completions_endpoint())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!(model = COMPLETION_MODEL, "requesting completion");
        let response = request.send().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to call completion service: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::LanguageModel(format!(
                "completion service responded with {status}: {body}"
            )));
        }

        let payload: CompletionResponse = response.json().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to parse completion response: {err}"))
        })?;

        let choice = payload.choices.into_iter().next().ok_or_else(|| {
            AppError::LanguageModel("completion response contained no choices".to_string())
        })?;

        CommitMessage::from_completion(&choice.text).ok_or_else(|| {
            AppError::LanguageModel("completion service returned an empty message".to_string())
        })
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'static str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
    n: u8,
    stop: Option<Vec<String>>,
}

impl<'a> CompletionRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            model: COMPLETION_MODEL,
            prompt,
            temperature: 0.0,
            max_tokens: MAX_TOKENS,
            n: 1,
            stop: None,
        }
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: String,
}
