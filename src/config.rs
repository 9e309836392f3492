use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const ENV_FILE_NAME: &str = ".env";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    /// Resolves settings from the process environment, falling back to the
    /// `.env` file in `workspace_root`.
    pub fn load(workspace_root: &Path) -> AppResult<Self> {
        Self::from_sources(workspace_root, |key| env::var(key).ok())
    }

    fn from_sources(
        workspace_root: &Path,
        process_env: impl Fn(&str) -> Option<String>,
    ) -> AppResult<Self> {
        let env_file = read_env_file(&workspace_root.join(ENV_FILE_NAME))?;
        let lookup = |key: &str| {
            process_env(key)
                .or_else(|| env_file.get(key).cloned())
                .filter(|value| !value.trim().is_empty())
        };

        Ok(Self {
            openai_api_key: lookup(API_KEY_VAR),
            openai_base_url: lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            workspace_root: workspace_root.to_path_buf(),
        })
    }
}

fn read_env_file(path: &Path) -> AppResult<HashMap<String, String>> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => return Ok(HashMap::new()),
        Err(err) => {
            return Err(AppError::Configuration(format!(
                "failed to read {}: {err}",
                path.display()
            )));
        }
    };

    entries
        .map(|entry| {
            entry.map_err(|err| {
                AppError::Configuration(format!("invalid entry in {}: {err}", path.display()))
            })
        })
        .collect()
}
