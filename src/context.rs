use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ConfirmationService, LanguageModelService, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub language_model: Arc<dyn LanguageModelService>,
    pub confirmation: Arc<dyn ConfirmationService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        language_model: Arc<dyn LanguageModelService>,
        confirmation: Arc<dyn ConfirmationService>,
    ) -> Self {
        Self {
            config,
            version_control,
            language_model,
            confirmation,
        }
    }
}
