pub mod confirmation;
pub mod language_model;
pub mod version_control;

pub use confirmation::ConfirmationService;
pub use language_model::LanguageModelService;
pub use version_control::VersionControlService;
