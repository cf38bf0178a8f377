use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybookError {
    #[error("Playbook '{0}' not found")]
    NotFound(String),

    #[error("Duplicate playbook id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
