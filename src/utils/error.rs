use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Desktop entry not found: {}", path.display())]
    MissingSourceError { path: PathBuf },

    #[error("Failed to launch schema compiler `{command}`: {source}")]
    CompilerLaunchError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: `{value}` ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl HookError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            HookError::IoError(e) => format!("Filesystem operation failed: {}", e),
            HookError::MissingSourceError { path } => format!(
                "The desktop entry {} was not found in the install tree",
                path.display()
            ),
            HookError::CompilerLaunchError { command, .. } => {
                format!("Could not run the schema compiler `{}`", command)
            }
            HookError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            HookError::ConfigError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HookError::IoError(_) => "Check filesystem permissions under the install prefix",
            HookError::MissingSourceError { .. } => {
                "Check that the desktop entry was staged before this hook runs"
            }
            HookError::CompilerLaunchError { .. } => {
                "Install the glib schema tools or pass --schema-compiler"
            }
            HookError::InvalidConfigValueError { .. } | HookError::ConfigError { .. } => {
                "Check the arguments passed to the hook"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HookError>;
