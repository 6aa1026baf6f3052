// Error types for exporter-agent

use thiserror::Error;

/// Result type alias using AgentError
pub type Result<T> = std::result::Result<T, AgentError>;

/// Agent-specific error types
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Failed to acquire package manager install lock: {0}")]
    InstallLock(String),

    #[error("Invalid exporter configuration:\n{0}")]
    Config(String),

    #[error("Failed to register scrape target: {0}")]
    ScrapeConfig(String),

    #[error("Service action '{0}' is not supported")]
    UnsupportedAction(String),

    #[error("Host command '{command}' failed: {message}")]
    HostCommand { command: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AgentError {
    /// Returns true if this error represents a configuration validation failure.
    pub fn is_config(&self) -> bool {
        matches!(self, AgentError::Config(_))
    }

    /// Returns true if this error came from the monitoring-system integration.
    pub fn is_scrape_config(&self) -> bool {
        matches!(self, AgentError::ScrapeConfig(_))
    }
}
