use crate::domain::model::RecordKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Provider error for {kind} (status {status}): {message}")]
    ProviderError {
        kind: RecordKind,
        status: u16,
        message: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Cannot {action} while page is {state}")]
    InvalidStateError { action: String, state: String },

    #[error("Sample data bootstrap aborted after {created} records: {message}")]
    BootstrapAborted { created: usize, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Provider,
    Rendering,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::HttpError(_) => ErrorCategory::Network,
            PortfolioError::ProviderError { .. } | PortfolioError::BootstrapAborted { .. } => {
                ErrorCategory::Provider
            }
            PortfolioError::IoError(_)
            | PortfolioError::SerializationError(_)
            | PortfolioError::TemplateError(_) => ErrorCategory::Rendering,
            PortfolioError::ConfigError { .. }
            | PortfolioError::MissingConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            PortfolioError::InvalidStateError { .. } => ErrorCategory::State,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::State => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Provider => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Rendering => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check --api-url, --output-path and the TOML config file values"
            }
            ErrorCategory::Network => "Check that the data provider is reachable and retry",
            ErrorCategory::Provider => {
                "Check the API key and that the provider exposes the portfolio entities"
            }
            ErrorCategory::Rendering => "Check that the output directory is writable",
            ErrorCategory::State => "Reload the page before running this action",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::HttpError(_) => "Could not reach the data provider".to_string(),
            PortfolioError::ProviderError { kind, status, .. } => {
                format!("The data provider rejected the {} request ({})", kind, status)
            }
            PortfolioError::BootstrapAborted { created, .. } => format!(
                "Creating sample data stopped early ({} records were created)",
                created
            ),
            PortfolioError::IoError(e) => format!("Could not write the page: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let provider = PortfolioError::ProviderError {
            kind: RecordKind::Skill,
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(provider.category(), ErrorCategory::Provider);
        assert_eq!(provider.severity(), ErrorSeverity::Medium);
        assert!(provider.user_friendly_message().contains("Skill"));

        let config = PortfolioError::MissingConfigError {
            field: "api_url".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::High);

        let aborted = PortfolioError::BootstrapAborted {
            created: 3,
            message: "boom".to_string(),
        };
        assert!(aborted.user_friendly_message().contains('3'));
    }
}
