use thiserror::Error;

/// Failures surfaced by the clinic cells.
///
/// The two variants are separate channels: `ValidationError` comes from a
/// constructor rejecting a field, `Usage` from a caller handing a registry
/// operation nothing to work on. Display is the bare message in both cases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    Usage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(message.into())
    }

    pub fn usage(message: impl Into<String>) -> Self {
        AppError::Usage(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::ValidationError(_))
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, AppError::Usage(_))
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg) | AppError::Usage(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
