use shared::errors::{ErrorCategory, ServiceError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Service(e) => e.category,
            AppError::Io(_) | AppError::Internal(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.category().is_fatal()
    }

    /// Log the error at the level its category calls for
    pub fn log(&self) {
        match self.category().log_level() {
            "info" => tracing::info!(error = %self, "Action aborted"),
            "warn" => tracing::warn!(error = %self, "Action failed"),
            _ => tracing::error!(error = ?self, "Action failed"),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
