/// Shared error types for the bingo roulette drawer
///
/// Design:
/// - Standardized error codes so the front end can tell a fatal startup
///   problem apart from a notice that only aborts one action
/// - Categorized by error domain (Configuration, Asset, Exhausted, ...)
/// - Includes context fields for debugging (code, message, context)
///
/// Error codes follow pattern: <CATEGORY>_<SPECIFIC>_<DETAIL>
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error categories that map to logging severity and fatality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// Config file missing, unreadable or holding a bad entry
    Configuration,

    /// A required image or sound file is not on disk
    Asset,

    /// Every number in the pool has already been drawn
    Exhausted,

    /// A number was looked up in a pool that does not contain it
    NotFound,

    /// The two-digit display cannot show the requested number
    Display,

    /// A running animation was cancelled before it settled
    Cancelled,

    /// Unexpected failures, programming errors
    Internal,
}

impl ErrorCategory {
    /// Startup problems end the process; everything else aborts one action
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Configuration | ErrorCategory::Asset | ErrorCategory::Internal
        )
    }

    /// Map error category to log level
    pub fn log_level(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "error",
            ErrorCategory::Asset => "error",
            ErrorCategory::Exhausted => "info",
            ErrorCategory::NotFound => "warn",
            ErrorCategory::Display => "warn",
            ErrorCategory::Cancelled => "info",
            ErrorCategory::Internal => "error",
        }
    }
}

/// Standard error codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    // Configuration errors
    pub const CONFIGURATION_MISSING_KEY: ErrorCode = ErrorCode("CONFIGURATION_MISSING_KEY");
    pub const CONFIGURATION_MALFORMED_LINE: ErrorCode = ErrorCode("CONFIGURATION_MALFORMED_LINE");
    pub const CONFIGURATION_INVALID_VALUE: ErrorCode = ErrorCode("CONFIGURATION_INVALID_VALUE");
    pub const CONFIGURATION_UNREADABLE: ErrorCode = ErrorCode("CONFIGURATION_UNREADABLE");

    // Asset errors
    pub const ASSET_MISSING: ErrorCode = ErrorCode("ASSET_MISSING");

    // Draw errors
    pub const EXHAUSTED_ALL_NUMBERS_DRAWN: ErrorCode = ErrorCode("EXHAUSTED_ALL_NUMBERS_DRAWN");
    pub const NOT_FOUND_NUMBER_NOT_IN_POOL: ErrorCode = ErrorCode("NOT_FOUND_NUMBER_NOT_IN_POOL");
    pub const DISPLAY_NUMBER_OUT_OF_RANGE: ErrorCode = ErrorCode("DISPLAY_NUMBER_OUT_OF_RANGE");
    pub const CANCELLED_ANIMATION: ErrorCode = ErrorCode("CANCELLED_ANIMATION");

    // Internal errors
    pub const INTERNAL_UNEXPECTED: ErrorCode = ErrorCode("INTERNAL_UNEXPECTED");
    pub const INTERNAL_SERIALIZATION: ErrorCode = ErrorCode("INTERNAL_SERIALIZATION");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standardized error structure used across the workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    /// Error category (determines fatality and log level)
    pub category: ErrorCategory,

    /// Structured error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context (e.g. key names, paths, pool bounds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ServiceError {
    pub fn new(category: ErrorCategory, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            category,
            code: code.as_str().to_string(),
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.category.is_fatal()
    }

    // Configuration error constructors
    pub fn missing_config_key(key: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Configuration,
            ErrorCode::CONFIGURATION_MISSING_KEY,
            format!("Missing config key: {}", key),
        )
    }

    pub fn malformed_config_line(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Configuration,
            ErrorCode::CONFIGURATION_MALFORMED_LINE,
            "Malformed config line",
        )
        .with_context(error.to_string())
    }

    pub fn invalid_config_value(key: impl fmt::Display, value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Configuration,
            ErrorCode::CONFIGURATION_INVALID_VALUE,
            format!("Config value for {} is not an integer", key),
        )
        .with_context(format!("value: {}", value))
    }

    pub fn unreadable_config(path: impl fmt::Display, error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Configuration,
            ErrorCode::CONFIGURATION_UNREADABLE,
            format!("Cannot read config file: {}", path),
        )
        .with_context(error.to_string())
    }

    // Asset error constructors
    pub fn asset_missing(path: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Asset,
            ErrorCode::ASSET_MISSING,
            format!("Asset not found: {}", path),
        )
    }

    // Draw error constructors
    pub fn pool_exhausted(pool_size: usize) -> Self {
        Self::new(
            ErrorCategory::Exhausted,
            ErrorCode::EXHAUSTED_ALL_NUMBERS_DRAWN,
            "All numbers have been drawn",
        )
        .with_context(format!("pool size: {}", pool_size))
    }

    pub fn number_not_in_pool(number: u32) -> Self {
        Self::new(
            ErrorCategory::NotFound,
            ErrorCode::NOT_FOUND_NUMBER_NOT_IN_POOL,
            format!("Number not in pool: {}", number),
        )
    }

    pub fn number_out_of_display_range(number: u32) -> Self {
        Self::new(
            ErrorCategory::Display,
            ErrorCode::DISPLAY_NUMBER_OUT_OF_RANGE,
            format!("Number does not fit two digits: {}", number),
        )
    }

    pub fn animation_cancelled(step: usize, total: usize) -> Self {
        Self::new(
            ErrorCategory::Cancelled,
            ErrorCode::CANCELLED_ANIMATION,
            "Roulette animation cancelled",
        )
        .with_context(format!("step {} of {}", step, total))
    }

    // Internal error constructors
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Internal, ErrorCode::INTERNAL_UNEXPECTED, message)
    }

    pub fn serialization_error(error: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Internal,
            ErrorCode::INTERNAL_SERIALIZATION,
            "Serialization error",
        )
        .with_context(error.to_string())
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "[{}] {}: {}", self.code, self.message, context)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

// Convenience type alias
pub type Result<T> = std::result::Result<T, ServiceError>;
