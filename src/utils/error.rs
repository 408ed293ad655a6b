use crate::domain::model::JeepModel;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("No Jeeps found with model={model} and trim={trim}")]
    NotFound { model: JeepModel, trim: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A data-store error that would otherwise read as a caller mistake.
    #[error("Data store failure: {0}")]
    QueryFailed(#[source] Box<InventoryError>),

    #[error("Data store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid request parameter '{field}': {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Valid request, nothing matched.
    NotFound,
    /// Rejected before reaching the data store.
    InvalidInput,
    Internal,
}

impl InventoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InventoryError::NotFound { .. } => ErrorCategory::NotFound,
            InventoryError::InvalidParameter { .. }
            | InventoryError::InvalidConfigValueError { .. }
            | InventoryError::MissingConfigError { .. } => ErrorCategory::InvalidInput,
            InventoryError::IoError(_)
            | InventoryError::CsvError(_)
            | InventoryError::SerializationError(_)
            | InventoryError::QueryFailed(_)
            | InventoryError::StoreUnavailable { .. }
            | InventoryError::ConfigError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::NotFound => 404,
            ErrorCategory::InvalidInput => 400,
            ErrorCategory::Internal => 500,
        }
    }

    /// Keeps internal errors as they are and wraps any other kind in
    /// [`InventoryError::QueryFailed`].
    pub fn into_internal(self) -> Self {
        match self.category() {
            ErrorCategory::Internal => self,
            _ => InventoryError::QueryFailed(Box::new(self)),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::InvalidInput => self.to_string(),
            ErrorCategory::Internal => "An unexpected error occurred".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
