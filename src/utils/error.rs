use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Catalog request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Catalog unavailable: {message}")]
    CatalogError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
