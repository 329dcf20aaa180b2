use thiserror::Error;

/// Main error type for the prediction service and toolkit
#[derive(Error, Debug)]
pub enum WaiverBidError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Model errors
    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    // Sports-data API errors
    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for WaiverBidError
pub type Result<T> = std::result::Result<T, WaiverBidError>;
