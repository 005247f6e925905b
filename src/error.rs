use thiserror::Error;

/// Errors that can occur while loading a serialized flow definition.
#[derive(Error, Debug)]
pub enum FlowLoadError {
    #[error("Failed to parse flow JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read flow file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when converting a custom editor format into a
/// nagare `FlowConfig`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid flow data: {0}")]
    ValidationError(String),
}
