use thiserror::Error;

/// Shown whenever the service did not report an error of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "No flights found or server error occurred.";

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {}", .message.as_deref().unwrap_or("<no error field>"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl OptimizerError {
    /// The text displayed in the form for this failure. Server reported
    /// errors are shown verbatim, anything else maps to the fallback.
    pub fn user_message(&self) -> String {
        match self {
            OptimizerError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}
