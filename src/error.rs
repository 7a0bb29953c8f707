//! Error handling for the IPO feed client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, body read interrupted and the like.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx.
    #[error("HTTP error with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not a JSON array.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetchError::Status { status, message }
    }
}
