use thiserror::Error;

/// Failure modes shared by all remote clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The server answered but rejected the operation (e.g. bad credentials).
    #[error("{0}")]
    Rejected(String),

    #[error("no completion API key configured")]
    MissingApiKey,
}

impl ApiError {
    /// Free-text message suitable for inline display on a form.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(msg) => msg.clone(),
            ApiError::MissingApiKey => "The assistant is not configured on this deployment.".into(),
            ApiError::Status { status, .. } => {
                format!("The server could not handle the request (status {status}).")
            }
            ApiError::Http(_) => "Could not reach the server. Try again later.".into(),
        }
    }
}
