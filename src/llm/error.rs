use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key is missing. Please configure the environment.")]
    MissingCredential,
    #[error("No content generated from the model.{}", reason_suffix(.reason))]
    EmptyGeneration { reason: Option<String> },
    #[error(transparent)]
    Transport(#[from] TransportFailure),
    #[error("failed to compose prompt: {0:#}")]
    Prompt(anyhow::Error),
}

/// The call to the endpoint failed or came back unusable.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("invalid Gemini endpoint URL: {0}")]
    InvalidEndpoint(String),
    #[error("network request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Gemini API error ({status}): {detail}")]
    Status { status: StatusCode, detail: String },
    #[error("failed to parse Gemini response: {0}")]
    Decode(#[source] serde_json::Error),
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason.as_deref().map(str::trim) {
        Some(reason) if !reason.is_empty() => format!(" (reason: {reason})"),
        _ => String::new(),
    }
}
