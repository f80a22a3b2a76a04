use tracing::debug;

use super::api_error::extract_api_error;
use super::request::build_body;
use super::response::parse_generation;
use super::{GeminiClient, GenerationError, TransportFailure};
use crate::proposal::GeneratedProposal;

impl GeminiClient {
    pub(crate) async fn call_gemini(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<GeneratedProposal, GenerationError> {
        let endpoint = format!(
            "{}/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model_path()
        );
        let url = reqwest::Url::parse(&endpoint)
            .map_err(|err| TransportFailure::InvalidEndpoint(format!("{endpoint}: {err}")))?;

        let body = build_body(&self.settings, prompt);
        debug!(
            model = %self.settings.model,
            prompt_chars = prompt.len(),
            search = self.settings.search_grounding,
            "sending generateContent request"
        );

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(TransportFailure::Network)?;
        let status = response.status();
        let payload = response.text().await.map_err(TransportFailure::Network)?;
        if !status.is_success() {
            return Err(TransportFailure::Status {
                status,
                detail: extract_api_error(&payload),
            }
            .into());
        }

        parse_generation(&payload)
    }
}
