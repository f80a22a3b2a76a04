mod api_error;
mod error;
mod gemini;
mod request;
mod response;

use tracing::info;

use crate::config::{self, AgencyProfile, GenerationSettings, KeyLookup};
use crate::prompt;
use crate::proposal::{GeneratedProposal, ProposalRequest};

pub use error::{GenerationError, TransportFailure};

/// Single-attempt client for Gemini `generateContent` with search grounding.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: GenerationSettings,
    agency: AgencyProfile,
    key_lookup: KeyLookup,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(settings: GenerationSettings, agency: AgencyProfile, key_lookup: KeyLookup) -> Self {
        Self {
            settings,
            agency,
            key_lookup,
            http: reqwest::Client::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.settings.model
    }

    /// Reads the credential, composes the prompt and performs exactly one call.
    pub async fn generate(
        &self,
        request: &ProposalRequest,
    ) -> Result<GeneratedProposal, GenerationError> {
        let api_key = config::resolve_key_with(self.key_lookup)?;
        let prompt = prompt::compose(request, &self.agency).map_err(GenerationError::Prompt)?;
        let generated = self.call_gemini(&api_key, &prompt).await?;
        info!(
            sources = generated.sources.len(),
            chars = generated.text.len(),
            "generation completed"
        );
        Ok(generated)
    }
}
