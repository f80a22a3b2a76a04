use std::future::Future;
use std::pin::Pin;

use crate::llm::{GeminiClient, GenerationError};
use crate::proposal::{GeneratedProposal, ProposalRequest};

pub type GenerationFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GeneratedProposal, GenerationError>> + Send + 'a>>;

pub trait GenerationGateway: Send + Sync {
    fn model_name(&self) -> &str;

    fn generate<'a>(&'a self, request: &'a ProposalRequest) -> GenerationFuture<'a>;
}

impl GenerationGateway for GeminiClient {
    fn model_name(&self) -> &str {
        self.model_name()
    }

    fn generate<'a>(&'a self, request: &'a ProposalRequest) -> GenerationFuture<'a> {
        Box::pin(GeminiClient::generate(self, request))
    }
}
