pub mod gateway;

use tracing::{debug, error};

use crate::classify::{self, ErrorInfo};
use crate::proposal::{ProposalRequest, ProposalResponse};
use crate::session::ProposalSession;

use gateway::GenerationGateway;

pub enum Outcome<'s> {
    Generated(&'s ProposalResponse),
    Failed(&'s ErrorInfo),
}

/// Runs one generation at a time against a gateway and records the outcome in the session.
pub struct ProposalEngine<'a> {
    gateway: &'a dyn GenerationGateway,
}

impl<'a> ProposalEngine<'a> {
    pub fn new(gateway: &'a dyn GenerationGateway) -> Self {
        Self { gateway }
    }

    pub async fn generate<'s>(
        &self,
        request: ProposalRequest,
        session: &'s mut ProposalSession,
    ) -> Outcome<'s> {
        debug!(
            model = self.gateway.model_name(),
            topic = request.section_topic(),
            "starting generation"
        );
        session.begin();
        let result = self.gateway.generate(&request).await;
        match result {
            Ok(generated) => {
                let entry = session.succeed(request, generated);
                debug!(id = entry.id(), "recorded history entry");
                Outcome::Generated(entry)
            }
            Err(err) => {
                error!(error = %err, "proposal generation failed");
                Outcome::Failed(session.fail(classify::classify(&err)))
            }
        }
    }
}
