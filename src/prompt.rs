use anyhow::{Context, Result};
use serde::Serialize;
use tera::{Context as TeraContext, Tera};

use crate::config::AgencyProfile;
use crate::proposal::ProposalRequest;

#[derive(Debug, Clone, Serialize)]
struct PromptInput<'a> {
    agency_name: &'a str,
    agency_specialty: &'a str,
    section_topic: &'a str,
    user_notes: &'a str,
}

const PROPOSAL_PROMPT_TEMPLATE: &str = include_str!("prompts/proposal_prompt.tera");

/// Builds the single prompt sent to the model: preamble, topic, then the notes verbatim.
pub fn compose(request: &ProposalRequest, agency: &AgencyProfile) -> Result<String> {
    let input = PromptInput {
        agency_name: &agency.name,
        agency_specialty: &agency.specialty,
        section_topic: request.section_topic(),
        user_notes: request.user_notes(),
    };
    let context = TeraContext::from_serialize(&input)
        .with_context(|| "failed to build prompt context")?;

    Tera::one_off(PROPOSAL_PROMPT_TEMPLATE, &context, false)
        .with_context(|| "failed to render proposal prompt")
}
