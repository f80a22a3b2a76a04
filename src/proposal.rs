use chrono::{DateTime, Local};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("section topic is required")]
    MissingTopic,
    #[error("notes are required")]
    MissingNotes,
}

/// Topic and notes submitted from the form. Both fields are non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalRequest {
    section_topic: String,
    user_notes: String,
}

impl ProposalRequest {
    pub fn new(
        section_topic: impl Into<String>,
        user_notes: impl Into<String>,
    ) -> Result<Self, FormError> {
        let section_topic = section_topic.into();
        let user_notes = user_notes.into();
        if section_topic.trim().is_empty() {
            return Err(FormError::MissingTopic);
        }
        if user_notes.trim().is_empty() {
            return Err(FormError::MissingNotes);
        }
        Ok(Self {
            section_topic,
            user_notes,
        })
    }

    pub fn section_topic(&self) -> &str {
        &self.section_topic
    }

    pub fn user_notes(&self) -> &str {
        &self.user_notes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

impl GroundingSource {
    pub fn new(uri: impl Into<String>, title: Option<String>) -> Self {
        let uri = uri.into();
        let title = title
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| uri.clone());
        Self { uri, title }
    }
}

/// Text and citations returned by one successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProposal {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

/// A history entry. Created once per successful generation and never changed.
#[derive(Debug, Clone)]
pub struct ProposalResponse {
    id: String,
    request: ProposalRequest,
    response: String,
    sources: Vec<GroundingSource>,
    timestamp: DateTime<Local>,
}

impl ProposalResponse {
    pub fn new(request: ProposalRequest, generated: GeneratedProposal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            request,
            response: generated.text,
            sources: generated.sources,
            timestamp: Local::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn request(&self) -> &ProposalRequest {
        &self.request
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn sources(&self) -> &[GroundingSource] {
        &self.sources
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}
