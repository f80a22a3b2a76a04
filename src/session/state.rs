use crate::classify::ErrorInfo;
use crate::proposal::{GeneratedProposal, GroundingSource, ProposalRequest, ProposalResponse};

use super::view::SessionView;

#[derive(Debug, Clone)]
struct CurrentResult {
    text: String,
    sources: Vec<GroundingSource>,
}

/// Page-session state. Mutated only through `begin`, `succeed`, `fail` and
/// `select_history`; history is most-recent first and lives as long as the session.
#[derive(Debug, Default)]
pub struct ProposalSession {
    loading: bool,
    current: Option<CurrentResult>,
    error: Option<ErrorInfo>,
    history: Vec<ProposalResponse>,
}

impl ProposalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.current = None;
    }

    pub fn succeed(
        &mut self,
        request: ProposalRequest,
        generated: GeneratedProposal,
    ) -> &ProposalResponse {
        self.loading = false;
        self.current = Some(CurrentResult {
            text: generated.text.clone(),
            sources: generated.sources.clone(),
        });
        self.history.insert(0, ProposalResponse::new(request, generated));
        &self.history[0]
    }

    pub fn fail(&mut self, error: ErrorInfo) -> &ErrorInfo {
        self.loading = false;
        self.error.insert(error)
    }

    /// Redisplays a past entry by its 0-based position and clears any error.
    pub fn select_history(&mut self, index: usize) -> Option<&ProposalResponse> {
        let entry = self.history.get(index)?;
        self.current = Some(CurrentResult {
            text: entry.response().to_string(),
            sources: entry.sources().to_vec(),
        });
        self.error = None;
        Some(entry)
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    pub fn current_text(&self) -> Option<&str> {
        self.current.as_ref().map(|current| current.text.as_str())
    }

    pub fn history(&self) -> &[ProposalResponse] {
        &self.history
    }

    pub fn view(&self) -> SessionView<'_> {
        if let Some(error) = &self.error {
            return SessionView::Error(error);
        }
        if self.loading {
            return SessionView::Loading;
        }
        match &self.current {
            Some(current) => SessionView::Result {
                text: &current.text,
                sources: &current.sources,
            },
            None => SessionView::Empty,
        }
    }
}
