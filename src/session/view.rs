use crate::classify::ErrorInfo;
use crate::proposal::GroundingSource;

/// What the result panel should show. An error always wins over a stale result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView<'a> {
    Empty,
    Loading,
    Error(&'a ErrorInfo),
    Result {
        text: &'a str,
        sources: &'a [GroundingSource],
    },
}
