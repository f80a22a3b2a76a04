use crate::llm::GenerationError;

/// Checked in order; the first non-blank value wins.
pub const CREDENTIAL_VARS: [&str; 3] = ["API_KEY", "GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Where credential variables are read from. The process environment in
/// normal runs.
pub type KeyLookup = fn(&str) -> Option<String>;

pub fn resolve_key_with<F>(lookup: F) -> Result<String, GenerationError>
where
    F: Fn(&str) -> Option<String>,
{
    CREDENTIAL_VARS
        .iter()
        .find_map(|name| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        })
        .ok_or(GenerationError::MissingCredential)
}
