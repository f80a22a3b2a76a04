//! Maps free-text failure descriptions to user-facing error panels.
//!
//! Gemini reports failures only as prose and HTTP status text, so the rules
//! below match lowercase substrings in a fixed order; the first hit wins.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Credential,
    RateLimit,
    ServerUnavailable,
    ContentBlocked,
    Network,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub category: ErrorCategory,
    pub title: String,
    pub message: String,
}

struct Rule {
    category: ErrorCategory,
    triggers: &'static [&'static str],
    title: &'static str,
    message: &'static str,
}

const RULES: [Rule; 5] = [
    Rule {
        category: ErrorCategory::Credential,
        triggers: &["api key", "403", "unauthenticated"],
        title: "Authentication Failed",
        message: "Access denied. Please ensure your API_KEY is correctly configured and valid.",
    },
    Rule {
        category: ErrorCategory::RateLimit,
        triggers: &["429", "resource exhausted", "quota"],
        title: "Usage Limit Exceeded",
        message: "You have reached the API rate limit. Please wait a moment before trying again.",
    },
    Rule {
        category: ErrorCategory::ServerUnavailable,
        triggers: &["503", "unavailable", "overloaded"],
        title: "Service Unavailable",
        message: "The AI service is currently experiencing high traffic. Please try again in a few seconds.",
    },
    Rule {
        category: ErrorCategory::ContentBlocked,
        triggers: &["safety", "blocked", "no content generated"],
        title: "Generation Blocked",
        message: "The model could not generate a response, likely due to safety filters. Please refine your input notes and try again.",
    },
    Rule {
        category: ErrorCategory::Network,
        triggers: &["fetch", "network", "failed to fetch"],
        title: "Connection Error",
        message: "Could not connect to the API. Please check your internet connection.",
    },
];

const UNKNOWN_TITLE: &str = "Generation Error";
const UNKNOWN_FALLBACK: &str = "An unexpected error occurred while processing your request.";

/// Classifies any displayable failure. Uses the alternate form so `anyhow`
/// chains contribute their causes to the matched text.
pub fn classify<E>(failure: &E) -> ErrorInfo
where
    E: fmt::Display + ?Sized,
{
    classify_description(&format!("{failure:#}"))
}

pub fn classify_description(description: &str) -> ErrorInfo {
    let lowered = description.to_lowercase();
    let matched = RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|trigger| lowered.contains(trigger)));
    if let Some(rule) = matched {
        return ErrorInfo {
            category: rule.category,
            title: rule.title.to_string(),
            message: rule.message.to_string(),
        };
    }

    let message = if description.trim().is_empty() {
        UNKNOWN_FALLBACK.to_string()
    } else {
        description.to_string()
    };
    ErrorInfo {
        category: ErrorCategory::Unknown,
        title: UNKNOWN_TITLE.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{GenerationError, TransportFailure};
    use anyhow::anyhow;
    use reqwest::StatusCode;

    #[test]
    fn maps_each_category() {
        let cases = [
            ("API key not valid", ErrorCategory::Credential),
            ("HTTP 403 Forbidden", ErrorCategory::Credential),
            ("UNAUTHENTICATED", ErrorCategory::Credential),
            ("Quota exceeded for metric", ErrorCategory::RateLimit),
            ("RESOURCE EXHAUSTED", ErrorCategory::RateLimit),
            ("The model is overloaded", ErrorCategory::ServerUnavailable),
            ("Service UNAVAILABLE", ErrorCategory::ServerUnavailable),
            ("Response was blocked", ErrorCategory::ContentBlocked),
            ("SAFETY", ErrorCategory::ContentBlocked),
            ("TypeError: Failed to fetch", ErrorCategory::Network),
            ("network unreachable", ErrorCategory::Network),
        ];
        for (description, expected) in cases {
            assert_eq!(
                classify_description(description).category,
                expected,
                "{description}"
            );
        }
    }

    #[test]
    fn rate_limit_scenario() {
        let info = classify_description("429 Resource Exhausted");
        assert_eq!(info.title, "Usage Limit Exceeded");
        assert_eq!(
            info.message,
            "You have reached the API rate limit. Please wait a moment before trying again."
        );
    }

    #[test]
    fn rule_order_is_total() {
        assert_eq!(
            classify_description("403 then 429").category,
            ErrorCategory::Credential
        );
        assert_eq!(
            classify_description("429: model overloaded, blocked, network").category,
            ErrorCategory::RateLimit
        );
        assert_eq!(
            classify_description("503 blocked by safety").category,
            ErrorCategory::ServerUnavailable
        );
        assert_eq!(
            classify_description("safety filter after network retry").category,
            ErrorCategory::ContentBlocked
        );
    }

    #[test]
    fn unknown_keeps_description() {
        let info = classify_description("disk on fire");
        assert_eq!(info.category, ErrorCategory::Unknown);
        assert_eq!(info.title, "Generation Error");
        assert_eq!(info.message, "disk on fire");
    }

    #[test]
    fn blank_description_gets_fallback_message() {
        for blank in ["", "   ", "\n\t"] {
            let info = classify_description(blank);
            assert_eq!(info.category, ErrorCategory::Unknown);
            assert_eq!(info.message, UNKNOWN_FALLBACK);
        }
    }

    #[test]
    fn classifies_generation_errors() {
        assert_eq!(
            classify(&GenerationError::MissingCredential).category,
            ErrorCategory::Credential
        );
        assert_eq!(
            classify(&GenerationError::EmptyGeneration { reason: None }).category,
            ErrorCategory::ContentBlocked
        );
        let unavailable: GenerationError = TransportFailure::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            detail: "try later".into(),
        }
        .into();
        assert_eq!(
            classify(&unavailable).category,
            ErrorCategory::ServerUnavailable
        );
        let not_found: GenerationError = TransportFailure::Status {
            status: StatusCode::NOT_FOUND,
            detail: "models/nope is not found".into(),
        }
        .into();
        let info = classify(&not_found);
        assert_eq!(info.category, ErrorCategory::Unknown);
        assert_eq!(info.message, not_found.to_string());
    }

    #[test]
    fn reads_the_whole_anyhow_chain() {
        let err = anyhow!("quota exceeded").context("generation failed");
        assert_eq!(classify(&err).category, ErrorCategory::RateLimit);
        assert_eq!(classify("plain str").message, "plain str");
    }
}
