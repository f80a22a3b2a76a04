use serde::Deserialize;

use super::{GenerationError, TransportFailure};
use crate::proposal::{GeneratedProposal, GroundingSource};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

pub(crate) fn parse_generation(payload: &str) -> Result<GeneratedProposal, GenerationError> {
    let parsed: GeminiResponse = match serde_json::from_str(payload) {
        Ok(parsed) => parsed,
        Err(err) => return Err(TransportFailure::Decode(err).into()),
    };

    let candidate = parsed.candidates.first();
    let text = candidate.map(candidate_text).unwrap_or_default();
    if text.trim().is_empty() {
        let reason = parsed
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .or_else(|| {
                candidate
                    .and_then(|candidate| candidate.finish_reason.clone())
                    .filter(|reason| reason != "STOP")
            });
        return Err(GenerationError::EmptyGeneration { reason });
    }

    let sources = candidate.map(candidate_sources).unwrap_or_default();
    Ok(GeneratedProposal { text, sources })
}

fn candidate_text(candidate: &GeminiCandidate) -> String {
    candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter(|part| !part.thought)
        .filter_map(|part| part.text.as_deref())
        .collect()
}

// Chunks without a uri cannot be linked and are dropped.
fn candidate_sources(candidate: &GeminiCandidate) -> Vec<GroundingSource> {
    candidate
        .grounding_metadata
        .iter()
        .flat_map(|metadata| metadata.grounding_chunks.iter())
        .filter_map(|chunk| chunk.web.as_ref())
        .filter_map(|web| {
            let uri = web.uri.as_deref()?.trim();
            if uri.is_empty() {
                return None;
            }
            Some(GroundingSource::new(uri, web.title.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_text_and_grounding_sources() {
        let payload = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Fixed-fee pricing "}, {"text": "protects scope."}]},
                "finishReason": "STOP",
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"uri": "https://example.com/pricing", "title": "Pricing Models"}},
                        {"web": {"uri": "https://example.com/scope"}}
                    ]
                }
            }]
        })
        .to_string();

        let generated = parse_generation(&payload).unwrap();
        assert_eq!(generated.text, "Fixed-fee pricing protects scope.");
        assert_eq!(generated.sources.len(), 2);
        assert_eq!(generated.sources[0].title, "Pricing Models");
        assert_eq!(generated.sources[1].uri, "https://example.com/scope");
        assert_eq!(generated.sources[1].title, generated.sources[1].uri);
    }

    #[test]
    fn skips_chunks_without_uri() {
        let payload = json!({
            "candidates": [{
                "content": {"parts": [{"text": "draft"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"title": "No link"}},
                        {"retrievedContext": {"uri": "gs://bucket/doc"}},
                        {"web": {"uri": "  ", "title": "Blank"}},
                        {"web": {"uri": "https://example.com/a", "title": "A"}}
                    ]
                }
            }]
        })
        .to_string();

        let generated = parse_generation(&payload).unwrap();
        assert_eq!(
            generated.sources,
            vec![GroundingSource {
                uri: "https://example.com/a".into(),
                title: "A".into(),
            }]
        );
    }

    #[test]
    fn ignores_thought_parts() {
        let payload = json!({
            "candidates": [{
                "content": {"parts": [{"text": "thinking...", "thought": true}, {"text": "answer"}]}
            }]
        })
        .to_string();
        assert_eq!(parse_generation(&payload).unwrap().text, "answer");
    }

    #[test]
    fn blocked_prompt_is_empty_generation() {
        let payload = json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string();
        let err = parse_generation(&payload).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::EmptyGeneration { reason: Some(ref reason) } if reason == "SAFETY"
        ));
    }

    #[test]
    fn candidate_without_text_reports_finish_reason() {
        let payload = json!({
            "candidates": [{"finishReason": "RECITATION"}]
        })
        .to_string();
        let err = parse_generation(&payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No content generated from the model. (reason: RECITATION)"
        );
    }

    #[test]
    fn whitespace_text_is_empty_generation() {
        let payload = json!({
            "candidates": [{"content": {"parts": [{"text": "  \n"}]}, "finishReason": "STOP"}]
        })
        .to_string();
        let err = parse_generation(&payload).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyGeneration { reason: None }));
    }

    #[test]
    fn malformed_body_is_a_transport_failure() {
        let err = parse_generation("<html>bad gateway</html>").unwrap_err();
        match err {
            GenerationError::Transport(TransportFailure::Decode(_)) => {}
            other => panic!("expected decode failure, got {other:?}"),
        }
    }
}
