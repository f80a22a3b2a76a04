use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: Option<String>,
    status: Option<String>,
    code: Option<i64>,
}

/// Condenses a Gemini error body to `message (status=..., code=...)`, or returns it untouched.
pub(crate) fn extract_api_error(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<GeminiErrorEnvelope>(body)
        && let Some(err) = parsed.error
    {
        let message = err.message.unwrap_or_else(|| "unknown error".to_string());
        let status = err.status.unwrap_or_else(|| "unknown".to_string());
        let code = err
            .code
            .map(|value| value.to_string())
            .unwrap_or_else(|| "none".to_string());
        return format!("{} (status={}, code={})", message, status, code);
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condenses_gemini_error_envelope() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota).","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            extract_api_error(body),
            "Resource has been exhausted (e.g. check quota). (status=RESOURCE_EXHAUSTED, code=429)"
        );
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(
            extract_api_error("upstream connect error"),
            "upstream connect error"
        );
        assert_eq!(extract_api_error("  "), "empty response body");
    }
}
