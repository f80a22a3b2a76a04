use serde_json::{Value, json};

use crate::config::GenerationSettings;

pub(crate) fn build_body(settings: &GenerationSettings, prompt: &str) -> Value {
    let mut body = json!({
        "contents": [
            {
                "role": "user",
                "parts": [
                    {"text": prompt}
                ]
            }
        ],
        "generationConfig": {
            "maxOutputTokens": settings.max_output_tokens,
            "temperature": settings.temperature
        }
    });
    if settings.search_grounding {
        body["tools"] = json!([
            {
                "google_search": {}
            }
        ]);
    }
    body
}
