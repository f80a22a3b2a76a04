pub fn get_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(super) fn base_url_from_env() -> Option<String> {
    get_env("GEMINI_BASE_URL").map(|value| value.trim_end_matches('/').to_string())
}
