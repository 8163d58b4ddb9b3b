use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for Gemini API access.
///
/// A missing key is not an error: ranking then always uses the fallback order.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Environment variables:
    /// - GEMINI_API_KEY: API credential (optional)
    /// - GEMINI_MODEL: model name (default: "gemini-2.5-flash")
    /// - GEMINI_TIMEOUT_SECS: ranking deadline in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let model = lookup("GEMINI_MODEL")
            .map(|model| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = lookup("GEMINI_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
