/// Failures of the external text generation port.
///
/// None of these reach the caller: every variant degrades to the fallback ranking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("recommendation.request_failed")]
    RequestFailed,
    #[error("recommendation.unauthorized")]
    Unauthorized,
    #[error("recommendation.service_error")]
    ServiceError(u16),
    #[error("recommendation.empty_response")]
    EmptyResponse,
    #[error("recommendation.timeout")]
    Timeout,
}

/// Why a model response could not be read as a list of names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResponseParseError {
    #[error("recommendation.response_empty")]
    Empty,
    #[error("recommendation.response_not_json_array")]
    NotJsonArray,
    #[error("recommendation.response_no_bracketed_array")]
    NoBracketedArray,
    #[error("recommendation.response_non_string_element")]
    NonStringElement,
}

/// Reasons the model path produced no ranking.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("recommendation.ranker_not_configured")]
    NotConfigured,
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Parse(#[from] ResponseParseError),
    #[error("recommendation.no_matching_names")]
    NoMatches,
}
