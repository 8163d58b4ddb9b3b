use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};

use business::domain::recommendation::errors::GenerationError;
use business::domain::recommendation::services::TextGeneratorService;

use crate::client::GeminiClient;

pub struct TextGeneratorGemini {
    client: GeminiClient,
}

impl TextGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_body(instruction: &str) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{"text": instruction}],
                },
            ],
        })
    }

    fn map_status(status: StatusCode) -> Result<(), GenerationError> {
        if status.is_success() {
            return Ok(());
        }
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GenerationError::Unauthorized),
            _ => Err(GenerationError::ServiceError(status.as_u16())),
        }
    }

    /// Joins the text parts of the first candidate.
    fn extract_text(data: &Value) -> Result<String, GenerationError> {
        let text: String = data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .ok_or(GenerationError::EmptyResponse)?;

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGeneratorService for TextGeneratorGemini {
    async fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header(self.client.auth_header_name(), self.client.api_key.as_str())
            .json(&Self::build_body(instruction))
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::RequestFailed
                }
            })?;

        Self::map_status(response.status())?;

        let data: Value = response
            .json()
            .await
            .map_err(|_| GenerationError::EmptyResponse)?;

        Self::extract_text(&data)
    }
}
