use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{GenerateRequest, Generation, Generator, TokenUsage};
use crate::consts::DEFAULT_BASE_URL;
use crate::error::GenerateError;
use crate::schema::Schema;

const RESPONSE_MIME_TYPE: &str = "application/json";

/// A generator that calls the Gemini `generateContent` endpoint with a
/// `responseSchema`, so replies come back as JSON of the requested shape.
pub struct GeminiGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (a proxy, or a mock server in tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn build_body(request: &GenerateRequest) -> ApiRequest<'_> {
        ApiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema: &request.schema,
            },
        }
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: &ApiResponse) -> String {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn generate(&self, request: &GenerateRequest) -> Result<Generation, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::MissingApiKey);
        }

        let body = Self::build_body(request);

        let resp = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerateError::Api { status, body });
        }

        let api_resp: ApiResponse = resp.json().await?;
        let text = Self::extract_text(&api_resp);

        if text.trim().is_empty() {
            return Err(GenerateError::EmptyResponse);
        }

        let usage = api_resp.usage_metadata.map(|u| TokenUsage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        });

        if let Some(usage) = usage {
            tracing::debug!(
                task = %request.task,
                model = %request.model,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "generation complete"
            );
        }

        Ok(Generation { text, usage })
    }
}

// --- API types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Schema,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Task;

    fn request() -> GenerateRequest {
        GenerateRequest {
            task: Task::SearchVariations,
            model: "gemini-2.5-flash".to_string(),
            prompt: "vary this".to_string(),
            schema: Schema::array(Schema::object([("query", Schema::string())])),
        }
    }

    #[test]
    fn endpoint_includes_model_and_trims_slash() {
        let generator = GeminiGenerator::with_base_url("k", "http://localhost:9/");
        assert_eq!(
            generator.endpoint("gemini-2.5-flash"),
            "http://localhost:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn body_carries_prompt_and_schema() {
        let req = request();
        let body = serde_json::to_value(GeminiGenerator::build_body(&req)).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "vary this");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["items"]["properties"]["query"]["type"],
            "STRING"
        );
    }

    #[test]
    fn extract_text_joins_parts() {
        let resp: ApiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "[{\"a\""}, {"text": ": 1}]"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiGenerator::extract_text(&resp), r#"[{"a": 1}]"#);
    }

    #[test]
    fn extract_text_without_candidates_is_empty() {
        let resp: ApiResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        assert_eq!(GeminiGenerator::extract_text(&resp), "");
    }

    #[test]
    fn extract_text_without_content_is_empty() {
        let resp: ApiResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert_eq!(GeminiGenerator::extract_text(&resp), "");
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let generator = GeminiGenerator::with_base_url("", "http://127.0.0.1:1");
        let err = generator.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerateError::MissingApiKey));
    }
}
