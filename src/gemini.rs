use crate::asset::EncodedAsset;
use crate::config::Config;
use crate::error::GenerationError;
use crate::orchestrator::{GenerationRequest, ImageGenerator, ImagePayload};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RequestPart {
    Text { text: String },
    #[serde(rename_all = "camelCase")]
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

impl From<&EncodedAsset> for RequestPart {
    fn from(asset: &EncodedAsset) -> Self {
        RequestPart::InlineData {
            inline_data: InlineData {
                mime_type: asset.mime_type.clone(),
                data: asset.data.clone(),
            },
        }
    }
}

/// Prompt first, then product, then logo. The aspect ratio travels only
/// inside the prompt text.
pub fn build_generate_request(request: &GenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                RequestPart::Text {
                    text: request.prompt().to_string(),
                },
                request.product().into(),
                request.logo().into(),
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string()],
        },
    }
}

/// Takes the first part of the first candidate that carries image bytes.
pub fn extract_image(response: GenerateContentResponse) -> Result<ImagePayload, GenerationError> {
    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default();

    let mut text = Vec::new();
    for part in parts {
        match part.inline_data {
            Some(inline) if !inline.data.is_empty() => {
                return Ok(ImagePayload::new(inline.mime_type, inline.data));
            }
            _ => text.extend(part.text),
        }
    }

    if !text.is_empty() {
        log::debug!("Response carried text but no image: {}", text.join(" "));
    }
    Err(GenerationError::NoImageData)
}

pub fn build_headers(api_key: &str) -> Result<HeaderMap, GenerationError> {
    let mut headers = HeaderMap::new();
    let key = HeaderValue::from_str(api_key)
        .map_err(|_| GenerationError::Configuration("API key is not a valid header value".into()))?;
    headers.insert("x-goog-api-key", key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    headers: HeaderMap,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// Fails before any network traffic when no credential is configured.
    pub fn new(client: Client, config: &Config) -> Result<Self, GenerationError> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            GenerationError::Configuration(
                "API_KEY is not configured. Please set GEMINI_API_KEY or API_KEY.".into(),
            )
        })?;

        Ok(Self {
            client,
            headers: build_headers(api_key)?,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.api_base.trim_end_matches('/'),
                config.model
            ),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<ImagePayload, GenerationError> {
        let body = build_generate_request(request);
        log::debug!(
            "Calling {} with a {} character prompt",
            self.model,
            request.prompt().len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(body) => body.error.message,
                Err(_) if text.is_empty() => format!("HTTP {}", status),
                Err(_) => text,
            };
            return Err(GenerationError::Transport(message));
        }

        let body = response.json::<GenerateContentResponse>().await?;
        extract_image(body)
    }
}
