use async_trait::async_trait;
use scanner_logging::{scanner_debug, scanner_error};
use serde::{Deserialize, Serialize};

use crate::prompt::ANALYSIS_PROMPT;
use crate::types::{
    AnalysisOutcome, AnalyzeError, AnalyzeFailureKind, IngredientEntry, LoadedImage,
};

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Banner text when the endpoint reports an empty list without its own
/// message.
const NO_INGREDIENTS_FALLBACK: &str = "No ingredient list found";

#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    /// Overridable so tests can point the client at a mock server.
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    /// Deployment credential, sent as `x-api-key`.
    pub api_key: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: "claude-sonnet-4-5".to_string(),
            max_tokens: 1024,
            api_key: String::new(),
        }
    }
}

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, image: &LoadedImage) -> Result<AnalysisOutcome, AnalyzeError>;
}

/// The real analyzer: one POST to the vision completion endpoint per call.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    settings: AnalysisSettings,
    client: reqwest::Client,
}

impl HttpAnalyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        // No total-request deadline: the screen stays in Analyzing until
        // the endpoint answers.
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Image { source: ImageSource<'a> },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
struct ImageSource<'a> {
    #[serde(rename = "type")]
    source_type: &'a str,
    media_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(rename = "type")]
    part_type: String,
    #[serde(default)]
    text: Option<String>,
}

/// The two-shape wire schema: a populated list, or an empty list with an
/// explanatory message.
#[derive(Debug, Deserialize)]
struct IngredientsPayload {
    ingredients: Vec<IngredientWire>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IngredientWire {
    name: String,
    explanation: String,
}

#[async_trait]
impl Analyzer for HttpAnalyzer {
    async fn analyze(&self, image: &LoadedImage) -> Result<AnalysisOutcome, AnalyzeError> {
        let request = CompletionRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            messages: vec![RequestMessage {
                role: "user",
                content: vec![
                    ContentPart::Image {
                        source: ImageSource {
                            source_type: "base64",
                            media_type: &image.media_type,
                            data: base64_payload(&image.encoded),
                        },
                    },
                    ContentPart::Text {
                        text: ANALYSIS_PROMPT,
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(&self.settings.endpoint)
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                scanner_error!("analysis request failed to send: {err}");
                AnalyzeError::new(AnalyzeFailureKind::Network, err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            scanner_error!("analysis endpoint returned {status}: {body}");
            return Err(AnalyzeError::new(
                AnalyzeFailureKind::HttpStatus(status.as_u16()),
                body,
            ));
        }

        let completion: CompletionResponse = response.json().await.map_err(|err| {
            scanner_error!("analysis response body did not parse: {err}");
            AnalyzeError::new(AnalyzeFailureKind::MalformedJson, err.to_string())
        })?;

        let text = completion
            .content
            .iter()
            .find(|part| part.part_type == "text")
            .and_then(|part| part.text.as_deref())
            .ok_or_else(|| {
                scanner_error!("analysis response carried no text content part");
                AnalyzeError::new(
                    AnalyzeFailureKind::MissingTextPart,
                    "no text content part in response",
                )
            })?;

        scanner_debug!("analysis answer text: {text}");
        parse_outcome(text)
    }
}

/// Decodes the model's text answer: strips surrounding code fences, parses
/// the two-shape schema, and normalizes it into the tagged outcome.
pub fn parse_outcome(text: &str) -> Result<AnalysisOutcome, AnalyzeError> {
    let json = strip_code_fences(text);
    let payload: IngredientsPayload = serde_json::from_str(json).map_err(|err| {
        scanner_error!("analysis answer is not the expected JSON: {err}");
        AnalyzeError::new(AnalyzeFailureKind::MalformedJson, err.to_string())
    })?;

    if payload.ingredients.is_empty() {
        return Ok(AnalysisOutcome::NoIngredients {
            message: payload
                .message
                .unwrap_or_else(|| NO_INGREDIENTS_FALLBACK.to_string()),
        });
    }

    Ok(AnalysisOutcome::Ingredients(
        payload
            .ingredients
            .into_iter()
            .map(|entry| IngredientEntry {
                name: entry.name,
                explanation: entry.explanation,
            })
            .collect(),
    ))
}

/// Models sometimes wrap the JSON in ``` or ```json fences despite the
/// prompt; the payload inside is what gets parsed.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Drops the `data:<media type>;base64,` transport wrapper, leaving the
/// raw base64 payload the endpoint expects.
fn base64_payload(encoded: &str) -> &str {
    encoded
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .unwrap_or(encoded)
}
