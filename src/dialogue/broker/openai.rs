//! OpenAI-backed dialogue broker over the blocking chat completions API.
use reqwest::{
    blocking::Client,
    header::{HeaderMap, RETRY_AFTER},
    StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::dialogue::{
    errors::{DialogueError, DialogueErrorKind},
    prompt,
    types::{DialogueRequest, DialogueResponse},
};

use super::{
    config::{OpenAiConfig, OpenAiConfigError},
    DialogueBroker, DialogueProviderKind,
};

const DEFAULT_RATE_LIMIT_BACKOFF: f32 = 10.0;
const SYSTEM_ROLE: &str = "system";
const USER_ROLE: &str = "user";

/// Synchronous OpenAI chat client implementing [`DialogueBroker`].
pub struct OpenAiDialogueBroker {
    http: Client,
    config: OpenAiConfig,
}

impl OpenAiDialogueBroker {
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiConfigError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| OpenAiConfigError::ClientBuild(err.to_string()))?;

        Ok(Self { http, config })
    }

    fn send(&self, request: &DialogueRequest<'_>) -> Result<String, DialogueErrorKind> {
        let payload = ChatCompletionRequest {
            model: self.config.model.as_str(),
            messages: build_messages(request),
            max_tokens: Some(self.config.max_output_tokens.into()),
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(self.config.chat_url())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .map_err(|err| DialogueErrorKind::provider_failure(err.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = parse_retry_after(&headers).unwrap_or(DEFAULT_RATE_LIMIT_BACKOFF);
            return Err(DialogueErrorKind::rate_limited(retry_after));
        }

        if !status.is_success() {
            if let Ok(body) = response.json::<OpenAiErrorResponse>() {
                let message = format!(
                    "{} (type: {}, code: {:?})",
                    body.error.message, body.error.error_type, body.error.code
                );
                return Err(DialogueErrorKind::provider_failure(message));
            }

            return Err(DialogueErrorKind::provider_failure(format!(
                "HTTP {} from OpenAI",
                status
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .map_err(|err| DialogueErrorKind::provider_failure(err.to_string()))?;

        completion
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(DialogueErrorKind::EmptyCompletion)
    }
}

impl DialogueBroker for OpenAiDialogueBroker {
    fn provider_kind(&self) -> DialogueProviderKind {
        DialogueProviderKind::OpenAi
    }

    fn process(&self, request: &DialogueRequest<'_>) -> Result<DialogueResponse, DialogueError> {
        self.send(request)
            .map(|content| DialogueResponse::new(self.provider_kind(), content))
            .map_err(|kind| DialogueError::new(self.provider_kind(), kind))
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<f32> {
    headers.get(RETRY_AFTER).and_then(|value| {
        value
            .to_str()
            .ok()
            .and_then(|text| text.parse::<f32>().ok())
    })
}

fn build_messages(request: &DialogueRequest<'_>) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: SYSTEM_ROLE,
            content: prompt::system_prompt(request.persona, request.mood),
        },
        ChatMessage {
            role: USER_ROLE,
            content: prompt::user_message(&request.context),
        },
    ]
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(rename = "max_tokens")]
    max_tokens: Option<u32>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: String,
    code: Option<String>,
}
