//! Objective generation through the OpenAI chat completions API

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::AppConfig;

const SYSTEM_PROMPT: &str = "Você é um assistente que escreve currículos profissionais em português.";
const MAX_TOKENS: u32 = 200;

#[derive(Debug, Error)]
pub enum ObjectiveError {
    #[error("Job title is empty")]
    EmptyTitle,

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("OpenAI API key is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("API returned empty content")]
    EmptyContent,
}

impl IntoResponse for ObjectiveError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ObjectiveError::EmptyTitle => (
                StatusCode::BAD_REQUEST,
                "Informe o título para gerar o objetivo.",
            ),
            ObjectiveError::InvalidRequest(reason) => {
                warn!("Rejected objective request: {}", reason);
                (
                    StatusCode::BAD_REQUEST,
                    "Envie um JSON com o campo \"titulo\".",
                )
            }
            ObjectiveError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Geração de objetivo indisponível.",
            ),
            ObjectiveError::Http(_) | ObjectiveError::Api { .. } | ObjectiveError::EmptyContent => {
                error!("Objective generation failed: {}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    "Não foi possível gerar o objetivo. Tente novamente.",
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Writes a résumé objective for a job title
#[async_trait]
pub trait ObjectiveGenerator: Send + Sync {
    async fn generate(&self, title: &str) -> Result<String, ObjectiveError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn objective(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn objective_prompt(title: &str) -> String {
    format!(
        "Escreva um objetivo profissional curto, em português, para um currículo \
         com o título \"{}\". Responda apenas com o texto do objetivo.",
        title
    )
}

/// Client for `POST {base_url}/chat/completions`
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.openai_timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        let api_key = config
            .openai_api_key
            .clone()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("CURRICULO_OPENAI_API_KEY is not set, objective generation is disabled");
        }

        Ok(Self {
            client,
            api_key,
            model: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ObjectiveGenerator for OpenAiClient {
    async fn generate(&self, title: &str) -> Result<String, ObjectiveError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ObjectiveError::EmptyTitle);
        }
        let api_key = self.api_key.as_deref().ok_or(ObjectiveError::NotConfigured)?;

        let prompt = objective_prompt(title);
        let request_body = ChatRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ObjectiveError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let objective = chat.objective().ok_or(ObjectiveError::EmptyContent)?;
        debug!("Generated objective for title '{}'", title);

        Ok(objective)
    }
}
