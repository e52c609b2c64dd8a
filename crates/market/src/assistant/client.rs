//! HTTP client for the hosted-model Messages API.

use std::fmt::Write as _;
use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::{instrument, warn};

use crate::config::AssistantConfig;
use crate::models::Product;

use super::FALLBACK_REPLY;
use super::error::{ApiErrorResponse, AssistantError};
use super::types::{ChatRequest, ChatResponse, Message};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Client for the hosted-model Messages API.
#[derive(Clone)]
pub struct AssistantClient {
    inner: Arc<AssistantClientInner>,
}

struct AssistantClientInner {
    client: reqwest::Client,
    model: String,
    api_url: String,
}

impl AssistantClient {
    /// Create a new assistant client against the hosted endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &AssistantConfig) -> Self {
        Self::with_api_url(config, API_URL.to_string())
    }

    /// Create a client against an explicit endpoint. Tests point this at
    /// an unreachable address to exercise the failure path.
    fn with_api_url(config: &AssistantConfig, api_url: String) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(AssistantClientInner {
                client,
                model: config.model.clone(),
                api_url,
            }),
        }
    }

    /// Send a chat request and return the text of the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails, returns an error
    /// response, or produces no text.
    #[instrument(skip(self, messages, system), fields(model = %self.inner.model))]
    pub async fn chat(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
    ) -> Result<String, AssistantError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            messages,
            system,
        };

        let response = self
            .inner
            .client
            .post(&self.inner.api_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_body(response).await);
        }

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AssistantError::Parse(format!("Failed to parse response: {e}")))?;

        let text = parsed.text();
        if text.is_empty() {
            return Err(AssistantError::Empty);
        }
        Ok(text)
    }

    /// Answer a buyer's question grounded in the current catalog.
    ///
    /// Never fails: any error is logged and collapsed to
    /// [`FALLBACK_REPLY`] so the storefront keeps working without the
    /// assistant.
    #[instrument(skip(self, question, products))]
    pub async fn advise(&self, question: &str, products: &[Product]) -> String {
        let system = system_prompt(products);
        match self.chat(vec![Message::user(question)], Some(system)).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "assistant request failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

/// Build the grounding prompt from the live catalog.
fn system_prompt(products: &[Product]) -> String {
    let mut prompt = String::from(
        "You are a friendly shopping assistant for Estee Wholesales, a bulk \
         foodstuff store in Nigeria. Help customers pick products and \
         quantities for their needs. Keep answers short and practical. \
         Only recommend products from the current price list:\n",
    );
    for product in products {
        let _ = write!(prompt, "- {} ({}):", product.name, product.category);
        for unit in &product.supported_units {
            if let Some(price) = product.unit_price(*unit) {
                let _ = write!(prompt, " {price} per {unit};");
            }
        }
        prompt.push('\n');
    }
    prompt
}

async fn error_from_body(response: reqwest::Response) -> AssistantError {
    match response.text().await {
        Ok(body) => {
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                AssistantError::Api {
                    error_type: api_error.error.error_type,
                    message: api_error.error.message,
                }
            } else {
                AssistantError::Api {
                    error_type: "unknown".to_string(),
                    message: body,
                }
            }
        }
        Err(e) => AssistantError::Http(e),
    }
}
