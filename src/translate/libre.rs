//! LibreTranslate-compatible endpoint client
//!
//! One POST per call, source language auto-detected by the service. No
//! retries, no timeouts, no batching at this layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{Translate, TranslateError};

/// Translation endpoint configuration
#[derive(Clone, Debug)]
pub struct LibreTranslateConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for LibreTranslateConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("MAILDECK_TRANSLATE_URL")
                .unwrap_or_else(|_| "https://libretranslate.com/translate".to_string()),
            api_key: std::env::var("MAILDECK_TRANSLATE_API_KEY").ok(),
        }
    }
}

/// LibreTranslate client
pub struct LibreTranslateClient {
    config: LibreTranslateConfig,
    client: reqwest::Client,
}

impl LibreTranslateClient {
    pub fn new(config: LibreTranslateConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn request(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let body = TranslateRequest {
            q: text,
            source: "auto",
            target,
            format: "text",
            api_key: self.config.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::EndpointError(response.status()));
        }

        let parsed: TranslateResponse = response.json().await?;
        parsed
            .translated_text
            .ok_or(TranslateError::MissingTranslation)
    }
}

impl Default for LibreTranslateClient {
    fn default() -> Self {
        Self::new(LibreTranslateConfig::default())
    }
}

#[async_trait]
impl Translate for LibreTranslateClient {
    async fn translate(&self, text: &str, target: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match self.request(text, target).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!("Translation failed, keeping original text: {e}");
                text.to_string()
            }
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}
