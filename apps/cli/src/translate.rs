//! Sentence translation used when adding new items.

use reqwest::Client;
use serde_json::Value;
use std::future::Future;

/// Public Google Translate endpoint used when nothing else is configured.
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com";

/// Translation errors.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("Translation came back empty")]
    Empty,
}

/// Translates a sentence into a target language.
pub trait Translator {
    fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> impl Future<Output = Result<String, TranslateError>> + Send;
}

/// Client for the `translate_a/single` endpoint.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslateError> {
        let url = format!("{}/translate_a/single", self.base_url);
        tracing::debug!(%url, target_language, "requesting translation");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "translation request failed");
            return Err(TranslateError::Backend { status, message });
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| TranslateError::Parse(e.to_string()))?;
        parse_translation(&body)
    }
}

/// Extract the translated text from a `translate_a/single` response.
///
/// The body looks like `[[["Hola","Hello",...],["mundo","world",...]],null,"en"]`:
/// element 0 holds one entry per sentence segment, each starting with the
/// translated segment.
pub fn parse_translation(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Parse("missing segment list".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    let text = text.trim();
    if text.is_empty() {
        return Err(TranslateError::Empty);
    }
    Ok(text.to_string())
}
