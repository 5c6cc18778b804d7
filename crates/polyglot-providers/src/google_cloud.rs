//! Google Cloud Translation v2 API provider.
//!
//! Calls `language/translate/v2`. Auth via URL query param.

use async_trait::async_trait;
use polyglot_core::{error::PolyglotError, traits::Provider};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Google Cloud Translation provider.
pub struct GoogleCloudProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    enabled: bool,
}

impl GoogleCloudProvider {
    /// Create from config values.
    pub fn from_config(enabled: bool, api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            enabled,
        }
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: Option<TranslateData>,
}

#[derive(Deserialize)]
struct TranslateData {
    #[serde(default)]
    translations: Vec<TranslatedText>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
}

#[async_trait]
impl Provider for GoogleCloudProvider {
    fn name(&self) -> &str {
        "google-cloud"
    }

    fn requires_api_key(&self) -> bool {
        true
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, PolyglotError> {
        let body = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
        };

        let url = format!("{}/language/translate/v2", self.base_url.trim_end_matches('/'));
        debug!("google-cloud: POST language/translate/v2 source={source} target={target}");

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                PolyglotError::Provider(format!("google-cloud request failed: {}", e.without_url()))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(PolyglotError::Provider(format!(
                "google-cloud returned {status}: {text}"
            )));
        }

        let parsed: TranslateResponse = resp.json().await.map_err(|e| {
            PolyglotError::Provider(format!(
                "google-cloud: failed to parse response: {}",
                e.without_url()
            ))
        })?;

        parsed
            .data
            .and_then(|d| d.translations.into_iter().next())
            .map(|t| t.translated_text)
            .ok_or_else(|| PolyglotError::Provider("google-cloud: empty translations".into()))
    }

    async fn is_available(&self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.api_key.is_empty() {
            warn!("google-cloud: no API key configured");
            return false;
        }
        true
    }
}
