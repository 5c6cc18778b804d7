//! Keyless Google Translate web endpoint.
//!
//! Calls `translate_a/single` with `client=gtx`. The response is a nested
//! JSON array whose first element holds one `[translated, original, ...]`
//! segment per sentence.

use async_trait::async_trait;
use polyglot_core::{error::PolyglotError, traits::Provider};
use serde_json::Value;
use tracing::debug;

/// Google Translate web provider. No API key required.
pub struct GoogleWebProvider {
    client: reqwest::Client,
    base_url: String,
    enabled: bool,
}

impl GoogleWebProvider {
    /// Create from config values.
    pub fn from_config(enabled: bool, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            enabled,
        }
    }
}

/// Join the translated segments of a `translate_a/single` response.
fn parse_segments(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let parts: Vec<&str> = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

#[async_trait]
impl Provider for GoogleWebProvider {
    fn name(&self) -> &str {
        "google-web"
    }

    fn requires_api_key(&self) -> bool {
        false
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, PolyglotError> {
        let url = format!("{}/translate_a/single", self.base_url.trim_end_matches('/'));
        debug!("google-web: GET translate_a/single sl={source} tl={target}");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| PolyglotError::Provider(format!("google-web request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(PolyglotError::Provider(format!(
                "google-web returned {status}: {body}"
            )));
        }

        let body: Value = resp.json().await.map_err(|e| {
            PolyglotError::Provider(format!("google-web: failed to parse response: {e}"))
        })?;

        parse_segments(&body).ok_or_else(|| {
            PolyglotError::Provider("google-web: response has no translation segments".into())
        })
    }

    async fn is_available(&self) -> bool {
        self.enabled
    }
}
