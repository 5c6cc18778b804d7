//! Provider factory — picks the first usable translation backend.

use polyglot_core::{config::ProviderConfig, traits::Provider};
use polyglot_providers::{google_cloud::GoogleCloudProvider, google_web::GoogleWebProvider};
use tracing::info;

/// Build the provider called `name` from its config section.
pub fn build_provider(cfg: &ProviderConfig, name: &str) -> anyhow::Result<Box<dyn Provider>> {
    match name {
        "google-web" => {
            let gc = cfg.google_web.clone().unwrap_or_default();
            Ok(Box::new(GoogleWebProvider::from_config(
                gc.enabled,
                gc.base_url,
            )))
        }
        "google-cloud" => {
            let gc = cfg.google_cloud.clone().unwrap_or_default();
            Ok(Box::new(GoogleCloudProvider::from_config(
                gc.enabled,
                gc.api_key,
                gc.base_url,
            )))
        }
        other => anyhow::bail!("unsupported provider: {other}"),
    }
}

/// Return the first available provider from `forced`, or from `cfg.order`.
///
/// Fails before any translation work when nothing is usable.
pub async fn select_provider(
    cfg: &ProviderConfig,
    forced: Option<&str>,
) -> anyhow::Result<Box<dyn Provider>> {
    let candidates: Vec<&str> = match forced {
        Some(name) => vec![name],
        None => cfg.order.iter().map(String::as_str).collect(),
    };

    for name in &candidates {
        let provider = build_provider(cfg, name)?;
        if provider.is_available().await {
            info!("using translation provider: {}", provider.name());
            return Ok(provider);
        }
        let hint = if provider.requires_api_key() {
            " (API key required)"
        } else {
            ""
        };
        info!("provider '{name}' is not available{hint}, trying next");
    }

    anyhow::bail!(
        "no translation provider available (tried: {}). Enable [provider.google-web] \
         or set an API key for google-cloud (POLYGLOT_GOOGLE_API_KEY).",
        candidates.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglot_core::config::{GoogleCloudConfig, GoogleWebConfig};

    fn web_disabled() -> Option<GoogleWebConfig> {
        Some(GoogleWebConfig {
            enabled: false,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_default_prefers_google_web() {
        let p = select_provider(&ProviderConfig::default(), None).await.unwrap();
        assert_eq!(p.name(), "google-web");
    }

    #[tokio::test]
    async fn test_falls_back_to_google_cloud() {
        let cfg = ProviderConfig {
            google_web: web_disabled(),
            google_cloud: Some(GoogleCloudConfig {
                api_key: "AIza-test".into(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let p = select_provider(&cfg, None).await.unwrap();
        assert_eq!(p.name(), "google-cloud");
    }

    #[tokio::test]
    async fn test_none_available_is_fatal() {
        let cfg = ProviderConfig {
            google_web: web_disabled(),
            ..Default::default()
        };
        let err = select_provider(&cfg, None).await.err().unwrap();
        let msg = err.to_string();
        assert!(msg.contains("no translation provider available"));
        assert!(msg.contains("google-web, google-cloud"));
    }

    #[tokio::test]
    async fn test_forced_provider_is_not_substituted() {
        let err = select_provider(&ProviderConfig::default(), Some("google-cloud"))
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("tried: google-cloud"));
    }

    #[test]
    fn test_unknown_provider_name() {
        let err = build_provider(&ProviderConfig::default(), "deepl").err().unwrap();
        assert!(err.to_string().contains("unsupported provider: deepl"));
    }
}
