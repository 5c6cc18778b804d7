use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::PolyglotError;


/// Top-level polyglot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub polyglot: PolyglotConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyglotConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PolyglotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where the base string table lives.
///
/// Output files are written next to it as `<locale>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_dir")]
    pub dir: String,
    /// Locale code of the base table (also the source language).
    #[serde(default = "default_source_locale")]
    pub locale: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            locale: default_source_locale(),
        }
    }
}

impl SourceConfig {
    /// Directory holding the base table and all generated tables.
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(shellexpand(&self.dir))
    }

    /// Path of the base table, e.g. `assets/i18n/ko.json`.
    pub fn source_file(&self) -> PathBuf {
        self.output_file(&self.locale)
    }

    /// Path of the table for `locale` in the same directory.
    pub fn output_file(&self, locale: &str) -> PathBuf {
        self.dir_path().join(format!("{locale}.json"))
    }
}

/// Provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Backends to try at start-up, most preferred first.
    #[serde(default = "default_provider_order")]
    pub order: Vec<String>,
    #[serde(default, rename = "google-web")]
    pub google_web: Option<GoogleWebConfig>,
    #[serde(default, rename = "google-cloud")]
    pub google_cloud: Option<GoogleCloudConfig>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            order: default_provider_order(),
            google_web: None,
            google_cloud: None,
        }
    }
}

/// Keyless Google Translate web endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleWebConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_google_web_base_url")]
    pub base_url: String,
}

impl Default for GoogleWebConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_google_web_base_url(),
        }
    }
}

/// Google Cloud Translation v2 API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleCloudConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_google_cloud_base_url")]
    pub base_url: String,
}

impl Default for GoogleCloudConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            base_url: default_google_cloud_base_url(),
        }
    }
}

// --- Default value functions ---

fn default_log_level() -> String {
    "info".to_string()
}
fn default_source_dir() -> String {
    "assets/i18n".to_string()
}
fn default_source_locale() -> String {
    "ko".to_string()
}
fn default_provider_order() -> Vec<String> {
    vec!["google-web".into(), "google-cloud".into()]
}
fn default_true() -> bool {
    true
}
fn default_google_web_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}
fn default_google_cloud_base_url() -> String {
    "https://translation.googleapis.com".to_string()
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. Runs before logging
/// is set up, so the caller reports the fallback.
pub fn load(path: &str) -> Result<Config, PolyglotError> {
    let path = Path::new(path);
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| PolyglotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| PolyglotError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
