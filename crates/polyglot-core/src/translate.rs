//! Translation of single strings and whole string tables.

use tracing::{info, warn};

use crate::{locale, placeholder, table::StringTable, traits::Provider};

/// Outcome of translating one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The backend returned a translation.
    Translated(String),
    /// The backend failed; `text` is the untranslated input.
    Fallback { text: String, reason: String },
}

impl Translation {
    /// The text to store, translated or not.
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(text) | Self::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Wraps the active provider and never lets a backend failure escape.
pub struct Translator<'a> {
    provider: &'a dyn Provider,
    source_code: String,
}

impl<'a> Translator<'a> {
    /// `source_locale` is mapped through the locale table once, here.
    pub fn new(provider: &'a dyn Provider, source_locale: &str) -> Self {
        Self {
            provider,
            source_code: locale::external_code(source_locale).to_string(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Translate `text` into `target_code`, falling back to `text` on error.
    pub async fn translate(&self, text: &str, target_code: &str) -> Translation {
        match self
            .provider
            .translate(text, &self.source_code, target_code)
            .await
        {
            Ok(translated) => Translation::Translated(translated),
            Err(e) => {
                warn!("Translation error for '{text}' to {target_code}: {e}");
                Translation::Fallback {
                    text: text.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// A translated table with per-run counters.
#[derive(Debug, Clone, Default)]
pub struct TableTranslation {
    pub table: StringTable,
    /// Entries sent to the backend.
    pub translated: usize,
    /// Blank entries copied through.
    pub skipped: usize,
    /// Entries where the backend failed and the source text was kept.
    pub fallbacks: usize,
}

/// Emit a progress line every this many entries.
const PROGRESS_EVERY: usize = 10;

/// Progress line after `done` of `total` entries, on every tenth entry.
///
/// The percentage is rounded down.
pub fn progress_line(done: usize, total: usize) -> Option<String> {
    if done == 0 || total == 0 || done % PROGRESS_EVERY != 0 {
        return None;
    }
    Some(format!("Progress: {done}/{total} ({}%)", done * 100 / total))
}

/// Translate every value of `source` into `target_code`.
///
/// Blank values are copied without a backend call. The result has the same
/// keys in the same order as `source`.
pub async fn translate_table(
    source: &StringTable,
    target_code: &str,
    translator: &Translator<'_>,
) -> TableTranslation {
    let total = source.len();
    let mut out = TableTranslation {
        table: StringTable::with_capacity(total),
        ..Default::default()
    };

    for (idx, (key, value)) in source.iter().enumerate() {
        if value.trim().is_empty() {
            out.table.insert(key.clone(), value.clone());
            out.skipped += 1;
        } else {
            let protected = placeholder::protect(value);
            let result = translator.translate(&protected.text, target_code).await;
            if result.is_fallback() {
                out.fallbacks += 1;
            }
            let text = if protected.has_placeholders() {
                protected.restore(result.text())
            } else {
                result.text().to_string()
            };
            out.table.insert(key.clone(), text);
            out.translated += 1;
        }

        if let Some(line) = progress_line(idx + 1, total) {
            info!("  {line}");
        }
    }

    out
}
