//! Batch driver — translate the source table into each target and save it.

use polyglot_core::{
    config::SourceConfig,
    error::PolyglotError,
    locale, table,
    table::StringTable,
    translate::{translate_table, TableTranslation, Translator},
};
use tracing::error;

use crate::select::Target;

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    /// `(locale, error message)` for every locale that could not be saved.
    pub failed: Vec<(String, String)>,
}

impl BatchReport {
    /// Final one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Translation complete! {} succeeded, {} failed",
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

/// Translate `source` into every target, one locale at a time.
///
/// A failure for one locale is reported and the loop moves on.
pub async fn run(
    source: &StringTable,
    targets: &[Target],
    translator: &Translator<'_>,
    source_cfg: &SourceConfig,
) -> BatchReport {
    let mut report = BatchReport::default();

    println!(
        "\n🚀 Starting translation for {} languages via {}...",
        targets.len(),
        translator.provider_name()
    );

    for target in targets {
        match process_locale(source, target, translator, source_cfg).await {
            Ok(result) => {
                if result.fallbacks > 0 {
                    println!(
                        "⚠️  {}: {} of {} strings kept untranslated",
                        target.locale, result.fallbacks, result.translated
                    );
                }
                println!(
                    "✅ Saved: {}",
                    source_cfg.output_file(&target.locale).display()
                );
                report.succeeded.push(target.locale.clone());
            }
            Err(e) => {
                error!("locale {} failed: {e}", target.locale);
                println!("❌ Failed to translate {}: {e}", target.locale);
                report.failed.push((target.locale.clone(), e.to_string()));
            }
        }
    }

    println!("\n🎉 {}", report.summary());
    report
}

async fn process_locale(
    source: &StringTable,
    target: &Target,
    translator: &Translator<'_>,
    source_cfg: &SourceConfig,
) -> Result<TableTranslation, PolyglotError> {
    let code = locale::external_code(&target.locale);
    println!("\n🔄 Translating to {} ({})...", target.name, target.locale);

    let result = translate_table(source, code, translator).await;
    table::save(&source_cfg.output_file(&target.locale), &result.table)?;
    Ok(result)
}

#[cfg(test)]
mod tests;
