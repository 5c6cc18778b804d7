//! Target selection — which locales a run translates into.

use polyglot_core::locale;

/// How the operator picked target locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetMode {
    /// The curated set of widely used locales.
    Curated,
    /// Every known locale except the source.
    All,
    /// One operator-supplied locale.
    Single(String),
}

/// A locale to translate into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub locale: String,
    pub name: String,
}

impl Target {
    fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            name: locale::display_name(locale),
        }
    }
}

/// Decide the mode from the menu answer.
///
/// `choice` and `locale` are taken from the CLI when given, otherwise the
/// operator is prompted.
pub fn choose_mode(choice: Option<String>, locale: Option<String>) -> anyhow::Result<TargetMode> {
    let choice = match choice {
        Some(c) => c,
        None => prompt_choice()?,
    };

    match choice.trim() {
        "1" => Ok(TargetMode::Curated),
        "2" => Ok(TargetMode::All),
        "3" => {
            let code = match locale {
                Some(l) => l,
                None => prompt_locale()?,
            };
            Ok(TargetMode::Single(code.trim().to_string()))
        }
        other => anyhow::bail!("invalid choice: '{other}' (expected 1, 2 or 3)"),
    }
}

/// Expand a mode into the ordered list of targets.
///
/// The source locale is never a target, so its table is never overwritten.
pub fn resolve_targets(mode: &TargetMode, source_locale: &str) -> anyhow::Result<Vec<Target>> {
    let targets = match mode {
        TargetMode::Curated => locale::CURATED_LOCALES
            .iter()
            .map(|(code, _)| *code)
            .filter(|code| *code != source_locale)
            .map(Target::new)
            .collect(),
        TargetMode::All => locale::known_locales()
            .filter(|code| *code != source_locale)
            .map(Target::new)
            .collect(),
        TargetMode::Single(code) => {
            if !locale::is_known(code) {
                anyhow::bail!("unsupported locale code: {code}");
            }
            if code == source_locale {
                anyhow::bail!("{code} is the source locale");
            }
            vec![Target::new(code)]
        }
    };
    Ok(targets)
}

fn prompt_choice() -> anyhow::Result<String> {
    cliclack::note(
        "Select target languages",
        format!(
            "1. Curated {} languages\n2. All {} languages (slow)\n3. A single language",
            locale::CURATED_LOCALES.len(),
            locale::LOCALE_CODES.len() - 1
        ),
    )?;
    let choice: String = cliclack::input("Choice (1/2/3)")
        .placeholder("1")
        .interact()?;
    Ok(choice)
}

fn prompt_locale() -> anyhow::Result<String> {
    let code: String = cliclack::input("Locale code")
        .placeholder("e.g. ja, zh, es")
        .interact()?;
    Ok(code)
}
