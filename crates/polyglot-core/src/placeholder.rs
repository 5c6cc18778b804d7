//! Placeholder guard — keeps `{name}`-style markers out of the translator's reach.
//!
//! Each distinct placeholder is swapped for an indexed sentinel
//! (`__PLACEHOLDER_0__`) before translation and swapped back afterwards.
//! Restoration relies on the backend returning sentinels untouched; a
//! sentinel the backend rewrites is left as-is in the output.

use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]+\}").expect("valid placeholder regex"));

/// Text with its placeholders replaced by sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protected {
    /// Text to send to the backend.
    pub text: String,
    /// `(sentinel, original)` pairs in order of first occurrence.
    pub slots: Vec<(String, String)>,
}

/// Sentinel for the `index`-th distinct placeholder.
fn sentinel(index: usize) -> String {
    format!("__PLACEHOLDER_{index}__")
}

/// Replace every placeholder in `text` with a sentinel.
pub fn protect(text: &str) -> Protected {
    let mut slots: Vec<(String, String)> = Vec::new();

    let protected = PLACEHOLDER_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        let original = &caps[0];
        if let Some((token, _)) = slots.iter().find(|(_, o)| o == original) {
            return token.clone();
        }
        let token = sentinel(slots.len());
        slots.push((token.clone(), original.to_string()));
        token
    });

    Protected {
        text: protected.into_owned(),
        slots,
    }
}

impl Protected {
    /// Whether any placeholder was found.
    pub fn has_placeholders(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Put the original placeholders back into `translated`.
    pub fn restore(&self, translated: &str) -> String {
        self.slots
            .iter()
            .fold(translated.to_string(), |acc, (token, original)| {
                acc.replace(token, original)
            })
    }
}
