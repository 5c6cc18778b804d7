use super::*;
use crate::select::{choose_mode, resolve_targets};
use async_trait::async_trait;
use polyglot_core::traits::Provider;
use std::path::Path;
use std::sync::Mutex;

/// Records target codes and returns a tagged string.
#[derive(Default)]
struct RecordingProvider {
    targets: Mutex<Vec<String>>,
}

#[async_trait]
impl Provider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    fn requires_api_key(&self) -> bool {
        false
    }

    async fn translate(
        &self,
        text: &str,
        _source: &str,
        target: &str,
    ) -> Result<String, PolyglotError> {
        self.targets.lock().unwrap().push(target.to_string());
        Ok(format!("{target}:{text}"))
    }

    async fn is_available(&self) -> bool {
        true
    }
}

fn write_source(dir: &Path, json: &str) -> SourceConfig {
    std::fs::write(dir.join("ko.json"), json).unwrap();
    SourceConfig {
        dir: dir.to_string_lossy().into_owned(),
        locale: "ko".into(),
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_single_locale_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_source(tmp.path(), r#"{"greeting": "안녕", "farewell": ""}"#);
    let source = table::load(&cfg.source_file()).unwrap();

    let mode = choose_mode(Some("3".into()), Some("ja".into())).unwrap();
    let targets = resolve_targets(&mode, &cfg.locale).unwrap();

    let provider = RecordingProvider::default();
    let translator = Translator::new(&provider, &cfg.locale);
    let report = run(&source, &targets, &translator, &cfg).await;

    assert_eq!(report.succeeded, vec!["ja"]);
    assert!(report.failed.is_empty());
    assert_eq!(file_names(tmp.path()), vec!["ja.json", "ko.json"]);

    let out: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(tmp.path().join("ja.json")).unwrap())
            .unwrap();
    let obj = out.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj["greeting"], "ja:안녕");
    assert_eq!(obj["farewell"], "");
}

#[tokio::test]
async fn test_locale_codes_are_mapped_for_backend() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_source(tmp.path(), r#"{"a": "하나"}"#);
    let source = table::load(&cfg.source_file()).unwrap();
    let targets = vec![
        Target {
            locale: "he".into(),
            name: "Hebrew".into(),
        },
        Target {
            locale: "en-GB".into(),
            name: "English (UK)".into(),
        },
    ];

    let provider = RecordingProvider::default();
    let translator = Translator::new(&provider, "ko");
    run(&source, &targets, &translator, &cfg).await;

    assert_eq!(*provider.targets.lock().unwrap(), vec!["iw", "en"]);
    // Files are still named by locale code.
    assert!(tmp.path().join("he.json").exists());
    assert!(tmp.path().join("en-GB.json").exists());
}

#[tokio::test]
async fn test_failed_write_does_not_stop_batch() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_source(tmp.path(), r#"{"title": "제목", "body": "{n}개 남음"}"#);
    let source = table::load(&cfg.source_file()).unwrap();
    // A directory where ja.json should go makes that save fail.
    std::fs::create_dir(tmp.path().join("ja.json")).unwrap();

    let targets: Vec<Target> = ["en", "ja", "fr"]
        .iter()
        .map(|code| Target {
            locale: code.to_string(),
            name: code.to_string(),
        })
        .collect();

    let provider = RecordingProvider::default();
    let translator = Translator::new(&provider, "ko");
    let report = run(&source, &targets, &translator, &cfg).await;

    assert_eq!(report.succeeded, vec!["en", "fr"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "ja");
    assert_eq!(report.summary(), "Translation complete! 2 succeeded, 1 failed");

    let fr = table::load(&tmp.path().join("fr.json")).unwrap();
    assert_eq!(fr["body"], "fr:{n}개 남음");
    assert!(tmp.path().join("en.json").is_file());
}

#[tokio::test]
async fn test_rerun_overwrites_previous_output() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_source(tmp.path(), r#"{"k": "값"}"#);
    std::fs::write(tmp.path().join("de.json"), r#"{"stale": "old"}"#).unwrap();
    let source = table::load(&cfg.source_file()).unwrap();
    let targets = resolve_targets(&crate::select::TargetMode::Single("de".into()), "ko").unwrap();

    let provider = RecordingProvider::default();
    let translator = Translator::new(&provider, "ko");
    run(&source, &targets, &translator, &cfg).await;

    let de = table::load(&tmp.path().join("de.json")).unwrap();
    assert_eq!(de.len(), 1);
    assert_eq!(de["k"], "de:값");
}
