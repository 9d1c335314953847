//! File-level round trip tests for answer documents.

use anyhow::Result;
use meridian_answers::{default_document, AnswerSet, SectionName};

#[test]
fn save_then_load_yields_identical_document() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("answers.json");

    let doc = default_document();
    doc.save(&path)?;

    let loaded = AnswerSet::load(&path)?;
    assert_eq!(loaded, doc);

    // Saving the loaded copy produces the same bytes.
    let copy = dir.path().join("answers_copy.json");
    loaded.save(&copy)?;
    assert_eq!(std::fs::read(&path)?, std::fs::read(&copy)?);
    Ok(())
}

#[test]
fn example_scenario_lookups() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("answers.json");
    default_document().save(&path)?;

    let doc = AnswerSet::load(&path)?;
    assert_eq!(doc.get(SectionName::Engine, "db_port"), Some("3306"));
    assert_eq!(
        doc.get(SectionName::Socket, "socket_bind_ipaddr"),
        Some("127.0.0.1")
    );
    Ok(())
}

#[test]
fn load_reports_missing_file() {
    let err = AnswerSet::load("/nonexistent/answers.json").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/answers.json"));
}

#[test]
fn load_rejects_legacy_loose_formatting() {
    // Trailing commas from the legacy artifact are defects, not behavior.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(
        &path,
        "{\"engine\": {\"db_port\": \"3306\",}, \"portal\": {}, \"client\": {}, \"socket\": {}}",
    )
    .unwrap();
    assert!(AnswerSet::load(&path).is_err());
}
