use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

use test_helpers::base_lucerna_command;

#[test]
fn test_cli_no_subcommand() {
    base_lucerna_command().assert().failure();
}

#[test]
fn test_cli_ask_rule_answer() {
    base_lucerna_command()
        .args(["ask", "Ho tanta paura per il futuro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Non temere, Dio è con te."))
        .stdout(predicate::str::contains("Isaia 41,10"));
}

#[test]
fn test_cli_ask_fallback_json() {
    let output = base_lucerna_command()
        .args(["--json", "ask", "ciao"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["answer"], "Cerca prima il Regno di Dio.");
    assert_eq!(json["source"], "Matteo 6,33");
    assert_eq!(json["category"], "Generale");
    assert!(json["sourceLiturgical"].is_string());
}

#[test]
fn test_cli_ask_vary_succeeds() {
    base_lucerna_command()
        .args(["ask", "--vary", "ho paura"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📖"));
}

#[test]
fn test_cli_hybrid_without_key_uses_corpus() {
    base_lucerna_command()
        .args(["ask-hybrid", "ho tanta paura"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Isaia 41,10"))
        .stdout(predicate::str::contains("Accoglienza"));
}

#[test]
fn test_cli_supervised_no_data_theme() {
    let output = base_lucerna_command()
        .args(["--json", "supervised", "che gioia"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "Proverbi 3,5");
    assert_eq!(json["category"], "Generale");
}

#[test]
fn test_cli_messages_unknown_theme() {
    base_lucerna_command()
        .args(["--json", "messages", "gioia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tema non trovato"));
}

#[test]
fn test_cli_classify() {
    base_lucerna_command()
        .args(["classify", "ho tanta paura"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tema: paura"));
}

#[test]
fn test_cli_check_key_redacts() {
    base_lucerna_command()
        .env("GROQ_API_KEY", "gsk_supersecret")
        .arg("check-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("[REDACTED]"))
        .stdout(predicate::str::contains("gsk_supersecret").not());
}

#[test]
fn test_cli_check_key_missing() {
    base_lucerna_command()
        .arg("check-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("not configured"));
}

#[test]
fn test_cli_liturgy_weekly_for_date() {
    // 2026-10-19 is a Monday
    base_lucerna_command()
        .args(["--json", "--date", "2026-10-19", "liturgy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("versetto_chiave"));
}

#[test]
fn test_cli_invalid_date() {
    base_lucerna_command()
        .args(["--date", "not-a-date", "ask", "ciao"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_cli_missing_corpus_is_fatal() {
    let dir = tempdir().unwrap();
    base_lucerna_command()
        .env("LUCERNA_CORPUS", dir.path().join("missing.json"))
        .args(["ask", "ciao"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corpus file not found"));
}

#[test]
fn test_cli_validate_corpus() {
    base_lucerna_command()
        .arg("validate-corpus")
        .assert()
        .success()
        .stdout(predicate::str::contains("Corpus valido"));

    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"tema": "paura", "messaggio": "", "fonte": "x"}]"#).unwrap();

    base_lucerna_command()
        .arg("validate-corpus")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("entry 0: field 'messaggio' is empty"))
        .stdout(predicate::str::contains("entry 0: missing field 'nota'"));
}

#[test]
fn test_cli_corpus_info() {
    base_lucerna_command()
        .args(["--json", "corpus-info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"corpus_size\": 20"));
}

#[test]
fn test_cli_converse_answers_until_exit() {
    let output = base_lucerna_command()
        .arg("converse")
        .write_stdin("ho paura\nho paura\nesci\nho paura\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("📖 Isaia 41,10").count(), 2);
    assert!(stdout.contains("Pace e bene."));
}
