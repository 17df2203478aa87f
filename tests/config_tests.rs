use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

use lucerna::config::Config;
use lucerna::errors::AppError;

const VARS: &[&str] = &[
    "GROQ_API_KEY",
    "GROQ_MODEL",
    "LUCERNA_API_URL",
    "LUCERNA_CORPUS",
    "LUCERNA_LITURGY_URL",
    "LUCERNA_REMOTE_LITURGY",
    "LUCERNA_TIMEOUT_SECS",
];

/// Runs `f` with the given variables set and every other config variable
/// removed, then restores the original environment.
fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let saved: Vec<(&str, Option<String>)> =
        VARS.iter().map(|name| (*name, env::var(name).ok())).collect();

    for name in VARS {
        env::remove_var(name);
    }
    for (name, value) in vars {
        env::set_var(name, value);
    }

    f();

    for (name, value) in saved {
        match value {
            Some(val) => env::set_var(name, val),
            None => env::remove_var(name),
        }
    }
}

#[test]
#[serial]
fn test_config_load_with_environment_vars() {
    let temp_dir = tempdir().unwrap();
    let corpus = temp_dir.path().join("corpus.json");
    let corpus_str = corpus.to_string_lossy().to_string();

    with_env(
        &[
            ("GROQ_API_KEY", " gsk_test "),
            ("GROQ_MODEL", "llama-test"),
            ("LUCERNA_API_URL", "http://localhost:9999/v1/chat/completions"),
            ("LUCERNA_CORPUS", &corpus_str),
            ("LUCERNA_REMOTE_LITURGY", "1"),
            ("LUCERNA_TIMEOUT_SECS", "5"),
        ],
        || {
            let config = Config::load().unwrap();
            assert_eq!(config.api_key.as_deref(), Some("gsk_test"));
            assert_eq!(config.model, "llama-test");
            assert_eq!(config.api_url, "http://localhost:9999/v1/chat/completions");
            assert_eq!(config.corpus_path, PathBuf::from(&corpus_str));
            assert!(config.remote_liturgy);
            assert_eq!(config.completion_timeout, Duration::from_secs(5));
            assert!(config.validate().is_ok());
        },
    );
}

#[test]
#[serial]
fn test_config_load_with_fallbacks() {
    with_env(&[], || {
        let config = Config::load().unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.corpus_path, PathBuf::from("corpus.json"));
        assert!(!config.remote_liturgy);
        assert!(config.validate().is_ok());
    });
}

#[test]
#[serial]
fn test_config_expands_home_in_corpus_path() {
    let original_home = env::var("HOME").ok();
    env::set_var("HOME", "/tmp/lucerna-home");

    with_env(&[("LUCERNA_CORPUS", "~/corpus.json")], || {
        let config = Config::load().unwrap();
        assert_eq!(config.corpus_path, PathBuf::from("/tmp/lucerna-home/corpus.json"));
    });

    match original_home {
        Some(val) => env::set_var("HOME", val),
        None => env::remove_var("HOME"),
    }
}

#[test]
#[serial]
fn test_config_validate_rejects_bad_liturgy_url() {
    with_env(&[("LUCERNA_LITURGY_URL", "calendario.local")], || {
        let config = Config::load().unwrap();
        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("Liturgy URL")),
            other => panic!("expected config error, got {:?}", other),
        }
    });
}

#[test]
#[serial]
fn test_config_debug_never_prints_key() {
    with_env(&[("GROQ_API_KEY", "gsk_supersecret")], || {
        let config = Config::load().unwrap();
        assert!(!format!("{:?}", config).contains("gsk_supersecret"));
    });
}
