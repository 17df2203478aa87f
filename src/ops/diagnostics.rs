//! Read-only views over the corpus and classifier.

use crate::content::classify_tema;
use crate::corpus::{self, Corpus, CorpusEntry};
use crate::errors::{AppResult, CorpusError};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

pub const THEME_NOT_FOUND: &str = "Tema non trovato";

/// Messages stored under one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ThemeMessages {
    Found {
        tema: String,
        messaggi: Vec<CorpusEntry>,
    },
    NotFound {
        errore: String,
        tema: String,
    },
}

/// All corpus messages for `tema`, or an error object when there are none.
pub fn messages_for_theme(corpus: &Corpus, tema: &str) -> ThemeMessages {
    let messaggi: Vec<CorpusEntry> = corpus
        .messages_by_theme(tema)
        .into_iter()
        .cloned()
        .collect();

    if messaggi.is_empty() {
        debug!("No messages for theme '{}'", tema);
        ThemeMessages::NotFound {
            errore: THEME_NOT_FOUND.to_string(),
            tema: tema.to_string(),
        }
    } else {
        ThemeMessages::Found {
            tema: tema.to_string(),
            messaggi,
        }
    }
}

/// Theme assigned to a question, with the messages it would draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifyReport {
    pub tema: String,
    pub messaggi: Vec<CorpusEntry>,
}

pub fn classify_question(corpus: &Corpus, question: &str) -> ClassifyReport {
    let tema = classify_tema(question);
    ClassifyReport {
        tema: tema.to_string(),
        messaggi: corpus.messages_by_theme(tema).into_iter().cloned().collect(),
    }
}

/// Size of the loaded corpus and its first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusInfo {
    pub corpus_size: usize,
    pub first_item: Option<CorpusEntry>,
}

pub fn corpus_info(corpus: &Corpus) -> CorpusInfo {
    CorpusInfo {
        corpus_size: corpus.len(),
        first_item: corpus.entries().first().cloned(),
    }
}

/// Checks a corpus file without loading it for answering.
///
/// Returns the list of structural issues; an empty list means the file is
/// valid.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not JSON.
pub fn validate_corpus_file(path: &Path) -> AppResult<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CorpusError::NotFound(path.to_path_buf())
        } else {
            CorpusError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(CorpusError::Parse)?;
    Ok(corpus::validate(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus() -> Corpus {
        Corpus::from_entries(vec![CorpusEntry {
            tema: "paura".to_string(),
            messaggio: "Non temere.".to_string(),
            fonte: "Isaia 41,10".to_string(),
            nota: "Dio è con te.".to_string(),
        }])
    }

    #[test]
    fn test_messages_found() {
        let json = serde_json::to_value(messages_for_theme(&corpus(), "paura")).unwrap();
        assert_eq!(json["tema"], "paura");
        assert_eq!(json["messaggi"][0]["fonte"], "Isaia 41,10");
    }

    #[test]
    fn test_messages_not_found_is_error_object() {
        let json = serde_json::to_value(messages_for_theme(&corpus(), "gioia")).unwrap();
        assert_eq!(json, serde_json::json!({"errore": "Tema non trovato", "tema": "gioia"}));
    }

    #[test]
    fn test_classify_question() {
        let report = classify_question(&corpus(), "ho tanta paura");
        assert_eq!(report.tema, "paura");
        assert_eq!(report.messaggi.len(), 1);

        let report = classify_question(&corpus(), "ciao");
        assert_eq!(report.tema, "generale");
        assert!(report.messaggi.is_empty());
    }

    #[test]
    fn test_corpus_info() {
        let info = corpus_info(&corpus());
        assert_eq!(info.corpus_size, 1);
        assert_eq!(info.first_item.unwrap().tema, "paura");

        assert!(corpus_info(&Corpus::default()).first_item.is_none());
    }

    #[test]
    fn test_validate_corpus_file_reports_issues() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"tema": "paura", "messaggio": "", "fonte": "x", "nota": "y"}}, 3]"#).unwrap();

        let issues = validate_corpus_file(file.path()).unwrap();
        assert_eq!(
            issues,
            vec![
                "entry 0: field 'messaggio' is empty".to_string(),
                "entry 1: not a JSON object".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_corpus_file_rejects_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[{{").unwrap();
        assert!(validate_corpus_file(file.path()).is_err());
    }
}
