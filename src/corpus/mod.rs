//! The spiritual corpus: themed messages loaded once from a JSON file.
//!
//! The file is an array of objects with the fields `tema`, `messaggio`, `fonte`
//! and `nota`, all required and non-empty. Loading fails on any violation; the
//! binary treats that as fatal.

use crate::errors::CorpusError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Fields every corpus entry must carry.
pub const REQUIRED_FIELDS: &[&str] = &["tema", "messaggio", "fonte", "nota"];

/// One themed message with its citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub tema: String,
    pub messaggio: String,
    pub fonte: String,
    pub nota: String,
}

/// Immutable list of corpus entries.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Builds a corpus from entries already in memory.
    pub fn from_entries(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    /// Loads and validates the corpus file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not JSON
    /// - The top level is not an array, or any entry is not an object or lacks
    ///   a non-empty required field
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        debug!("Loading corpus from {:?}", path);

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

        let corpus = Self::parse(&raw)?;
        info!("Corpus loaded: {} entries", corpus.len());
        Ok(corpus)
    }

    /// Parses and validates corpus JSON text.
    pub fn parse(raw: &str) -> Result<Self, CorpusError> {
        let value: Value = serde_json::from_str(raw)?;

        let issues = validate(&value);
        if !issues.is_empty() {
            return Err(CorpusError::Invalid(issues));
        }

        let entries: Vec<CorpusEntry> = serde_json::from_value(value)?;
        Ok(Self { entries })
    }

    /// All entries whose theme equals `tema` exactly, in file order.
    pub fn messages_by_theme(&self, tema: &str) -> Vec<&CorpusEntry> {
        self.entries.iter().filter(|entry| entry.tema == tema).collect()
    }

    /// First entry for `tema`, if any.
    pub fn first_for_theme(&self, tema: &str) -> Option<&CorpusEntry> {
        self.entries.iter().find(|entry| entry.tema == tema)
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lists every structural problem in a parsed corpus document.
///
/// An empty list means the document is a valid corpus.
///
/// # Examples
///
/// ```
/// use lucerna::corpus::validate;
/// use serde_json::json;
///
/// let issues = validate(&json!([{ "tema": "paura", "messaggio": "", "fonte": "Isaia 41,10" }]));
/// assert_eq!(issues.len(), 2);
/// ```
pub fn validate(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return vec!["the corpus must be a JSON array of objects".to_string()];
    };

    let mut issues = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            issues.push(format!("entry {}: not a JSON object", i));
            continue;
        };

        for field in REQUIRED_FIELDS {
            match object.get(*field) {
                None => issues.push(format!("entry {}: missing field '{}'", i, field)),
                Some(Value::String(s)) if s.trim().is_empty() => {
                    issues.push(format!("entry {}: field '{}' is empty", i, field))
                }
                Some(Value::String(_)) => {}
                Some(_) => issues.push(format!("entry {}: field '{}' is not a string", i, field)),
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Corpus {
        Corpus::parse(
            r#"[
                {"tema": "paura", "messaggio": "Non temere.", "fonte": "Isaia 41,10", "nota": "Dio è con te."},
                {"tema": "speranza", "messaggio": "Spera.", "fonte": "Romani 5,5", "nota": "Non delude."},
                {"tema": "paura", "messaggio": "Coraggio.", "fonte": "Salmo 27,1", "nota": "Luce."}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_exact_theme() {
        let corpus = sample();
        let paura = corpus.messages_by_theme("paura");
        assert_eq!(paura.len(), 2);
        assert_eq!(paura[0].fonte, "Isaia 41,10");
        assert!(corpus.messages_by_theme("Paura").is_empty());
    }

    #[test]
    fn test_first_for_theme_uses_file_order() {
        let corpus = sample();
        assert_eq!(corpus.first_for_theme("paura").unwrap().messaggio, "Non temere.");
        assert!(corpus.first_for_theme("gioia").is_none());
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let issues = validate(&json!([
            "testo",
            {"tema": "paura", "messaggio": "m", "fonte": "f"},
            {"tema": "", "messaggio": "m", "fonte": "f", "nota": 3}
        ]));
        assert_eq!(
            issues,
            vec![
                "entry 0: not a JSON object",
                "entry 1: missing field 'nota'",
                "entry 2: field 'tema' is empty",
                "entry 2: field 'nota' is not a string",
            ]
        );
    }

    #[test]
    fn test_validate_rejects_non_array() {
        assert_eq!(validate(&json!({"tema": "paura"})).len(), 1);
        assert!(validate(&json!([])).is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_corpus() {
        assert!(matches!(
            Corpus::parse(r#"[{"tema": "paura"}]"#),
            Err(CorpusError::Invalid(_))
        ));
        assert!(matches!(Corpus::parse("non json"), Err(CorpusError::Parse(_))));
    }
}
