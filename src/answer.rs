//! Answer records returned by every operation.

use serde::{Deserialize, Serialize};

/// Answer text plus citation metadata. This is what the hybrid cache stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub answer: String,
    pub source: String,
    pub explanation: String,
    pub category: String,
}

impl AnswerRecord {
    pub fn new(
        answer: impl Into<String>,
        source: impl Into<String>,
        explanation: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            source: source.into(),
            explanation: explanation.into(),
            category: category.into(),
        }
    }

    /// Attaches the day's key verse, producing the outward answer shape.
    pub fn with_liturgical(self, source_liturgical: Option<String>) -> SpiritualAnswer {
        SpiritualAnswer {
            record: self,
            source_liturgical,
        }
    }
}

/// The externally visible answer.
///
/// Serializes flat: `answer`, `source`, `explanation`, `category`,
/// `sourceLiturgical`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritualAnswer {
    #[serde(flatten)]
    pub record: AnswerRecord,
    #[serde(rename = "sourceLiturgical")]
    pub source_liturgical: Option<String>,
}

impl SpiritualAnswer {
    pub fn answer(&self) -> &str {
        &self.record.answer
    }

    pub fn source(&self) -> &str {
        &self.record.source
    }

    pub fn category(&self) -> &str {
        &self.record.category
    }
}

impl From<AnswerRecord> for SpiritualAnswer {
    fn from(record: AnswerRecord) -> Self {
        record.with_liturgical(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flat_with_original_field_names() {
        let answer = AnswerRecord::new("Pace.", "Giovanni 14,27", "Dono di Cristo.", "Pace")
            .with_liturgical(Some("Io sono la via".to_string()));

        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["answer"], "Pace.");
        assert_eq!(json["category"], "Pace");
        assert_eq!(json["sourceLiturgical"], "Io sono la via");
        assert!(json.get("record").is_none());
    }

    #[test]
    fn test_missing_liturgical_serializes_null() {
        let answer: SpiritualAnswer = AnswerRecord::new("a", "s", "e", "c").into();
        let json = serde_json::to_value(&answer).unwrap();
        assert!(json["sourceLiturgical"].is_null());
    }
}
