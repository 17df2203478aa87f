//! Post-processing for AI-generated text.
//!
//! A best-effort sanitizer, not a validator. The citation guard fires on any
//! mention of a listed book when the expected source is missing, including
//! correct incidental mentions. Replacements are literal and applied in
//! order, so an earlier replacement's output can be matched by a later rule.

use crate::constants::{QUALITY_CITATION_CLOSING, QUALITY_MAX_CHARS};
use tracing::debug;

/// Book names whose presence triggers the citation guard.
pub const CITATION_BOOKS: &[&str] = &["Isaia", "Salmo", "Giovanni", "Marco", "Luca", "Corinzi"];

/// Clinical words replaced by `SOFTENED_PHRASE`.
pub const CLINICAL_WORDS: &[&str] = &[
    "ansia",
    "trauma",
    "terapia",
    "psicologico",
    "stress",
    "depressione",
];

pub const SOFTENED_PHRASE: &str = "fatica interiore";

/// Tone substitutions, applied in this order.
pub const TONE_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Dio ti aiuta", "Dio ti accompagna"),
    ("Dio ti sostiene", "Dio posa la Sua mano sul tuo cammino"),
    ("non sei solo", "non sei mai abbandonato"),
    ("paura", "timore che cerca luce"),
];

/// Cleans an AI answer.
///
/// `source` is the citation the answer is allowed to carry.
///
/// # Examples
///
/// ```
/// use lucerna::filter::quality_filter;
///
/// let text = "Dio ti aiuta. Come dice Luca, non temere.";
/// assert_eq!(quality_filter(text, "Isaia 41,10"), "Dio ti accompagna. Dio è vicino.");
/// ```
pub fn quality_filter(text: &str, source: &str) -> String {
    let mut text = text.to_string();

    if CITATION_BOOKS.iter().any(|book| text.contains(book)) && !text.contains(source) {
        debug!("Citation guard triggered");
        let first_sentence = text.split('.').next().unwrap_or_default();
        text = format!("{}.{}", first_sentence, QUALITY_CITATION_CLOSING);
    }

    if text.chars().count() > QUALITY_MAX_CHARS {
        debug!("Truncating answer to {} chars", QUALITY_MAX_CHARS);
        let head: String = text.chars().take(QUALITY_MAX_CHARS).collect();
        let kept = match head.rfind('.') {
            Some(pos) => &head[..pos],
            None => head.as_str(),
        };
        text = format!("{}.", kept);
    }

    let lowered = text.to_lowercase();
    for word in CLINICAL_WORDS {
        if lowered.contains(word) {
            text = text.replace(word, SOFTENED_PHRASE);
        }
    }

    for (from, to) in TONE_SUBSTITUTIONS {
        text = text.replace(from, to);
    }

    text
}
