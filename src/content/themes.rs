//! Theme keyword table and the substring classifier.
//!
//! Matching is plain `str::contains` on the lowercased question: no accent
//! folding, no word boundaries. A keyword embedded in a longer word still
//! matches ("solo" inside "consolo"), and that is the documented behavior.

use crate::constants::FALLBACK_THEME;

/// Ordered theme → trigger substrings. Order decides ties.
pub const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    ("paura", &["paura", "ansia", "angoscia", "timore", "preoccupazione"]),
    ("solitudine", &["solo", "solitudine", "abbandonato"]),
    ("colpa", &["colpa", "peccato", "sbagliato", "vergogna"]),
    ("tristezza", &["triste", "tristezza", "piangere", "lacrime"]),
    ("gioia", &["gioia", "felice", "ringraziare"]),
    ("amore", &["amore", "amare", "voler bene"]),
    ("fedeltà", &["fedeltà", "tradimento", "costanza"]),
    ("coraggio", &["coraggio", "forza", "affrontare"]),
    (
        "discernimento",
        &["discernere", "discernimento", "decisione", "volontà di dio"],
    ),
    ("pazienza", &["pazienza", "attendere", "sopportare"]),
    ("silenzio", &["silenzio", "tacere", "interiorità"]),
    ("speranza", &["speranza", "disperazione", "scoraggiamento"]),
    ("prova_sofferenza", &["sofferenza", "dolore", "prova", "croce"]),
    ("perdono", &["perdonare", "perdono", "misericordia"]),
    ("umiltà", &["umile", "umiltà", "orgoglio"]),
    ("gratitudine", &["grazie", "gratitudine", "riconoscenza"]),
    ("tentazione", &["tentazione", "tentato", "cadere"]),
    ("vocazione", &["vocazione", "chiamata", "volontà di dio"]),
];

/// Themes that receive a short prayer in the deterministic answer.
pub const DELICATE_THEMES: &[&str] = &[
    "paura",
    "solitudine",
    "colpa",
    "tristezza",
    "prova_sofferenza",
    "tentazione",
];

/// Classifies a question into a theme.
///
/// Returns the first theme, in table order, with any keyword contained in the
/// lowercased question, or `"generale"` when nothing matches.
///
/// # Examples
///
/// ```
/// use lucerna::content::classify_tema;
///
/// assert_eq!(classify_tema("Ho tanta paura"), "paura");
/// assert_eq!(classify_tema("ciao"), "generale");
/// ```
pub fn classify_tema(question: &str) -> &'static str {
    let q = question.to_lowercase();
    THEME_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&q, keywords))
        .map(|(tema, _)| *tema)
        .unwrap_or(FALLBACK_THEME)
}

/// Returns the keywords of a theme, if the theme is in the table.
pub fn keywords_for(tema: &str) -> Option<&'static [&'static str]> {
    THEME_KEYWORDS
        .iter()
        .find(|(name, _)| *name == tema)
        .map(|(_, keywords)| *keywords)
}

/// True when `tema` gets a prayer section.
pub fn is_delicate(tema: &str) -> bool {
    DELICATE_THEMES.contains(&tema)
}

/// True when any needle is a substring of `haystack`.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_simple_hit() {
        assert_eq!(classify_tema("ho tanta paura"), "paura");
        assert_eq!(classify_tema("Mi sento TRISTE stasera"), "tristezza");
    }

    #[test]
    fn test_classify_no_match_is_generale() {
        assert_eq!(classify_tema("ciao"), "generale");
        assert_eq!(classify_tema(""), "generale");
    }

    #[test]
    fn test_table_order_breaks_ties() {
        // "ansia" (paura) and "lacrime" (tristezza): paura comes first
        assert_eq!(classify_tema("lacrime e ansia"), "paura");
        // "volontà di dio" is listed under both; discernimento wins
        assert_eq!(classify_tema("Qual è la volontà di Dio?"), "discernimento");
    }

    #[test]
    fn test_embedded_substring_still_matches() {
        // "consolo" contains "solo"
        assert_eq!(classify_tema("mi consolo con poco"), "solitudine");
        // "approvare" contains "prova"
        assert_eq!(classify_tema("devo approvare un bilancio"), "prova_sofferenza");
    }

    #[test]
    fn test_no_accent_folding() {
        // the keyword is "fedeltà"; the unaccented spelling misses
        assert_eq!(classify_tema("fedelta"), "generale");
        assert_eq!(classify_tema("FEDELTÀ"), "fedeltà");
    }

    #[test]
    fn test_classified_theme_has_a_keyword_in_input() {
        let inputs = [
            "non riesco a perdonare mio fratello",
            "mi sento abbandonato",
            "ho bisogno di coraggio",
            "grazie Signore",
            "la mia vocazione",
            "una domanda qualunque",
        ];
        for input in inputs {
            let tema = classify_tema(input);
            let lowered = input.to_lowercase();
            match keywords_for(tema) {
                Some(keywords) => assert!(contains_any(&lowered, keywords), "{input}"),
                None => assert_eq!(tema, FALLBACK_THEME),
            }
        }
    }

    #[test]
    fn test_delicate_themes() {
        assert!(is_delicate("paura"));
        assert!(is_delicate("tentazione"));
        assert!(!is_delicate("gioia"));
        assert!(!is_delicate("generale"));
    }
}
