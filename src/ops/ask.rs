//! Rule-based answers, canned or with templated variation.
//!
//! Never calls the remote model.

use crate::answer::AnswerRecord;
use crate::content::variations::{FALLBACK_COMMENTS, FALLBACK_PHRASES, FALLBACK_VERSES};
use crate::content::{bank_for, match_rule, Rule, VariationBank, FALLBACK_RULE};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

pub const VARIED_FALLBACK_SOURCE: &str = "Motore interno";
pub const VARIED_FALLBACK_EXPLANATION: &str = "Varietà sintetica";

/// How the picked pieces of a varied answer are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// phrase, verse, comment
    A,
    /// phrase, image, verse
    B,
    /// phrase, verse, promise, comment
    C,
}

impl Layout {
    fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Layout::A,
            1 => Layout::B,
            _ => Layout::C,
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Answers from the first matching rule.
///
/// With `vary` off the rule's canned text is returned. With `vary` on, rules
/// whose category has a variation bank get a randomly assembled answer and an
/// unmatched question gets a randomly assembled fallback.
///
/// # Examples
///
/// ```
/// use lucerna::ops::ask::answer_with_rules;
///
/// let record = answer_with_rules("Ho tanta paura per il futuro", false, &mut rand::thread_rng());
/// assert_eq!(record.answer, "Non temere, Dio è con te.");
/// assert_eq!(record.source, "Isaia 41,10");
/// ```
pub fn answer_with_rules<R: Rng + ?Sized>(question: &str, vary: bool, rng: &mut R) -> AnswerRecord {
    match match_rule(question) {
        Some(rule) => {
            debug!(category = rule.category, "Rule matched");
            match bank_for(rule.category).filter(|_| vary) {
                Some(bank) => varied_answer(rule, bank, rng),
                None => canned(rule),
            }
        }
        None if vary => varied_fallback(rng),
        None => canned(&FALLBACK_RULE),
    }
}

fn canned(rule: &Rule) -> AnswerRecord {
    AnswerRecord::new(rule.answer, rule.source, rule.explanation, rule.category)
}

fn varied_answer<R: Rng + ?Sized>(rule: &Rule, bank: &VariationBank, rng: &mut R) -> AnswerRecord {
    let phrase = pick(rng, bank.phrases);
    let image = pick(rng, bank.images);
    let promise = pick(rng, bank.promises);
    let comment = pick(rng, bank.comments);
    let verse = pick(rng, bank.verses);

    let answer = match Layout::pick(rng) {
        Layout::A => format!("{phrase}\n\n📖 {verse}\n{comment}"),
        Layout::B => format!("{phrase}\n{image}\n\n📖 {verse}"),
        Layout::C => format!("{phrase}\n\n📖 {verse}\n{promise}\n{comment}"),
    };

    AnswerRecord::new(answer, verse, comment, rule.category)
}

fn varied_fallback<R: Rng + ?Sized>(rng: &mut R) -> AnswerRecord {
    let answer = format!(
        "{}\n\n📖 {}\n{}",
        pick(rng, FALLBACK_PHRASES),
        pick(rng, FALLBACK_VERSES),
        pick(rng, FALLBACK_COMMENTS)
    );
    AnswerRecord::new(
        answer,
        VARIED_FALLBACK_SOURCE,
        VARIED_FALLBACK_EXPLANATION,
        FALLBACK_RULE.category,
    )
}
