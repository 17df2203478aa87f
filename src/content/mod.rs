//! Static content: theme table, quotations, rules and variation banks.
//!
//! Everything here is immutable data plus the substring matchers that read it.

pub mod quotes;
pub mod rules;
pub mod themes;
pub mod variations;

pub use quotes::{prayer_for, recupera_citazioni, Quotes};
pub use rules::{match_rule, Rule, FALLBACK_RULE, RULES};
pub use themes::{classify_tema, is_delicate, THEME_KEYWORDS};
pub use variations::{bank_for, VariationBank};
