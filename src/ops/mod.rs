//! High-level answer operations.
//!
//! This module provides the user-facing operations behind each subcommand:
//! rule answers, the deterministic corpus answer, the orchestrated remote
//! answers, corpus diagnostics, and the interactive session.

pub mod ask;
pub mod converse;
pub mod diagnostics;
pub mod orchestrator;
pub mod supervised;

// Re-export commonly used functions
pub use ask::answer_with_rules;
pub use converse::{run_conversation, start_conversation};
pub use diagnostics::{
    classify_question, corpus_info, messages_for_theme, validate_corpus_file, ClassifyReport,
    CorpusInfo, ThemeMessages,
};
pub use orchestrator::{AnswerMode, Orchestrator};
pub use supervised::build_supervised_answer;
