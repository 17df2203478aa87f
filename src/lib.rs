/*!
# Lucerna

Lucerna answers spiritual questions in Italian. A question is classified into a
theme by keyword, then answered from one of several sources: canned rules, a
deterministic composition over a themed corpus, or a remote chat-completion
model guided by biblical, saint and liturgical context.

## Core Features

- Keyword theme classification
- Rule answers, canned or with templated variation
- Deterministic multi-section answers built from the corpus
- Hybrid remote answers with a process-lifetime cache
- Contemplative remote answers passed through a quality filter
- Liturgy of the day from a weekly table or a remote calendar

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `content`: Theme table, quotations, rules and variation banks
- `corpus`: Corpus loading and validation
- `liturgy`: Liturgy of the day
- `ai`: Chat-completion client and prompts
- `filter`: Quality filter for generated text
- `cache`: Hybrid answer cache
- `ops`: Answer operations and the orchestrator

## Usage Example

```rust,no_run
use lucerna::ops::{AnswerMode, Orchestrator};
use lucerna::Config;

fn main() -> lucerna::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let orchestrator = Orchestrator::from_config(&config)?;
    let today = chrono::Local::now().date_naive();
    let record = orchestrator.answer("Ho tanta paura", AnswerMode::HYBRID, today);
    println!("{}", record.answer);
    Ok(())
}
```
*/

/// Chat-completion client and prompt builders
pub mod ai;
/// Answer records
pub mod answer;
/// Process-lifetime answer cache
pub mod cache;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Static theme, quotation, rule and variation tables
pub mod content;
/// Corpus loading and validation
pub mod corpus;
/// Error types and utilities for error handling
pub mod errors;
/// Quality filter for generated text
pub mod filter;
/// Liturgy of the day
pub mod liturgy;
/// High-level answer operations
pub mod ops;

// Re-export important types for convenience
pub use answer::{AnswerRecord, SpiritualAnswer};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use ops::{AnswerMode, Orchestrator};
