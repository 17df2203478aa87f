use crate::constants::{LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// An Italian spiritual companion answering from a corpus, rules and a remote model
#[derive(Parser, Debug)]
#[clap(name = "lucerna", about = "An Italian spiritual companion answering from a corpus, rules and a remote model")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// Log output format: "text" or "json"
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    /// Answer as of this date instead of today (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long, global = true)]
    pub date: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Full answer with a personal liturgical commentary
    Risposta {
        /// The question
        question: String,
    },

    /// Rule-based answer
    Ask {
        /// Assemble a varied answer instead of the canned one
        #[clap(long)]
        vary: bool,

        /// The question
        question: String,
    },

    /// Contemplative answer from the remote model
    #[clap(name = "ask-ai")]
    AskAi {
        /// The question
        question: String,
    },

    /// Doctrinally constrained hybrid answer
    #[clap(name = "ask-hybrid")]
    AskHybrid {
        /// The question
        question: String,
    },

    /// Deterministic answer built from the corpus
    Supervised {
        /// The question
        question: String,
    },

    /// Fuse the deterministic and contemplative answers
    Fuse {
        /// The question
        question: String,
    },

    /// List the corpus messages for a theme
    Messages {
        /// Theme name, e.g. "paura"
        tema: String,
    },

    /// Show the liturgy of the day
    Liturgy {
        /// Query the remote calendar instead of the weekly table
        #[clap(long)]
        remote: bool,

        /// Also generate a commentary on the reading
        #[clap(long)]
        commentary: bool,
    },

    /// Report whether an API key is configured
    #[clap(name = "check-key")]
    CheckKey,

    /// Show corpus size and first entry
    #[clap(name = "corpus-info")]
    CorpusInfo,

    /// Classify a question and list the matching messages
    Classify {
        /// The question
        question: String,
    },

    /// Check a corpus file for structural problems
    #[clap(name = "validate-corpus")]
    ValidateCorpus {
        /// Corpus file (defaults to the configured corpus)
        path: Option<PathBuf>,
    },

    /// Interactive session over hybrid answers
    Converse,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// Get the date if specified, parsing it into a NaiveDate
    pub fn parse_date(&self) -> Option<Result<NaiveDate, chrono::ParseError>> {
        self.date.as_ref().map(|date_str| {
            // Try parsing in YYYY-MM-DD format first
            NaiveDate::from_str(date_str)
                .or_else(|_| NaiveDate::parse_from_str(date_str, "%Y%m%d"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_default_flags() {
        let args = CliArgs::parse_from(vec!["lucerna", "check-key"]);
        assert!(!args.verbose);
        assert!(!args.json);
        assert_eq!(args.log_format, "text");
        assert!(args.date.is_none());
        assert_eq!(args.command, Commands::CheckKey);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(vec!["lucerna", "corpus-info", "--json", "-v"]);
        assert!(args.json);
        assert!(args.verbose);
        assert_eq!(args.command, Commands::CorpusInfo);
    }

    #[test]
    fn test_ask_vary() {
        let args = CliArgs::parse_from(vec!["lucerna", "ask", "--vary", "ho paura"]);
        assert_eq!(
            args.command,
            Commands::Ask {
                vary: true,
                question: "ho paura".to_string()
            }
        );

        let args = CliArgs::parse_from(vec!["lucerna", "ask", "ho paura"]);
        assert!(matches!(args.command, Commands::Ask { vary: false, .. }));
    }

    #[test]
    fn test_hyphenated_subcommands() {
        let args = CliArgs::parse_from(vec!["lucerna", "ask-hybrid", "q"]);
        assert!(matches!(args.command, Commands::AskHybrid { .. }));

        let args = CliArgs::parse_from(vec!["lucerna", "ask-ai", "q"]);
        assert!(matches!(args.command, Commands::AskAi { .. }));

        let args = CliArgs::parse_from(vec!["lucerna", "validate-corpus"]);
        assert_eq!(args.command, Commands::ValidateCorpus { path: None });
    }

    #[test]
    fn test_liturgy_flags() {
        let args = CliArgs::parse_from(vec!["lucerna", "liturgy", "--remote", "--commentary"]);
        assert_eq!(
            args.command,
            Commands::Liturgy {
                remote: true,
                commentary: true
            }
        );
    }

    #[test]
    fn test_log_format_rejects_unknown() {
        let result = CliArgs::try_parse_from(vec!["lucerna", "--log-format", "xml", "check-key"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliArgs::try_parse_from(vec!["lucerna"]).is_err());
    }

    #[test]
    fn test_parse_date() {
        let args = CliArgs::parse_from(vec!["lucerna", "--date", "2026-10-19", "check-key"]);
        let parsed_date = args.parse_date().unwrap().unwrap();
        assert_eq!(parsed_date.year(), 2026);
        assert_eq!(parsed_date.month(), 10);
        assert_eq!(parsed_date.day(), 19);

        let args = CliArgs::parse_from(vec!["lucerna", "-d", "20261019", "check-key"]);
        assert_eq!(args.parse_date().unwrap().unwrap(), parsed_date);

        let args = CliArgs::parse_from(vec!["lucerna", "--date", "not-a-date", "check-key"]);
        assert!(args.parse_date().unwrap().is_err());
    }
}
