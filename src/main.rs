/*!
# Lucerna

Command-line entry point. Each subcommand maps to one answer operation; results
are printed as text, or as JSON with `--json`. Logs go to stderr.

## Usage

```
lucerna [OPTIONS] <COMMAND>

Commands:
  risposta         Full answer with a personal liturgical commentary
  ask              Rule-based answer
  ask-ai           Contemplative answer from the remote model
  ask-hybrid       Doctrinally constrained hybrid answer
  supervised       Deterministic answer built from the corpus
  fuse             Fuse the deterministic and contemplative answers
  messages         List the corpus messages for a theme
  liturgy          Show the liturgy of the day
  check-key        Report whether an API key is configured
  corpus-info      Show corpus size and first entry
  classify         Classify a question and list the matching messages
  validate-corpus  Check a corpus file for structural problems
  converse         Interactive session over hybrid answers

Options:
  -v, --verbose                 Print verbose output
      --json                    Print results as JSON
      --log-format <LOG_FORMAT> Log output format: "text" or "json"
  -d, --date <DATE>             Answer as of this date instead of today
```

## Configuration

See the `config` module; a `.env` file in the working directory is loaded first.
*/

use chrono::{Local, NaiveDate};
use lucerna::answer::{AnswerRecord, SpiritualAnswer};
use lucerna::cli::{CliArgs, Commands};
use lucerna::config::Config;
use lucerna::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, REDACTED_PLACEHOLDER, TRACING_ROOT_SPAN_NAME,
    TRACING_SERVICE_NAME,
};
use lucerna::errors::{AppError, AppResult, CorpusError};
use lucerna::liturgy::LiturgicalDay;
use lucerna::ops::{self, Orchestrator, ThemeMessages};
use serde::Serialize;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// The main entry point for the lucerna application.
///
/// This function coordinates the overall application flow:
/// 1. Loads a `.env` file if present
/// 2. Parses command-line arguments
/// 3. Initializes logging
/// 4. Runs the subcommand inside a root span carrying an invocation id
///
/// Any error is reported on stderr and the process exits with status 1.
fn main() {
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let args = CliArgs::parse();
    init_tracing(args.verbose, &args.log_format);

    let invocation_id = Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        invocation_id = %invocation_id,
    );
    let _guard = span.enter();

    debug!(dotenv_loaded, "CLI arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool, log_format: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr);

    if log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    let date = resolve_date(&args)?;

    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let json = args.json;
    let orchestrator = || Orchestrator::from_config(&config);

    match args.command {
        Commands::CheckKey => check_key(&config, json),
        Commands::ValidateCorpus { path } => {
            validate_corpus(&path.unwrap_or_else(|| config.corpus_path.clone()), json)
        }
        Commands::Liturgy { remote, commentary } => {
            let mut config = config.clone();
            config.remote_liturgy |= remote;
            liturgy(&Orchestrator::from_config(&config)?, date, commentary, json)
        }
        Commands::Risposta { question } => {
            print_answer(&orchestrator()?.risposta(&question, date), json)
        }
        Commands::Ask { vary, question } => {
            let answer = orchestrator()?.ask(&question, vary, &mut rand::thread_rng(), date);
            print_answer(&answer, json)
        }
        Commands::AskAi { question } => print_answer(&orchestrator()?.ask_ai(&question, date), json),
        Commands::AskHybrid { question } => {
            print_answer(&orchestrator()?.ask_hybrid(&question, date), json)
        }
        Commands::Supervised { question } => {
            print_record(&orchestrator()?.supervised(&question), json)
        }
        Commands::Fuse { question } => print_record(&orchestrator()?.fuse(&question, date), json),
        Commands::Messages { tema } => {
            let messages = ops::messages_for_theme(orchestrator()?.corpus(), &tema);
            emit(json, &messages, || match &messages {
                ThemeMessages::Found { tema, messaggi } => {
                    let mut text = format!("Tema: {}\n", tema);
                    for entry in messaggi {
                        text.push_str(&format!("\n• {}\n  📖 {} ({})\n", entry.messaggio, entry.fonte, entry.nota));
                    }
                    text
                }
                ThemeMessages::NotFound { errore, tema } => format!("{}: {}", errore, tema),
            })
        }
        Commands::CorpusInfo => {
            let info = ops::corpus_info(orchestrator()?.corpus());
            emit(json, &info, || match &info.first_item {
                Some(first) => format!(
                    "Voci nel corpus: {}\nPrima voce: [{}] {} ({})",
                    info.corpus_size, first.tema, first.messaggio, first.fonte
                ),
                None => format!("Voci nel corpus: {}", info.corpus_size),
            })
        }
        Commands::Classify { question } => {
            let report = ops::classify_question(orchestrator()?.corpus(), &question);
            emit(json, &report, || {
                format!("Tema: {}\nMessaggi: {}", report.tema, report.messaggi.len())
            })
        }
        Commands::Converse => ops::start_conversation(&orchestrator()?, date),
    }
}

fn resolve_date(args: &CliArgs) -> AppResult<NaiveDate> {
    match args.parse_date() {
        Some(parsed) => {
            parsed.map_err(|e| AppError::Config(format!("Invalid date format: {}", e)))
        }
        None => Ok(Local::now().date_naive()),
    }
}

#[derive(Serialize)]
struct KeyStatus {
    groq_key: Option<&'static str>,
}

fn check_key(config: &Config, json: bool) -> AppResult<()> {
    let status = KeyStatus {
        groq_key: config.has_api_key().then_some(REDACTED_PLACEHOLDER),
    };
    emit(json, &status, || match status.groq_key {
        Some(redacted) => format!("GROQ_API_KEY: {}", redacted),
        None => "GROQ_API_KEY: not configured".to_string(),
    })
}

fn validate_corpus(path: &std::path::Path, json: bool) -> AppResult<()> {
    let issues = ops::validate_corpus_file(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else if issues.is_empty() {
        println!("✅ Corpus valido: nessun errore trovato ({}).", path.display());
    } else {
        for issue in &issues {
            println!("❌ {}", issue);
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CorpusError::Invalid(issues).into())
    }
}

#[derive(Serialize)]
struct LiturgyReport {
    #[serde(flatten)]
    day: LiturgicalDay,
    #[serde(rename = "commento", skip_serializing_if = "Option::is_none")]
    commentary: Option<String>,
}

fn liturgy(orchestrator: &Orchestrator, date: NaiveDate, commentary: bool, json: bool) -> AppResult<()> {
    let day = orchestrator.liturgical_day(date);
    let commentary = commentary.then(|| orchestrator.commentary(&day, None));
    let report = LiturgyReport { day, commentary };

    emit(json, &report, || {
        let day = &report.day;
        let mut text = format!(
            "{}\nTema: {}\nVersetto chiave: {}\nPrima lettura: {}\nSalmo: {}\nVangelo: {}",
            date.format("%d/%m/%Y"),
            day.theme,
            day.key_verse,
            day.first_reading,
            day.psalm,
            day.gospel
        );
        if let Some(color) = &day.color {
            text.push_str(&format!("\nColore liturgico: {}", color));
        }
        if let Some(commentary) = &report.commentary {
            text.push_str(&format!("\n\n{}", commentary));
        }
        text
    })
}

fn print_answer(answer: &SpiritualAnswer, json: bool) -> AppResult<()> {
    emit(json, answer, || {
        let mut text = record_text(&answer.record);
        if let Some(verse) = &answer.source_liturgical {
            text.push_str(&format!("\n✝️ {}", verse));
        }
        text
    })
}

fn print_record(record: &AnswerRecord, json: bool) -> AppResult<()> {
    emit(json, record, || record_text(record))
}

fn record_text(record: &AnswerRecord) -> String {
    let mut text = format!("{}\n\n📖 {}", record.answer, record.source);
    if !record.explanation.is_empty() {
        text.push_str(&format!("\n{}", record.explanation));
    }
    text.push_str(&format!("\n🏷️ {}", record.category));
    text
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}
