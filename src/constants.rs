//! Constants used throughout the application.
//!
//! This module contains all constants used in the lucerna application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable holding the completion API key.
pub const ENV_VAR_API_KEY: &str = "GROQ_API_KEY";
/// Environment variable overriding the chat model identifier.
pub const ENV_VAR_MODEL: &str = "GROQ_MODEL";
/// Environment variable overriding the chat-completions endpoint.
pub const ENV_VAR_API_URL: &str = "LUCERNA_API_URL";
/// Environment variable pointing at the corpus file.
pub const ENV_VAR_CORPUS: &str = "LUCERNA_CORPUS";
/// Environment variable overriding the liturgical calendar endpoint.
pub const ENV_VAR_LITURGY_URL: &str = "LUCERNA_LITURGY_URL";
/// Environment variable enabling the remote liturgical calendar.
pub const ENV_VAR_REMOTE_LITURGY: &str = "LUCERNA_REMOTE_LITURGY";
/// Environment variable for the completion request timeout in seconds.
pub const ENV_VAR_TIMEOUT_SECS: &str = "LUCERNA_TIMEOUT_SECS";

// Remote Completion
/// Default chat-completions endpoint (OpenAI-compatible).
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";
/// Default timeout for a completion request.
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 60;
/// Temperature for the doctrinally constrained hybrid answer.
pub const HYBRID_TEMPERATURE: f32 = 1.0;
/// Temperature for the contemplative AI answer.
pub const CONTEMPLATIVE_TEMPERATURE: f32 = 1.15;
/// Temperature for the full answer with liturgical commentary.
pub const FULL_ANSWER_TEMPERATURE: f32 = 1.3;
/// Temperature for fusing a rule answer with an AI answer.
pub const FUSION_TEMPERATURE: f32 = 0.7;
/// Nucleus sampling for fusion.
pub const FUSION_TOP_P: f32 = 0.9;
/// Token budget for fusion.
pub const FUSION_MAX_TOKENS: u32 = 500;

// Liturgical Calendar
/// Default liturgical calendar endpoint; the date is passed as `?data=YYYY-MM-DD`.
pub const DEFAULT_LITURGY_URL: &str = "https://www.chiesacattolica.it/wp-json/liturgia/v1/giorno";
/// Timeout for the liturgical calendar request.
pub const LITURGY_TIMEOUT_SECS: u64 = 10;

// Corpus
/// Default corpus file, relative to the working directory.
pub const DEFAULT_CORPUS_PATH: &str = "corpus.json";

// Classification
/// Theme returned when no keyword matches.
pub const FALLBACK_THEME: &str = "generale";

// Quality Filter
/// Maximum length, in characters, of a filtered AI answer.
pub const QUALITY_MAX_CHARS: usize = 900;
/// Sentence appended when an unsupported citation is cut away.
pub const QUALITY_CITATION_CLOSING: &str = " Dio è vicino.";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "lucerna";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
