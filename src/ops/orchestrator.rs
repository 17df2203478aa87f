//! The answer orchestrator.
//!
//! Owns the loaded corpus, the hybrid answer cache, the optional completion
//! capability and the liturgy provider. Every public operation returns a
//! record; remote failures are turned into fallback text or a fixed error
//! record, never into an `Err`.

use crate::ai::prompts::{
    commentary_prompt, contemplative_user_prompt, full_user_prompt, fusion_prompt,
    hybrid_user_prompt, EmotionalReading, PromptContext, CONTEMPLATIVE_SYSTEM_PROMPT,
    FULL_SYSTEM_PROMPT, FUSION_SYSTEM_PROMPT, HYBRID_SYSTEM_PROMPT, TONE_BLEND,
};
use crate::ai::{ChatClient, Completion, GenerationParams};
use crate::answer::{AnswerRecord, SpiritualAnswer};
use crate::cache::AnswerCache;
use crate::config::Config;
use crate::constants::{
    CONTEMPLATIVE_TEMPERATURE, FULL_ANSWER_TEMPERATURE, FUSION_MAX_TOKENS, FUSION_TEMPERATURE,
    FUSION_TOP_P, HYBRID_TEMPERATURE,
};
use crate::content::quotes::verse_reference;
use crate::content::{classify_tema, recupera_citazioni};
use crate::corpus::Corpus;
use crate::errors::{AIError, AppError, AppResult};
use crate::filter::quality_filter;
use crate::liturgy::{LiturgicalDay, LiturgyProvider};
use crate::ops::ask::answer_with_rules;
use crate::ops::supervised::build_supervised_answer;
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info, warn};

pub const GENERATION_ERROR_ANSWER: &str =
    "Si è verificato un errore nella generazione della risposta spirituale.";
pub const GENERATION_ERROR_SOURCE: &str = "Errore interno";
pub const FULL_ERROR_ANSWER: &str = "Errore nella generazione della risposta spirituale.";

pub const UNAVAILABLE_ANSWER: &str = "In questo momento non riesco a generare una risposta ibrida.";
pub const UNAVAILABLE_SOURCE: &str = "Sistema";
pub const UNAVAILABLE_EXPLANATION: &str = "Errore interno nel motore ibrido";
pub const UNAVAILABLE_CATEGORY: &str = "Errore";

pub const CONTEMPLATIVE_SOURCE: &str = "AI-contemplativa";
pub const CONTEMPLATIVE_CATEGORY: &str = "meditativa";

pub const COMMENTARY_FALLBACK: &str = "Oggi la liturgia ci invita a fermarci, ad ascoltare la \
Parola e a lasciarci toccare dal suo silenzioso abbraccio.";
pub const PERSONAL_COMMENTARY_FALLBACK: &str = "Oggi la liturgia ci invita a fermarci, ad \
ascoltare la Parola e a lasciarci toccare dal suo silenzioso abbraccio. Anche nel tuo vissuto, \
Dio desidera parlarti con delicatezza e luce.";

/// Which steps an answer goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerMode {
    /// Look up and store the answer in the process-lifetime cache.
    pub use_cache: bool,
    /// Ask the completion capability; otherwise answer deterministically.
    pub use_remote_model: bool,
    /// Doctrinal prompts with biblical, saint and liturgical context.
    /// Without it the contemplative prompt is used and the result filtered.
    pub doctrinal_constraints: bool,
    /// Generate a personal liturgical commentary first and embed it.
    pub liturgical_commentary: bool,
}

impl AnswerMode {
    pub const HYBRID: Self = Self {
        use_cache: true,
        use_remote_model: true,
        doctrinal_constraints: true,
        liturgical_commentary: false,
    };

    pub const CONTEMPLATIVE: Self = Self {
        use_cache: false,
        use_remote_model: true,
        doctrinal_constraints: false,
        liturgical_commentary: false,
    };

    pub const FULL: Self = Self {
        use_cache: false,
        use_remote_model: true,
        doctrinal_constraints: true,
        liturgical_commentary: true,
    };

    pub const SUPERVISED: Self = Self {
        use_cache: false,
        use_remote_model: false,
        doctrinal_constraints: false,
        liturgical_commentary: false,
    };
}

type BoxedCompletion = Box<dyn Completion + Send + Sync>;

/// Owned answering state for one process.
pub struct Orchestrator {
    corpus: Corpus,
    cache: AnswerCache,
    completion: Option<BoxedCompletion>,
    liturgy: LiturgyProvider,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("corpus_entries", &self.corpus.len())
            .field("cached_answers", &self.cache.len())
            .field("has_completion", &self.completion.is_some())
            .field("liturgy", self.liturgy.source())
            .finish()
    }
}

impl Orchestrator {
    /// Orchestrator without a completion capability.
    pub fn new(corpus: Corpus, liturgy: LiturgyProvider) -> Self {
        Self {
            corpus,
            cache: AnswerCache::new(),
            completion: None,
            liturgy,
        }
    }

    pub fn with_completion(mut self, completion: impl Completion + Send + Sync + 'static) -> Self {
        self.completion = Some(Box::new(completion));
        self
    }

    /// Builds the orchestrator described by `config`.
    ///
    /// # Flow
    ///
    /// 1. Load and validate the corpus
    /// 2. Pick the weekly table or the remote calendar
    /// 3. Build the chat client when an API key is present
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded or the HTTP client
    /// cannot be built. A missing API key is not an error.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let corpus = Corpus::load(&config.corpus_path)?;
        info!("Loaded {} corpus entries", corpus.len());

        let liturgy = if config.remote_liturgy {
            LiturgyProvider::remote(&config.liturgy_url)
        } else {
            LiturgyProvider::weekly()
        };

        let orchestrator = Self::new(corpus, liturgy);
        if config.has_api_key() {
            let client = ChatClient::from_config(config)?;
            info!("Remote answers enabled with model {}", client.model());
            Ok(orchestrator.with_completion(client))
        } else {
            warn!("No API key configured, remote answers fall back to the corpus");
            Ok(orchestrator)
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn cache(&self) -> &AnswerCache {
        &self.cache
    }

    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    pub fn liturgical_day(&self, date: NaiveDate) -> LiturgicalDay {
        self.liturgy.day_for(date)
    }

    /// Answers `question` according to `mode`.
    ///
    /// # Flow
    ///
    /// 1. Return the cached record on an exact hit (cached modes only)
    /// 2. Without remote answering or a completion capability, build the
    ///    deterministic answer
    /// 3. Otherwise make one remote call with the mode's prompts
    /// 4. Store the result in the cache (cached modes only), including the
    ///    error record for a bad response but not the record for an
    ///    unreachable endpoint
    pub fn answer(&self, question: &str, mode: AnswerMode, date: NaiveDate) -> AnswerRecord {
        if mode.use_cache {
            if let Some(hit) = self.cache.get(question) {
                info!("Answer served from cache");
                return hit;
            }
        }

        let record = match (&self.completion, mode.use_remote_model) {
            (Some(completion), true) if mode.doctrinal_constraints => {
                match self.doctrinal_answer(completion, question, mode, date) {
                    Some(record) => record,
                    None => return unavailable_record(),
                }
            }
            (Some(completion), true) => self.contemplative_answer(completion, question),
            (None, true) => {
                debug!("No completion capability, answering from the corpus");
                build_supervised_answer(&self.corpus, question)
            }
            (_, false) => build_supervised_answer(&self.corpus, question),
        };

        if mode.use_cache {
            self.cache.put(question, record.clone());
        }
        record
    }

    fn doctrinal_answer(
        &self,
        completion: &BoxedCompletion,
        question: &str,
        mode: AnswerMode,
        date: NaiveDate,
    ) -> Option<AnswerRecord> {
        let tema = classify_tema(question);
        let quotes = recupera_citazioni(tema);
        let day = self.liturgy.day_for(date);
        let ctx = PromptContext {
            question,
            tema,
            quotes,
            liturgy: &day,
            reading: EmotionalReading::default(),
        };
        debug!(tema, tone = TONE_BLEND, "Requesting doctrinal answer");

        let result = if mode.liturgical_commentary {
            let commentary = self.commentary(&day, Some((tema, &ctx.reading)));
            completion.complete(
                FULL_SYSTEM_PROMPT,
                &full_user_prompt(&ctx, &commentary),
                &GenerationParams::with_temperature(FULL_ANSWER_TEMPERATURE),
            )
        } else {
            completion.complete(
                HYBRID_SYSTEM_PROMPT,
                &hybrid_user_prompt(&ctx),
                &GenerationParams::with_temperature(HYBRID_TEMPERATURE),
            )
        };

        match result {
            Ok(text) => Some(AnswerRecord::new(
                text,
                format!(
                    "Bibbia: {}; Liturgia del giorno: {}; Santo: {}",
                    quotes.verse, day.key_verse, quotes.saint
                ),
                quotes.saint,
                tema,
            )),
            Err(AppError::AI(AIError::Transport(e))) => {
                warn!("Completion endpoint unreachable: {}", e);
                None
            }
            Err(e) => {
                warn!("Remote answer failed: {}", e);
                let answer = if mode.liturgical_commentary {
                    FULL_ERROR_ANSWER
                } else {
                    GENERATION_ERROR_ANSWER
                };
                Some(AnswerRecord::new(answer, GENERATION_ERROR_SOURCE, quotes.saint, tema))
            }
        }
    }

    fn contemplative_answer(&self, completion: &BoxedCompletion, question: &str) -> AnswerRecord {
        let tema = classify_tema(question);
        let known_source = verse_reference(recupera_citazioni(tema).verse);

        match completion.complete(
            CONTEMPLATIVE_SYSTEM_PROMPT,
            &contemplative_user_prompt(question),
            &GenerationParams::with_temperature(CONTEMPLATIVE_TEMPERATURE),
        ) {
            Ok(text) => AnswerRecord::new(
                quality_filter(&text, known_source),
                CONTEMPLATIVE_SOURCE,
                "",
                CONTEMPLATIVE_CATEGORY,
            ),
            Err(e) => {
                warn!("Contemplative answer failed, answering from the corpus: {}", e);
                build_supervised_answer(&self.corpus, question)
            }
        }
    }

    /// Lectio divina commentary on `day`.
    ///
    /// With `personal` set the commentary also addresses the user's theme and
    /// emotional state. Falls back to a fixed sentence.
    pub fn commentary(
        &self,
        day: &LiturgicalDay,
        personal: Option<(&str, &EmotionalReading)>,
    ) -> String {
        let fallback = if personal.is_some() {
            PERSONAL_COMMENTARY_FALLBACK
        } else {
            COMMENTARY_FALLBACK
        };

        let Some(completion) = &self.completion else {
            return fallback.to_string();
        };

        completion
            .complete(&commentary_prompt(day, personal), "", &GenerationParams::default())
            .unwrap_or_else(|e| {
                warn!("Liturgical commentary failed: {}", e);
                fallback.to_string()
            })
    }

    /// Hybrid answer with the day's key verse attached.
    pub fn ask_hybrid(&self, question: &str, date: NaiveDate) -> SpiritualAnswer {
        let record = self.answer(question, AnswerMode::HYBRID, date);
        record.with_liturgical(Some(self.liturgy.day_for(date).key_verse))
    }

    /// Contemplative answer with the day's key verse attached.
    pub fn ask_ai(&self, question: &str, date: NaiveDate) -> SpiritualAnswer {
        let record = self.answer(question, AnswerMode::CONTEMPLATIVE, date);
        record.with_liturgical(Some(self.liturgy.day_for(date).key_verse))
    }

    /// Full answer with liturgical commentary.
    pub fn risposta(&self, question: &str, date: NaiveDate) -> SpiritualAnswer {
        self.answer(question, AnswerMode::FULL, date).into()
    }

    /// Deterministic answer from the corpus.
    pub fn supervised(&self, question: &str) -> AnswerRecord {
        build_supervised_answer(&self.corpus, question)
    }

    /// Rule answer with the day's key verse attached.
    pub fn ask<R: Rng + ?Sized>(
        &self,
        question: &str,
        vary: bool,
        rng: &mut R,
        date: NaiveDate,
    ) -> SpiritualAnswer {
        answer_with_rules(question, vary, rng)
            .with_liturgical(Some(self.liturgy.day_for(date).key_verse))
    }

    /// Merges the deterministic answer with a contemplative one.
    ///
    /// # Flow
    ///
    /// 1. Build the deterministic answer
    /// 2. Request the contemplative answer
    /// 3. Ask the model to fuse the two, keeping the deterministic citation
    ///
    /// Without a completion capability, or when the fusion call fails, the
    /// deterministic answer is returned.
    pub fn fuse(&self, question: &str, date: NaiveDate) -> AnswerRecord {
        let rule_answer = build_supervised_answer(&self.corpus, question);
        let Some(completion) = &self.completion else {
            return rule_answer;
        };

        let ai_answer = self.answer(question, AnswerMode::CONTEMPLATIVE, date);
        let params = GenerationParams {
            temperature: Some(FUSION_TEMPERATURE),
            top_p: Some(FUSION_TOP_P),
            max_tokens: Some(FUSION_MAX_TOKENS),
        };

        match completion.complete(
            FUSION_SYSTEM_PROMPT,
            &fusion_prompt(question, &rule_answer.answer, &ai_answer.answer),
            &params,
        ) {
            Ok(text) => AnswerRecord::new(
                text,
                rule_answer.source,
                rule_answer.explanation,
                rule_answer.category,
            ),
            Err(e) => {
                warn!("Answer fusion failed: {}", e);
                rule_answer
            }
        }
    }
}

/// Answer for an unreachable endpoint. Never cached.
fn unavailable_record() -> AnswerRecord {
    AnswerRecord::new(
        UNAVAILABLE_ANSWER,
        UNAVAILABLE_SOURCE,
        UNAVAILABLE_EXPLANATION,
        UNAVAILABLE_CATEGORY,
    )
}
