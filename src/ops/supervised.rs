//! Deterministic answer built from the corpus.
//!
//! This is the terminal fallback for every remote path: it never fails and
//! never leaves the process.

use crate::answer::AnswerRecord;
use crate::content::themes::contains_any;
use crate::content::{classify_tema, is_delicate, prayer_for};
use crate::corpus::Corpus;
use tracing::debug;

const HIGH_INTENSITY: &[&str] = &[
    "tantissimo",
    "molto",
    "troppo",
    "non ce la faccio",
    "distrutto",
    "a pezzi",
];

// "io" also matches inside "Dio" and "mio"; accepted.
const FIRST_PERSON: &[&str] = &["io", "mi sento", "sto vivendo", "non riesco", "ho paura", "mi sembra"];

const DIRECT_QUESTION: &[&str] = &[
    "cosa devo fare",
    "come faccio",
    "perché succede",
    "come andare avanti",
];

pub const NO_DATA_SOURCE: &str = "Proverbi 3,5";
pub const NO_DATA_EXPLANATION: &str = "La fiducia in Dio sostiene nei momenti di oscurità.";
pub const NO_DATA_CATEGORY: &str = "Generale";

const NO_DATA_TEXT: &str = "🌿 **Accoglienza**\n\
In questo momento il tuo cuore cerca luce. Respira lentamente: Dio è vicino.\n\n\
✨ **Illuminazione**\n\
Anche quando tutto sembra fermo, una piccola scintilla di speranza continua a brillare.\n\n\
📖 **Luce della Scrittura**\n\
*Proverbi 3,5*\n\n\
🕊️ **Benedizione finale**\n\
Che una pace silenziosa scenda su di te e ti accompagni.";

/// Wording signals read from the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuestionTone {
    pub high_intensity: bool,
    pub first_person: bool,
    pub direct_question: bool,
}

impl QuestionTone {
    pub fn read(question: &str) -> Self {
        let q = question.to_lowercase();
        Self {
            high_intensity: contains_any(&q, HIGH_INTENSITY),
            first_person: contains_any(&q, FIRST_PERSON),
            direct_question: contains_any(&q, DIRECT_QUESTION),
        }
    }
}

/// Builds the multi-section answer for a question.
///
/// Source, explanation and category come from the first corpus entry of the
/// classified theme; with no entry the fixed "no data" answer is returned.
pub fn build_supervised_answer(corpus: &Corpus, question: &str) -> AnswerRecord {
    let tema = classify_tema(question);
    let Some(entry) = corpus.first_for_theme(tema) else {
        debug!("No corpus entries for theme '{}'", tema);
        return AnswerRecord::new(NO_DATA_TEXT, NO_DATA_SOURCE, NO_DATA_EXPLANATION, NO_DATA_CATEGORY);
    };

    let tone = QuestionTone::read(question);
    debug!(?tone, tema, "Building deterministic answer");

    let mut text = String::new();

    text.push_str("🌿 **Accoglienza**\n");
    text.push_str(&format!(
        "Nel tuo cuore affiora il tema della **{}**. Fermati un istante, respira, \
         lascia che una luce gentile ti raggiunga.\n",
        entry.tema
    ));
    if tone.high_intensity {
        text.push_str(
            "Quello che porti adesso è pesante: non devi reggerlo con le tue sole forze, \
             Dio si fa vicino proprio qui.\n",
        );
    } else if tone.first_person {
        text.push_str("Grazie per aver affidato ciò che vivi: ogni parola è accolta con rispetto.\n");
    }
    text.push('\n');

    text.push_str("✨ **Illuminazione dal corpus**\n");
    text.push_str(&format!("{} {}\n", entry.messaggio, entry.nota));
    text.push_str("Lascia che queste parole scendano lentamente nel cuore, come una goccia di pace.\n\n");

    text.push_str("📖 **Luce della Scrittura**\n");
    text.push_str(&format!("*{}*\n", entry.fonte));
    text.push_str("La Parola è come un raggio che attraversa la notte e apre un varco di speranza.\n\n");

    if is_delicate(tema) {
        if let Some(prayer) = prayer_for(tema) {
            text.push_str("🙏 **Preghiera breve**\n");
            text.push_str(prayer);
            text.push_str("\nRipeti queste parole lentamente, come un respiro dell’anima.\n\n");
        }
    }

    if tone.direct_question {
        text.push_str("🌱 **Un passo concreto**\n");
        text.push_str(
            "Oggi prova a fermarti un minuto in silenzio. Metti una mano sul petto, \
             chiudi gli occhi e ripeti: *“Signore, guidami Tu.”*\n\n",
        );
    }

    text.push_str("🕊️ **Benedizione finale**\n");
    text.push_str(
        "Che una pace sottile, come un filo di luce, attraversi ciò che stai vivendo. \
         Cammina con fiducia: ogni passo, anche il più piccolo, è custodito da Dio.",
    );

    AnswerRecord::new(text, &entry.fonte, &entry.nota, &entry.tema)
}
