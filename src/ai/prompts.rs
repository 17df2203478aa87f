//! System prompts and message builders for the answer operations.
//!
//! All prompts are Italian plain text. The doctrinal constraints live in the
//! prompt wording only; nothing here checks the model's output.

use crate::content::Quotes;
use crate::liturgy::LiturgicalDay;

/// Perceived emotional state of the person asking.
///
/// No analysis runs yet; every answer uses the neutral defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionalReading {
    pub emotion: String,
    pub need: String,
    pub intensity: String,
}

impl Default for EmotionalReading {
    fn default() -> Self {
        Self {
            emotion: "non_specificata".to_string(),
            need: "non_specificato".to_string(),
            intensity: "media".to_string(),
        }
    }
}

/// Blend of voices the model is asked to use.
pub const TONE_BLEND: &str = "40% fraterno, 40% paterno, 20% contemplativo";

/// Everything resolved deterministically before a remote answer is requested.
#[derive(Debug, Clone)]
pub struct PromptContext<'a> {
    pub question: &'a str,
    pub tema: &'a str,
    pub quotes: Quotes,
    pub liturgy: &'a LiturgicalDay,
    pub reading: EmotionalReading,
}

/// System prompt for the doctrinally constrained hybrid answer.
pub const HYBRID_SYSTEM_PROMPT: &str = r#"Sei un assistente spirituale cattolico fedele al Magistero della Chiesa.
Devi:
- rimanere sempre entro la dottrina cattolica
- non inventare mai citazioni bibliche o dei santi
- non contraddire mai il Catechismo della Chiesa Cattolica
- non fare teologia creativa o speculativa
- non dare consigli morali contrari alla Chiesa

Tono:
- caldo, fraterno, paterno, contemplativo
- rispettoso, umile, mai giudicante
- linguaggio semplice ma profondo

Struttura OBBLIGATORIA della risposta (rispetta esattamente queste sezioni):

1) Una riga iniziale che riassume il cuore del messaggio.
2) Sezione: "📖 RIFERIMENTO BIBLICO / SPIRITUALE"
   - Usa il versetto principale fornito dal sistema.
   - Puoi aggiungere UNA sola breve frase di commento.
3) Sezione: "🏛️ ALTRE LUCI DELLA TRADIZIONE"
   - Puoi citare al massimo 1-2 altri riferimenti (Bibbia, Padri, Santi, Magistero).
   - Se non sei sicuro, resta sul generico senza inventare riferimenti precisi.
4) Sezione: "🧭 PASSO CONCRETO"
   - Un solo gesto concreto, semplice, realistico, fattibile oggi.
5) Sezione: "🙏 PREGHIERA FINALE"
   - Una breve preghiera rivolta a Dio, in seconda persona ("Signore...").
6) Una breve parte contemplativa finale (massimo 6-8 righe), poetica ma sobria.

Regole:
- Non ripetere le stesse frasi identiche in ogni risposta.
- Non usare formule stereotipate sempre uguali.
- Non usare mai “cara fratello”: usa “caro fratello”, “cara sorella” o “caro amico” se il genere non è chiaro.
- Zero errori grammaticali."#;

/// System prompt for the free contemplative answer.
pub const CONTEMPLATIVE_SYSTEM_PROMPT: &str = r#"Sei un assistente spirituale cattolico fedele al Magistero.
Non inventare mai citazioni bibliche o dei santi.
Non contraddire mai il Catechismo.
Non dare consigli morali contrari alla Chiesa.
Non fare teologia creativa o speculativa.

Tono:
- contemplativo, poetico, caldo, paterno
- profondo ma semplice
- mai giudicante, mai rigido, mai ripetitivo

Struttura OBBLIGATORIA della risposta:
1) Una frase iniziale che riassume il cuore spirituale.
2) Una breve meditazione (6–10 righe) che parte dalla domanda, usa immagini bibliche
   generiche (luce, cammino, acqua viva…), NON cita versetti specifici e NON usa
   riferimenti numerati.
3) Un invito concreto alla preghiera o a un gesto spirituale.
4) Una preghiera finale breve, rivolta a Dio.

Regole:
- Non usare la stessa preghiera finale o la stessa frase iniziale ogni volta.
- Non usare le sezioni della risposta guidata (niente “Riferimento biblico”, “Altre luci”).
- Zero errori grammaticali."#;

/// System prompt for the full answer that weaves in the liturgical commentary.
pub const FULL_SYSTEM_PROMPT: &str = r#"Sei un assistente spirituale cattolico. Rispondi con tono caldo, fraterno, paterno e contemplativo.
La tua risposta deve SEMPRE contenere:
- una citazione biblica centrale
- un riferimento liturgico del giorno
- un pensiero di un Santo
- un invito concreto alla preghiera o a un gesto spirituale
- una breve preghiera finale
- zero errori grammaticali
Non usare mai “cara fratello” o altre combinazioni grammaticalmente errate.
Usa “caro fratello” oppure “cara sorella” in base al genere percepito dal testo; se non è chiaro, usa “caro amico”.
Puoi variare liberamente stile, immagini, metafore e struttura, con un linguaggio poetico, simbolico e meditativo."#;

/// System prompt used when merging two answers.
pub const FUSION_SYSTEM_PROMPT: &str = "Sei un assistente spirituale cattolico.";

/// Builds the user prompt for the hybrid answer.
pub fn hybrid_user_prompt(ctx: &PromptContext<'_>) -> String {
    format!(
        r#"Domanda dell'utente:
{question}

Informazioni per costruire la risposta:
{context}

Istruzioni:
- Usa il versetto principale come asse portante.
- Se non sei sicuro di un riferimento, non inventarlo.
- Collega con delicatezza la domanda dell'utente al Vangelo e alla Tradizione.
- Mantieni la struttura obbligatoria indicata nel system message."#,
        question = ctx.question,
        context = context_lines(ctx),
    )
}

/// Builds the user prompt for the contemplative answer.
pub fn contemplative_user_prompt(question: &str) -> String {
    format!(
        r#"Domanda dell'utente:
{}

Istruzioni:
- Rispondi con una meditazione cattolica profonda.
- Non citare versetti specifici.
- Non usare la struttura della risposta guidata.
- Mantieni la struttura obbligatoria indicata nel system message."#,
        question
    )
}

/// Builds the user prompt for the full answer, including the commentary.
pub fn full_user_prompt(ctx: &PromptContext<'_>, commentary: &str) -> String {
    format!(
        r#"Informazioni per costruire la risposta:
{context}
- Commento liturgico: {commentary}

Domanda dell’utente:
{question}

Genera una risposta spirituale profonda, coerente, cattolica, creativa e non ripetitiva, piena di immagini spirituali."#,
        context = context_lines(ctx),
        commentary = commentary,
        question = ctx.question,
    )
}

/// Builds the system prompt for a liturgical commentary.
///
/// With `personal` set, the commentary also speaks to the user's theme and
/// emotional state and follows the four steps of lectio divina.
pub fn commentary_prompt(day: &LiturgicalDay, personal: Option<(&str, &EmotionalReading)>) -> String {
    let liturgy = format!(
        "LITURGIA DEL GIORNO\n- Lettura: {}\n- Tema liturgico: {}\n- Versetto chiave: {}",
        day.reading, day.theme, day.key_verse
    );

    match personal {
        None => format!(
            r#"Sei un accompagnatore spirituale cattolico.
Genera un commento liturgico lungo, contemplativo e pastorale.

{liturgy}

ISTRUZIONI
- Non fare esegesi tecnica, non essere accademico, non moralizzare.
- Offri una meditazione che aiuti a pregare e colleghi la liturgia alla vita quotidiana.
- Sii dolce, profondo, paterno e fraterno.
- Lunghezza: 2–3 paragrafi brevi.

OBIETTIVO
Una meditazione da leggere lentamente, come un piccolo momento di lectio divina."#
        ),
        Some((tema, reading)) => format!(
            r#"Sei un accompagnatore spirituale cattolico.
Genera un commento liturgico lungo e contemplativo che unisca la liturgia del giorno al vissuto dell'utente.

{liturgy}

VISSUTO DELL'UTENTE
- Tema spirituale: {tema}
- Emozione dominante: {emotion}
- Bisogno spirituale: {need}
- Intensità del vissuto: {intensity}

STRUTTURA (LECTIO DIVINA)
1. LECTIO: Cosa dice la Parola oggi? Spiega con semplicità.
2. MEDITATIO: Cosa dice questa Parola alla vita dell’utente? Collegala con delicatezza.
3. ORATIO: Una breve preghiera ispirata alla liturgia.
4. CONTEMPLATIO: Una frase finale che rimanga nel cuore.

STILE
- Non fare esegesi tecnica, non essere accademico, non moralizzare.
- Paterno, fraterno, contemplativo, semplice.
- Lunghezza: 3–4 paragrafi brevi."#,
            emotion = reading.emotion,
            need = reading.need,
            intensity = reading.intensity,
        ),
    }
}

/// Builds the user prompt that merges a rule answer with an AI answer.
pub fn fusion_prompt(question: &str, rule_answer: &str, ai_answer: &str) -> String {
    format!(
        r#"L'utente ha chiesto:
{question}

Risposta del motore a regole:
{rule_answer}

Risposta del motore AI:
{ai_answer}

Unisci le due risposte in un unico testo contemplativo, breve, mite, luminoso.
- Mantieni solo ciò che è coerente con la spiritualità cattolica.
- Evita ripetizioni e non aggiungere dottrina nuova.
- Non introdurre citazioni non presenti.
- Usa frasi brevi, essenziali.
- Tono: contemplativo, fraterno, silenzioso.
- Lunghezza: 8–12 frasi."#
    )
}

fn context_lines(ctx: &PromptContext<'_>) -> String {
    format!(
        "- Tema classificato: {}\n\
         - Versetto biblico principale: {}\n\
         - Frase di un Santo: {}\n\
         - Lettura liturgica del giorno: {}\n\
         - Tema liturgico: {}\n\
         - Versetto liturgico chiave: {}\n\
         - Emozione percepita: {}\n\
         - Bisogno spirituale: {}\n\
         - Intensità emotiva: {}\n\
         - Blend dei toni: {}",
        ctx.tema,
        ctx.quotes.verse,
        ctx.quotes.saint,
        ctx.liturgy.reading,
        ctx.liturgy.theme,
        ctx.liturgy.key_verse,
        ctx.reading.emotion,
        ctx.reading.need,
        ctx.reading.intensity,
        TONE_BLEND,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::recupera_citazioni;
    use crate::liturgy::fallback_day;

    #[test]
    fn test_hybrid_prompt_embeds_resolved_data() {
        let day = fallback_day();
        let ctx = PromptContext {
            question: "Ho paura del domani",
            tema: "paura",
            quotes: recupera_citazioni("paura"),
            liturgy: &day,
            reading: EmotionalReading::default(),
        };

        let prompt = hybrid_user_prompt(&ctx);
        assert!(prompt.contains("Ho paura del domani"));
        assert!(prompt.contains("Tema classificato: paura"));
        assert!(prompt.contains("Isaia 41,10"));
        assert!(prompt.contains("San Pio da Pietrelcina"));
        assert!(prompt.contains(&day.key_verse));
        assert!(prompt.contains(TONE_BLEND));
    }

    #[test]
    fn test_hybrid_system_prompt_lists_sections() {
        assert!(HYBRID_SYSTEM_PROMPT.contains("RIFERIMENTO BIBLICO"));
        assert!(HYBRID_SYSTEM_PROMPT.contains("PASSO CONCRETO"));
        assert!(HYBRID_SYSTEM_PROMPT.contains("PREGHIERA FINALE"));
    }

    #[test]
    fn test_full_prompt_carries_commentary() {
        let day = fallback_day();
        let ctx = PromptContext {
            question: "Come posso pregare?",
            tema: "generale",
            quotes: recupera_citazioni("generale"),
            liturgy: &day,
            reading: EmotionalReading::default(),
        };
        let prompt = full_user_prompt(&ctx, "Oggi la Parola ci chiama.");
        assert!(prompt.contains("Commento liturgico: Oggi la Parola ci chiama."));
        assert!(prompt.ends_with("immagini spirituali."));
    }

    #[test]
    fn test_commentary_variants() {
        let day = fallback_day();
        let simple = commentary_prompt(&day, None);
        assert!(simple.contains(&day.reading));
        assert!(!simple.contains("VISSUTO DELL'UTENTE"));

        let reading = EmotionalReading::default();
        let personal = commentary_prompt(&day, Some(("tristezza", &reading)));
        assert!(personal.contains("Tema spirituale: tristezza"));
        assert!(personal.contains("Intensità del vissuto: media"));
        assert!(personal.contains("LECTIO"));
    }

    #[test]
    fn test_fusion_prompt_contains_both_answers() {
        let prompt = fusion_prompt("domanda", "regola", "meditazione");
        assert!(prompt.contains("domanda"));
        assert!(prompt.contains("Risposta del motore a regole:\nregola"));
        assert!(prompt.contains("Risposta del motore AI:\nmeditazione"));
    }
}
