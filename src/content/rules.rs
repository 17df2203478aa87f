//! Quick-answer rules: first rule whose keyword hits the question wins.

use super::themes::contains_any;

/// A canned answer triggered by keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
    pub source: &'static str,
    pub explanation: &'static str,
    pub category: &'static str,
}

pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["tarocchi", "oroscopo", "magia", "cartomanzia", "medium", "divinazione"],
        answer: "La Chiesa invita a evitare ogni forma di divinazione.",
        source: "Catechismo della Chiesa Cattolica, 2116",
        explanation: "La divinazione contraddice l'affidamento fiducioso a Dio.",
        category: "Dottrina",
    },
    Rule {
        keywords: &["sofferenza", "dolore", "malattia", "croce", "patire"],
        answer: "Unisci la tua sofferenza a quella di Cristo.",
        source: "Colossesi 1,24",
        explanation: "La sofferenza, vissuta con Cristo, diventa partecipazione alla sua opera redentrice.",
        category: "Sofferenza e Croce",
    },
    Rule {
        keywords: &["paura", "ansia", "angoscia", "preoccupazione", "timore"],
        answer: "Non temere, Dio è con te.",
        source: "Isaia 41,10",
        explanation: "La presenza di Dio dona forza e pace nei momenti difficili.",
        category: "Consolazione",
    },
    Rule {
        keywords: &["perdono", "colpa", "peccato", "confessione", "misericordia"],
        answer: "Dio è misericordioso e sempre pronto a perdonare.",
        source: "Luca 15,11-32",
        explanation: "Come il Padre del figliol prodigo, Dio accoglie chi torna a Lui.",
        category: "Misericordia",
    },
    Rule {
        keywords: &["vocazione", "chiamata", "discernimento", "volontà di dio"],
        answer: "Ascolta la voce di Dio nel silenzio e nella preghiera.",
        source: "1 Samuele 3,10",
        explanation: "Il discernimento nasce dall'ascolto profondo della volontà di Dio.",
        category: "Discernimento",
    },
    Rule {
        keywords: &["speranza", "fiducia", "scoraggiamento", "disperazione"],
        answer: "La speranza cristiana non delude.",
        source: "Romani 5,5",
        explanation: "Lo Spirito Santo infonde nei cuori la speranza che sostiene nelle prove.",
        category: "Speranza",
    },
    Rule {
        keywords: &["preghiera", "pregare", "rosario", "adorazione"],
        answer: "La preghiera è respiro dell'anima.",
        source: "Catechismo della Chiesa Cattolica, 2559",
        explanation: "La preghiera è l'umile incontro tra la sete di Dio e la sete dell'uomo.",
        category: "Preghiera",
    },
    Rule {
        keywords: &["amore", "carità", "prossimo", "aiutare"],
        answer: "Ama il prossimo tuo come te stesso.",
        source: "Marco 12,31",
        explanation: "La carità è il cuore della vita cristiana.",
        category: "Carità",
    },
    Rule {
        keywords: &["fede", "credere", "dubbio", "incredulità"],
        answer: "La fede cresce chiedendola a Dio.",
        source: "Marco 9,24",
        explanation: "Anche chi dubita può dire: 'Credo, aiutami nella mia incredulità'.",
        category: "Fede",
    },
    Rule {
        keywords: &["spirito santo", "consolatore", "dono", "carismi"],
        answer: "Lo Spirito Santo ti guida nella verità.",
        source: "Giovanni 16,13",
        explanation: "È lo Spirito che illumina il cuore e dona pace.",
        category: "Spirito Santo",
    },
    Rule {
        keywords: &["matrimonio", "famiglia", "relazione", "fidanzamento", "conflitto"],
        answer: "L’amore vero è paziente e misericordioso.",
        source: "1 Corinzi 13,4-7",
        explanation: "La carità è il fondamento di ogni relazione cristiana.",
        category: "Relazioni",
    },
    Rule {
        keywords: &["tentazione", "peccato", "demonio", "lotta", "caduta"],
        answer: "Dio ti dà la forza per resistere alla tentazione.",
        source: "1 Corinzi 10,13",
        explanation: "Nessuna prova supera le tue forze se ti affidi a Dio.",
        category: "Lotta spirituale",
    },
    Rule {
        keywords: &["crescita", "migliorare", "conversione", "cammino", "santità"],
        answer: "La santità cresce un passo alla volta.",
        source: "Gaudete et Exsultate",
        explanation: "Dio ti guida nel cammino quotidiano verso la santità.",
        category: "Crescita spirituale",
    },
    Rule {
        keywords: &["guerra", "pace", "ingiustizia", "violenza", "male"],
        answer: "Beati gli operatori di pace.",
        source: "Matteo 5,9",
        explanation: "La pace nasce da cuori riconciliati con Dio.",
        category: "Pace e Giustizia",
    },
    Rule {
        keywords: &["maria", "madonna", "santi", "intercessione"],
        answer: "Maria ti accompagna come Madre.",
        source: "Giovanni 19,27",
        explanation: "La devozione mariana conduce sempre a Cristo.",
        category: "Devozione",
    },
    Rule {
        keywords: &["sacramenti", "eucaristia", "comunione", "battesimo"],
        answer: "I sacramenti sono incontri reali con Cristo.",
        source: "Catechismo della Chiesa Cattolica, 1116",
        explanation: "Attraverso i sacramenti, Cristo agisce nella tua vita.",
        category: "Sacramenti",
    },
    Rule {
        keywords: &["senso", "scopo", "vita", "esistenza", "vuoto"],
        answer: "La tua vita ha un valore infinito agli occhi di Dio.",
        source: "Salmo 139,14",
        explanation: "Dio ti ha creato per amore e per un fine unico.",
        category: "Senso della vita",
    },
];

/// Answer returned when no rule matches.
pub const FALLBACK_RULE: Rule = Rule {
    keywords: &[],
    answer: "Cerca prima il Regno di Dio.",
    source: "Matteo 6,33",
    explanation: "Chi cerca Dio con fiducia trova la strada anche nel buio.",
    category: "Generale",
};

/// Finds the first rule with a keyword contained in the lowercased question.
pub fn match_rule(question: &str) -> Option<&'static Rule> {
    let q = question.to_lowercase();
    RULES.iter().find(|rule| contains_any(&q, rule.keywords))
}
