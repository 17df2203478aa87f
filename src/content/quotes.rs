//! Scripture verses, saint quotations and short prayers by theme.

use crate::constants::FALLBACK_THEME;

const VERSES: &[(&str, &str)] = &[
    ("paura", "«Non temere, perché io sono con te» (Isaia 41,10)"),
    ("solitudine", "«Il Signore è vicino a chi ha il cuore ferito» (Salmo 34,19)"),
    ("colpa", "«Dove abbondò il peccato, sovrabbondò la grazia» (Romani 5,20)"),
    ("tristezza", "«Il Signore asciugherà ogni lacrima» (Apocalisse 21,4)"),
    ("speranza", "«Io conosco i progetti che ho fatto per voi» (Geremia 29,11)"),
    ("vocazione", "«Parla, Signore, il tuo servo ascolta» (1 Samuele 3,10)"),
    ("prova_sofferenza", "«Ti basta la mia grazia» (2 Corinzi 12,9)"),
    ("perdono", "«Rimetti a noi i nostri debiti» (Matteo 6,12)"),
    ("amore", "«Dio è amore» (1 Giovanni 4,8)"),
    ("discernimento", "«Mostrami, Signore, la tua via» (Salmo 86,11)"),
    ("generale", "«Il Signore è il mio pastore: non manco di nulla» (Salmo 23,1)"),
];

const SAINTS: &[(&str, &str)] = &[
    ("paura", "«La paura è un nemico della fede» – San Pio da Pietrelcina"),
    (
        "solitudine",
        "«Dio è più intimo a noi di quanto noi lo siamo a noi stessi» – Sant’Agostino",
    ),
    ("colpa", "«Dio non si stanca mai di perdonarci» – Papa Francesco"),
    ("tristezza", "«La tristezza non viene da Dio» – San Francesco d’Assisi"),
    ("speranza", "«La speranza è la virtù dei cuori forti» – Santa Teresa d’Avila"),
    ("vocazione", "«Fai ciò che puoi, e Dio farà il resto» – San Giovanni Bosco"),
    (
        "prova_sofferenza",
        "«Nulla ti turbi, nulla ti spaventi: solo Dio basta» – Santa Teresa d’Avila",
    ),
    (
        "perdono",
        "«È nella misericordia che si vede il volto di Dio» – San Giovanni Paolo II",
    ),
    ("amore", "«Dove non c’è amore, metti amore» – San Giovanni della Croce"),
    ("discernimento", "«La volontà di Dio è la nostra pace» – Santa Chiara"),
    ("generale", "«Tutto posso in Colui che mi dà forza» – San Paolo"),
];

const PRAYERS: &[(&str, &str)] = &[
    ("paura", "Signore, posa la Tua mano su questo cuore inquieto e donagli respiro."),
    ("solitudine", "Signore, avvolgi con la Tua presenza chi si sente smarrito e solo."),
    ("colpa", "Signore, riversa la Tua misericordia e sciogli ogni nodo del cuore."),
    ("tristezza", "Signore, asciuga le lacrime e accendi una piccola luce nella notte."),
    (
        "prova_sofferenza",
        "Signore, sostieni chi porta una croce pesante e dona forza nel cammino.",
    ),
    ("tentazione", "Signore, rafforza questo cuore e guidalo nella fedeltà e nella pace."),
];

/// Pair of quotations resolved for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotes {
    /// Bible verse with its reference in parentheses.
    pub verse: &'static str,
    /// Saint quotation with attribution.
    pub saint: &'static str,
}

fn lookup(table: &'static [(&'static str, &'static str)], tema: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == tema)
        .map(|(_, text)| *text)
}

/// Resolves verse and saint quotation for a theme.
///
/// The theme is lowercased first; unknown themes get the `generale` pair.
///
/// # Examples
///
/// ```
/// use lucerna::content::recupera_citazioni;
///
/// let quotes = recupera_citazioni("PAURA");
/// assert!(quotes.verse.contains("Isaia 41,10"));
///
/// let fallback = recupera_citazioni("gioia");
/// assert!(fallback.verse.contains("Salmo 23,1"));
/// ```
pub fn recupera_citazioni(tema: &str) -> Quotes {
    let tema = tema.to_lowercase();
    Quotes {
        verse: lookup(VERSES, &tema)
            .or_else(|| lookup(VERSES, FALLBACK_THEME))
            .unwrap_or_default(),
        saint: lookup(SAINTS, &tema)
            .or_else(|| lookup(SAINTS, FALLBACK_THEME))
            .unwrap_or_default(),
    }
}

/// Short prayer for a delicate theme.
pub fn prayer_for(tema: &str) -> Option<&'static str> {
    lookup(PRAYERS, tema)
}

/// Extracts the bare reference from a verse string: the text inside the last
/// pair of parentheses, or the whole string when there is none.
///
/// ```
/// use lucerna::content::quotes::verse_reference;
///
/// assert_eq!(verse_reference("«Dio è amore» (1 Giovanni 4,8)"), "1 Giovanni 4,8");
/// assert_eq!(verse_reference("Salmo 23"), "Salmo 23");
/// ```
pub fn verse_reference(verse: &str) -> &str {
    match (verse.rfind('('), verse.rfind(')')) {
        (Some(open), Some(close)) if open < close => &verse[open + 1..close],
        _ => verse,
    }
}
