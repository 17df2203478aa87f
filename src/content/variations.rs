//! Phrase banks for templated variation of rule answers.

/// Parallel lists that a varied answer picks from.
#[derive(Debug, Clone, Copy)]
pub struct VariationBank {
    pub phrases: &'static [&'static str],
    pub images: &'static [&'static str],
    pub promises: &'static [&'static str],
    pub comments: &'static [&'static str],
    pub verses: &'static [&'static str],
}

const CONSOLAZIONE: VariationBank = VariationBank {
    phrases: &[
        "Non temere: Dio posa una luce silenziosa sul tuo cuore.",
        "Il Signore cammina accanto a te anche quando tutto trema.",
        "La paura non è più forte della presenza di Dio.",
        "Dio sostiene il tuo cuore quando si sente fragile.",
        "Il timore si placa quando lasci spazio alla fiducia.",
        "Dio è vicino, anche quando non lo senti.",
        "La tua paura è un’ombra, ma Dio è una luce che non si spegne.",
        "Il Signore ti accompagna passo dopo passo.",
        "Dio custodisce ciò che temi di perdere.",
        "La pace di Dio può raggiungerti anche ora.",
    ],
    images: &[
        "come una lampada accesa nella notte",
        "come un filo di luce che attraversa il cuore",
        "come un vento leggero che porta pace",
        "come una mano che ti sostiene nel silenzio",
        "come un raggio che apre un varco nell’ombra",
    ],
    promises: &[
        "Dio non ti lascia solo nel timore.",
        "La Sua presenza è più forte delle tue paure.",
        "Il Signore ti guida anche quando non vedi la strada.",
        "Dio è con te in ogni passo.",
        "La Sua pace può raggiungerti anche ora.",
    ],
    comments: &[
        "Lascia che questa parola ti dia respiro.",
        "Accogli questa luce nel cuore.",
        "Questa promessa è per te.",
        "Dio ti accompagna in ciò che vivi.",
        "Questa verità può portare pace.",
    ],
    verses: &["Isaia 41,10", "Salmo 27,1", "Salmo 23,1-4"],
};

const FEDE: VariationBank = VariationBank {
    phrases: &[
        "La fede cresce nel silenzio e nella fiducia.",
        "Dio sostiene chi desidera credere.",
        "La fede illumina ciò che non comprendiamo.",
        "La fiducia apre strade che non vedevamo.",
        "La fede è un seme che Dio fa crescere.",
        "Credere è lasciare spazio alla luce.",
        "La fede nasce dall’ascolto del cuore.",
        "Dio rafforza chi si affida a Lui.",
        "La fede è un passo verso la pace.",
        "Dio accoglie anche la tua piccola fede.",
    ],
    images: &[
        "come una lampada che rischiara il cammino",
        "come un seme che cresce nel silenzio",
        "come un ruscello che porta vita",
        "come un filo che ti unisce a Dio",
        "come un’alba che dissolve la notte",
    ],
    promises: &[
        "Dio non abbandona chi lo cerca.",
        "La Sua fedeltà è più forte dei tuoi dubbi.",
        "Il Signore accoglie la tua fede, anche fragile.",
        "Dio cammina con chi desidera credere.",
        "La Sua luce non viene meno.",
    ],
    comments: &[
        "Accogli questa parola come un seme.",
        "Lascia che questa verità ti accompagni.",
        "Questa luce può guidarti oggi.",
        "Dio parla anche nel silenzio.",
        "Questa promessa è per te.",
    ],
    verses: &["Marco 9,24", "Romani 10,17", "Ebrei 11,1"],
};

const SPERANZA: VariationBank = VariationBank {
    phrases: &[
        "La speranza non delude.",
        "Dio apre strade anche dove non le vedi.",
        "La luce di Dio vince ogni oscurità.",
        "La speranza è un dono che rinnova il cuore.",
        "Dio è fedele anche quando tutto sembra fermo.",
        "La speranza è un respiro che rialza.",
        "Dio accende una luce anche nei giorni pesanti.",
        "La speranza nasce dalla fiducia.",
        "Dio non smette di operare nel silenzio.",
        "La speranza è più forte della stanchezza.",
    ],
    images: &[
        "come un’alba che ritorna",
        "come un seme che rompe la terra",
        "come un raggio che attraversa le nuvole",
        "come una brezza che porta sollievo",
        "come una porta che si apre lentamente",
    ],
    promises: &[
        "Dio prepara per te un cammino.",
        "La Sua fedeltà non viene meno.",
        "Il Signore opera anche quando non te ne accorgi.",
        "Dio rialza chi spera in Lui.",
        "La Sua luce ti precede.",
    ],
    comments: &[
        "Lascia che questa promessa ti rialzi.",
        "Questa parola può essere la tua forza.",
        "Accogli questa luce nel cuore.",
        "Dio è vicino a chi spera.",
        "Questa verità può guidarti.",
    ],
    verses: &["Romani 5,5", "Geremia 29,11", "Salmo 37,5"],
};

/// Banks for the unmatched-question fallback.
pub const FALLBACK_PHRASES: &[&str] = &[
    "Cerca prima il Regno di Dio.",
    "Dio guida chi si affida a Lui.",
    "Il Signore illumina il cammino di chi lo cerca.",
    "Dio parla nel silenzio del cuore.",
    "Chi confida nel Signore trova pace.",
];
pub const FALLBACK_VERSES: &[&str] = &["Matteo 6,33", "Salmo 37,5", "Proverbi 3,5"];
pub const FALLBACK_COMMENTS: &[&str] = &[
    "Lascia che questa parola ti accompagni oggi.",
    "Accogli questa luce nel cuore.",
    "Questa promessa è per te.",
];

/// Returns the variation bank for a rule category, if it has one.
pub fn bank_for(category: &str) -> Option<&'static VariationBank> {
    match category {
        "Consolazione" => Some(&CONSOLAZIONE),
        "Fede" => Some(&FEDE),
        "Speranza" => Some(&SPERANZA),
        _ => None,
    }
}
