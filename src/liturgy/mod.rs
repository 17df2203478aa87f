//! Liturgy of the day.
//!
//! Two sources: a fixed weekly table indexed by weekday, and a remote
//! liturgical calendar queried by date. The remote source falls back to a
//! static record on any error. Nothing is cached between calls.

use crate::constants::{DATE_FORMAT_ISO, LITURGY_TIMEOUT_SECS};
use chrono::{Datelike, NaiveDate, Weekday};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Readings and antiphon of one liturgical day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalDay {
    /// Reference of the reading the day is centered on.
    #[serde(rename = "riferimento")]
    pub reading: String,
    #[serde(rename = "tema")]
    pub theme: String,
    #[serde(rename = "versetto_chiave")]
    pub key_verse: String,
    #[serde(rename = "prima_lettura")]
    pub first_reading: String,
    #[serde(rename = "salmo_responsoriale")]
    pub psalm: String,
    #[serde(rename = "vangelo")]
    pub gospel: String,
    #[serde(rename = "antifona")]
    pub antiphon: Option<String>,
    #[serde(rename = "colore_liturgico")]
    pub color: Option<String>,
    #[serde(rename = "prima_lettura_testo", skip_serializing_if = "Option::is_none", default)]
    pub first_reading_text: Option<String>,
    #[serde(rename = "salmo_responsoriale_testo", skip_serializing_if = "Option::is_none", default)]
    pub psalm_text: Option<String>,
    #[serde(rename = "vangelo_testo", skip_serializing_if = "Option::is_none", default)]
    pub gospel_text: Option<String>,
}

struct WeeklyEntry {
    key_verse: &'static str,
    reading: &'static str,
    theme: &'static str,
    first_reading: &'static str,
    psalm: &'static str,
    gospel: &'static str,
    antiphon: &'static str,
    color: &'static str,
}

/// Monday through Sunday.
const WEEKLY: [WeeklyEntry; 7] = [
    WeeklyEntry {
        key_verse: "Beati i poveri in spirito, perché di essi è il regno dei cieli",
        reading: "Matteo 5,3",
        theme: "Le Beatitudini",
        first_reading: "Giacomo 1,1-11",
        psalm: "Salmo 118",
        gospel: "Matteo 5,1-12",
        antiphon: "Il Signore è vicino a chi ha il cuore ferito",
        color: "Verde",
    },
    WeeklyEntry {
        key_verse: "Il Signore è il mio pastore: non manco di nulla",
        reading: "Salmo 23",
        theme: "La fiducia nel Pastore",
        first_reading: "Isaia 55,6-11",
        psalm: "Salmo 33",
        gospel: "Matteo 6,7-15",
        antiphon: "Il Signore guida i suoi fedeli",
        color: "Verde",
    },
    WeeklyEntry {
        key_verse: "Io sono la via, la verità e la vita",
        reading: "Giovanni 14,6",
        theme: "Cristo via al Padre",
        first_reading: "Atti 4,1-12",
        psalm: "Salmo 117",
        gospel: "Giovanni 14,1-6",
        antiphon: "Cristo è la nostra luce",
        color: "Bianco",
    },
    WeeklyEntry {
        key_verse: "Signore, da chi andremo? Tu hai parole di vita eterna",
        reading: "Giovanni 6,68",
        theme: "Confidare nel Signore",
        first_reading: "Geremia 17,5-10",
        psalm: "Salmo 1",
        gospel: "Luca 6,17-26",
        antiphon: "Beato chi confida nel Signore",
        color: "Verde",
    },
    WeeklyEntry {
        key_verse: "Il Signore è vicino a chi lo invoca",
        reading: "Salmo 145",
        theme: "Digiuno e conversione",
        first_reading: "Isaia 58,1-9",
        psalm: "Salmo 50",
        gospel: "Matteo 9,14-15",
        antiphon: "Ricordati di noi, Signore",
        color: "Viola",
    },
    WeeklyEntry {
        key_verse: "Chi rimane in me e io in lui porta molto frutto",
        reading: "Giovanni 15,5",
        theme: "Rimanere nella vite",
        first_reading: "Atti 9,31-42",
        psalm: "Salmo 115",
        gospel: "Giovanni 15,1-8",
        antiphon: "Rimanete nel mio amore",
        color: "Bianco",
    },
    WeeklyEntry {
        key_verse: "Questo è il mio Figlio prediletto: ascoltatelo",
        reading: "Marco 9,7",
        theme: "La Trasfigurazione",
        first_reading: "Genesi 22,1-18",
        psalm: "Salmo 115",
        gospel: "Marco 9,2-10",
        antiphon: "Cristo è la nostra gloria",
        color: "Bianco",
    },
];

impl From<&WeeklyEntry> for LiturgicalDay {
    fn from(entry: &WeeklyEntry) -> Self {
        Self {
            reading: entry.reading.to_string(),
            theme: entry.theme.to_string(),
            key_verse: entry.key_verse.to_string(),
            first_reading: entry.first_reading.to_string(),
            psalm: entry.psalm.to_string(),
            gospel: entry.gospel.to_string(),
            antiphon: Some(entry.antiphon.to_string()),
            color: Some(entry.color.to_string()),
            first_reading_text: None,
            psalm_text: None,
            gospel_text: None,
        }
    }
}

/// Weekly-table entry for a weekday.
pub fn for_weekday(weekday: Weekday) -> LiturgicalDay {
    LiturgicalDay::from(&WEEKLY[weekday.num_days_from_monday() as usize])
}

/// Weekly-table entry for a weekday name, English or Italian, any case.
///
/// Unrecognized names get Sunday's entry.
///
/// ```
/// use lucerna::liturgy::{for_weekday, for_weekday_name};
/// use chrono::Weekday;
///
/// assert_eq!(for_weekday_name("mercoledì"), for_weekday(Weekday::Wed));
/// assert_eq!(for_weekday_name("Friday"), for_weekday(Weekday::Fri));
/// assert_eq!(for_weekday_name("someday"), for_weekday(Weekday::Sun));
/// ```
pub fn for_weekday_name(name: &str) -> LiturgicalDay {
    let weekday = match name.trim().to_lowercase().as_str() {
        "lunedì" | "lunedi" => Some(Weekday::Mon),
        "martedì" | "martedi" => Some(Weekday::Tue),
        "mercoledì" | "mercoledi" => Some(Weekday::Wed),
        "giovedì" | "giovedi" => Some(Weekday::Thu),
        "venerdì" | "venerdi" => Some(Weekday::Fri),
        "sabato" => Some(Weekday::Sat),
        "domenica" => Some(Weekday::Sun),
        other => other.parse::<Weekday>().ok(),
    };
    for_weekday(weekday.unwrap_or(Weekday::Sun))
}

/// Static record used when the remote calendar is unavailable.
pub fn fallback_day() -> LiturgicalDay {
    LiturgicalDay {
        reading: "Salmo 27".to_string(),
        theme: "Il Signore è luce".to_string(),
        key_verse: "Il Signore è la mia luce e la mia salvezza".to_string(),
        first_reading: "Isaia 55,1-11".to_string(),
        psalm: "Salmo 22".to_string(),
        gospel: "Marco 1,1-8".to_string(),
        antiphon: Some("Oggi la salvezza è venuta in questa casa.".to_string()),
        color: Some("Verde".to_string()),
        first_reading_text: Some("O voi tutti assetati, venite all’acqua...".to_string()),
        psalm_text: Some("Il Signore è il mio pastore: non manco di nulla.".to_string()),
        gospel_text: Some("Inizio del vangelo di Gesù Cristo, Figlio di Dio...".to_string()),
    }
}

/// Where the liturgy of the day comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiturgySource {
    /// The fixed weekly table.
    Weekly,
    /// A remote calendar endpoint queried with `?data=YYYY-MM-DD`.
    Remote { url: String },
}

/// Resolves the liturgy of a given date. Never fails.
#[derive(Debug, Clone)]
pub struct LiturgyProvider {
    source: LiturgySource,
    client: Option<Client>,
}

impl LiturgyProvider {
    pub fn weekly() -> Self {
        Self {
            source: LiturgySource::Weekly,
            client: None,
        }
    }

    /// Remote provider. If the HTTP client cannot be built every lookup
    /// returns the static record.
    pub fn remote(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(LITURGY_TIMEOUT_SECS))
            .build()
            .map_err(|e| warn!("Cannot build liturgy HTTP client: {}", e))
            .ok();
        Self {
            source: LiturgySource::Remote { url: url.into() },
            client,
        }
    }

    pub fn source(&self) -> &LiturgySource {
        &self.source
    }

    /// Liturgy for `date`.
    pub fn day_for(&self, date: NaiveDate) -> LiturgicalDay {
        match &self.source {
            LiturgySource::Weekly => for_weekday(date.weekday()),
            LiturgySource::Remote { url } => match &self.client {
                Some(client) => fetch_remote(client, url, date).unwrap_or_else(|reason| {
                    warn!("Remote liturgy unavailable ({}), using static record", reason);
                    fallback_day()
                }),
                None => fallback_day(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RemoteReading {
    riferimento: String,
    testo: String,
}

#[derive(Debug, Deserialize)]
struct RemoteDay {
    prima_lettura: RemoteReading,
    salmo: RemoteReading,
    vangelo: RemoteReading,
    antifona_ingresso: Option<String>,
    colore: Option<String>,
}

fn fetch_remote(client: &Client, url: &str, date: NaiveDate) -> Result<LiturgicalDay, String> {
    let day = date.format(DATE_FORMAT_ISO).to_string();
    debug!("Fetching liturgy for {} from {}", day, url);

    let response = client
        .get(url)
        .query(&[("data", day.as_str())])
        .header(reqwest::header::ACCEPT, "application/json")
        .header(reqwest::header::ACCEPT_LANGUAGE, "it-IT,it;q=0.9")
        .send()
        .map_err(|e| format!("request failed: {}", e))?;

    let body = response
        .text()
        .map_err(|e| format!("unreadable body: {}", e))?;
    debug!("Raw liturgy response: {}", body);

    let remote: RemoteDay =
        serde_json::from_str(&body).map_err(|e| format!("unexpected shape: {}", e))?;

    let key_verse = remote
        .vangelo
        .testo
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    Ok(LiturgicalDay {
        reading: remote.vangelo.riferimento.clone(),
        theme: for_weekday(date.weekday()).theme,
        key_verse,
        first_reading: remote.prima_lettura.riferimento,
        psalm: remote.salmo.riferimento,
        gospel: remote.vangelo.riferimento,
        antiphon: remote.antifona_ingresso,
        color: remote.colore,
        first_reading_text: Some(remote.prima_lettura.testo),
        psalm_text: Some(remote.salmo.testo),
        gospel_text: Some(remote.vangelo.testo),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_table_order() {
        assert_eq!(for_weekday(Weekday::Mon).reading, "Matteo 5,3");
        assert_eq!(for_weekday(Weekday::Sun).reading, "Marco 9,7");
        assert_eq!(for_weekday(Weekday::Fri).color.as_deref(), Some("Viola"));
    }

    #[test]
    fn test_weekly_provider_uses_date_weekday() {
        let provider = LiturgyProvider::weekly();
        // 2026-10-19 is a Monday
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(provider.day_for(monday), for_weekday(Weekday::Mon));
        assert_eq!(
            provider.day_for(monday.succ_opt().unwrap()),
            for_weekday(Weekday::Tue)
        );
    }

    #[test]
    fn test_unknown_weekday_name_is_sunday() {
        assert_eq!(for_weekday_name(""), for_weekday(Weekday::Sun));
        assert_eq!(for_weekday_name("LUNEDÌ"), for_weekday(Weekday::Mon));
        assert_eq!(for_weekday_name("sat"), for_weekday(Weekday::Sat));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(for_weekday(Weekday::Wed)).unwrap();
        assert_eq!(json["versetto_chiave"], "Io sono la via, la verità e la vita");
        assert_eq!(json["colore_liturgico"], "Bianco");
        assert!(json.get("vangelo_testo").is_none());
    }
}
