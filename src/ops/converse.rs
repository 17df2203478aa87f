//! Interactive session over hybrid answers.
//!
//! The session keeps one orchestrator alive, so repeated questions are served
//! from the hybrid cache for as long as the session lasts.

use crate::errors::AppResult;
use crate::ops::orchestrator::Orchestrator;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Starts an interactive session on stdin/stdout.
///
/// # Flow
///
/// 1. Display welcome message and instructions
/// 2. Read a question per line
/// 3. Print the hybrid answer and its sources
/// 4. Exit on "esci", "quit", "exit", empty input or end of input
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn start_conversation(orchestrator: &Orchestrator, date: NaiveDate) -> AppResult<()> {
    info!("Starting conversational interface");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let answered = run_conversation(orchestrator, date, stdin.lock(), stdout.lock())?;

    info!("Conversation ended after {} questions", answered);
    Ok(())
}

/// Runs the session loop over any line source and sink.
///
/// Returns the number of questions answered.
pub fn run_conversation<R: BufRead, W: Write>(
    orchestrator: &Orchestrator,
    date: NaiveDate,
    mut input: R,
    mut output: W,
) -> AppResult<usize> {
    writeln!(output, "\n🕯️ Lucerna")?;
    writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(output, "Scrivi ciò che porti nel cuore e premi Invio.")?;
    writeln!(output, "  • 'esci' per terminare")?;
    writeln!(output, "  • Riga vuota per terminare")?;
    writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n")?;

    let mut answered = 0;
    loop {
        write!(output, "Tu: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();

        if question.is_empty()
            || question.eq_ignore_ascii_case("esci")
            || question.eq_ignore_ascii_case("quit")
            || question.eq_ignore_ascii_case("exit")
        {
            break;
        }

        debug!("Answering question {}", answered + 1);
        let answer = orchestrator.ask_hybrid(question, date);

        writeln!(output, "\n{}\n", answer.answer())?;
        writeln!(output, "📖 {}", answer.source())?;
        if let Some(verse) = &answer.source_liturgical {
            writeln!(output, "✝️ {}", verse)?;
        }
        writeln!(output)?;
        answered += 1;
    }

    writeln!(output, "\n🕊️ Pace e bene.")?;
    Ok(answered)
}
