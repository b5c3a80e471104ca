//! The `prezquiz play` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use prezquiz_core::config::{RangeSelection, SessionConfig, Verbosity};
use prezquiz_core::session::QuizSession;
use prezquiz_core::statistics::{format_percent, SessionSummary};
use prezquiz_core::traits::QuizIo;

use crate::io::ConsoleIo;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    repeat: bool,
    end_early: bool,
    allow_ambiguity: bool,
    range: Option<Vec<u32>>,
    verbosity: u8,
    dataset: Option<PathBuf>,
    format: String,
    seed: Option<u64>,
) -> Result<()> {
    let catalog = super::load_catalog(dataset)?;
    let verbosity = Verbosity::from_level(verbosity)?;
    let (start, end) = super::range_bounds(range, catalog.max_order());

    let range = RangeSelection::new(start, end, catalog.max_order())?;
    let config = SessionConfig::new(repeat, end_early, allow_ambiguity, range, verbosity)?;
    tracing::debug!(?config, "session configured");
    let mut session = QuizSession::new(&catalog, config)?;

    let mut io = ConsoleIo::new(verbosity);
    io.report(
        Verbosity::Normal,
        &format!(
            "Quizzing presidents {start} through {end}. Answer each question; \
             end of input (Ctrl-D) finishes the session.\n"
        ),
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = session.run(&mut io, &mut rng)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => print_summary(&summary),
    }

    Ok(())
}

fn print_summary(summary: &SessionSummary) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Kind", "Asked", "Correct", "Rate"]);

    for (kind, tally) in [
        ("Name", summary.name),
        ("Order", summary.order),
        ("Year", summary.year),
    ] {
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(tally.asked),
            Cell::new(tally.correct),
            Cell::new(format_percent(tally.correct, tally.asked)),
        ]);
    }

    println!("\nFinal statistics:");
    println!("{table}");
    println!(
        "Total: {} correct, {} incorrect of {} asked ({})",
        summary.correct,
        summary.incorrect,
        summary.total,
        format_percent(summary.correct, summary.total),
    );
}
