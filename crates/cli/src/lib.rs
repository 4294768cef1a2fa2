//! `toyraffle-cli` — the raffle driver.
//!
//! Assembles a catalog from configuration, performs one weighted draw, prints
//! the outcome and records the winner. `main` only wires the production
//! collaborators (entropy-seeded RNG, file log, stdout) into [`run`].

pub mod messages;

use std::io::Write;

use anyhow::Context;
use tracing::{debug, error, info};

use toyraffle_catalog::{Catalog, DrawOutcome, DrawSource};
use toyraffle_infra::{RaffleConfig, WinnerLog, WinnerLogError};

/// What happened during one raffle run.
#[derive(Debug)]
pub struct RaffleReport {
    pub outcome: DrawOutcome,
    /// Catalog state after the draw.
    pub catalog: Catalog,
    /// Set when the winner could not be recorded. The draw still stands.
    pub persist_error: Option<WinnerLogError>,
}

impl RaffleReport {
    pub fn recorded(&self) -> bool {
        self.outcome.is_won() && self.persist_error.is_none()
    }
}

/// Run one raffle.
///
/// Only an invalid catalog or a failed write to `out` is an error. A failed
/// winner append is logged and handed back in the report.
pub fn run<D, L, W>(
    config: &RaffleConfig,
    source: &mut D,
    log: &L,
    out: &mut W,
) -> anyhow::Result<RaffleReport>
where
    D: DrawSource + ?Sized,
    L: WinnerLog + ?Sized,
    W: Write + ?Sized,
{
    let mut catalog = config.catalog().context("building raffle catalog")?;

    for (id, share) in catalog.odds() {
        debug!(item_id = %id, share = share, "odds");
    }

    let outcome = catalog.choose(source);
    match &outcome {
        DrawOutcome::Won(item) => {
            info!(item_id = %item.id_typed(), winner = item.name(), remaining = item.stock(), "draw won");
        }
        DrawOutcome::NoResult(reason) => info!(%reason, "draw produced no winner"),
    }

    writeln!(out, "{}", messages::outcome_line(config.locale, &outcome))
        .context("writing raffle outcome")?;

    let persist_error = match outcome.winner() {
        Some(item) => log.append(item.name()).err(),
        None => None,
    };
    if let Some(err) = &persist_error {
        error!(error = %err, "failed to record winner");
    }

    Ok(RaffleReport {
        outcome,
        catalog,
        persist_error,
    })
}
