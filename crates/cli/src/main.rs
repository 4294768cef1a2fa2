use toyraffle_catalog::RngDraw;
use toyraffle_infra::{FileWinnerLog, RaffleConfig};

fn main() {
    toyraffle_observability::init();

    let loaded = RaffleConfig::load();
    for problem in &loaded.problems {
        tracing::warn!(error = %problem, "config setting unusable; falling back to its default");
    }
    let config = loaded.config;

    let log = FileWinnerLog::new(&config.winners_path);
    let mut source = RngDraw::from_entropy();
    let mut stdout = std::io::stdout().lock();

    // Every failure degrades to a diagnostic; the process always exits 0.
    if let Err(err) = toyraffle_cli::run(&config, &mut source, &log, &mut stdout) {
        tracing::error!(error = ?err, "raffle run failed");
    }
}
