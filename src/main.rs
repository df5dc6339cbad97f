//! Fremorizer: draws a guitar fretboard in the terminal.
//!
//! Loads ~/.fremorizer/config.yaml (or `--config`), applies command-line
//! overrides, builds the instrument, then either prints the diagram or runs
//! the interactive UI.

use clap::Parser;

use fremorizer::cli::Cli;
use fremorizer::config::FremorizerConfig;
use fremorizer::fretboard::{render_instrument, Guitar};
use fremorizer::logging;
use fremorizer::tui::App;

fn main() {
    let cli = Cli::parse();

    // 1. Config file + environment, then CLI overrides
    let loaded = match &cli.config {
        Some(path) => FremorizerConfig::load_required(path),
        None => FremorizerConfig::load(),
    };
    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to load config: {e}");
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    // 2. Logging (file only; the terminal belongs to the UI)
    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("failed to open log file: {e}");
        std::process::exit(1);
    }

    // 3. Instrument
    let mut guitar = match Guitar::new(config.tuning.as_slice(), config.frets) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("invalid instrument: {e}");
            std::process::exit(1);
        }
    };
    if cli.reveal {
        guitar.reveal_all();
    }

    if cli.print {
        print!("{}", render_instrument(&guitar));
        return;
    }

    // 4. Interactive UI
    let mut terminal = ratatui::init();
    let mut app = App::new(guitar);
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = result {
        log::error!("ui error: {e}");
        eprintln!("ui error: {e}");
        std::process::exit(1);
    }
}
