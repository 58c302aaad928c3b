//! Host binary: drives the widget over stdin/stdout.
//!
//! ```text
//! stdin (event lines) → Event::parse_line → handle_event → Action::apply_to → stdout (framed markup)
//! ```
//!
//! # Lifecycle
//!
//! 1. **Configure**: `key=value` overrides, optionally `--config <file.toml>`
//! 2. **Logging**: stderr or `log_file`, never stdout
//! 3. **Load**: catalog, state, then one `Load` event (selectors + render)
//! 4. **Loop**: one event per input line until EOF
//!
//! # Input Lines
//!
//! - `1 Omeka`: select `Omeka` in the left slot
//! - `2`: clear the right slot
//! - `load`: repopulate both selectors and render
//!
//! Malformed lines are logged and skipped.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use compara::cli::Cli;
use compara::ui::WriterSink;
use compara::{handle_event, Action, AppState, Config, Event};

fn main() -> ExitCode {
    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("compara: {e}");
            return ExitCode::FAILURE;
        }
    };
    compara::observability::init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "compara stopped");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> compara::Result<()> {
    let catalog = {
        let _span = tracing::debug_span!("load_catalog", catalog_file = ?config.catalog_file).entered();
        compara::catalog::load(config)?
    };
    let mut state = compara::initialize(config, &catalog);
    let mut sink = WriterSink::new(io::stdout().lock());

    dispatch(&mut state, &Event::Load, &mut sink)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Event::parse_line(&line) {
            Ok(event) => dispatch(&mut state, &event, &mut sink)?,
            Err(e) => tracing::warn!(line = %line, error = %e, "skipping malformed event"),
        }
    }

    tracing::debug!("input closed");
    Ok(())
}

fn dispatch<W: io::Write>(state: &mut AppState<'_>, event: &Event, sink: &mut WriterSink<W>) -> compara::Result<()> {
    let actions: Vec<Action> = handle_event(state, event)?;
    for action in &actions {
        action.apply_to(sink)?;
    }
    Ok(())
}
