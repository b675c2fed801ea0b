// src/main.rs

use anyhow::Result;
use clap::Parser;
use dirprint::cli::Cli;
use dirprint::config::ConfigBuilder;
use dirprint::errors::Error;
use dirprint::output::summary::{write_run_plan, write_run_summary};
#[cfg(feature = "progress")]
use dirprint::progress::IndicatifProgress;
use dirprint::progress::ProgressReporter;
use dirprint::prompt::confirm;
use dirprint::signal::setup_signal_handler;
use dirprint::{dry_run, execute, prepare, CancellationToken};
use std::io;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "dirprint=debug".parse()?
                } else {
                    "dirprint=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting dirprint v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    // --- Error Handling ---
    if let Err(e) = run_cli(cli) {
        match e {
            Error::Interrupted => {
                eprintln!("\nOperation cancelled by user");
                std::process::exit(130);
            }
            Error::Cancelled => {
                println!("{}", e);
                std::process::exit(1);
            }
            Error::NoFilesFound => {
                println!("\n{}", e);
                return Ok(());
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run_cli(cli: Cli) -> dirprint::errors::Result<()> {
    // --- Configuration ---
    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built successfully.");

    // Ctrl+C during discovery and the prompt terminates the process directly.
    let discovery_token = CancellationToken::new();
    let stdout = io::stdout();

    if config.dry_run {
        return dry_run(&config, &discovery_token, &mut stdout.lock());
    }

    println!("\nScanning directories...");
    let plan = prepare(&config, &discovery_token)?;
    write_run_plan(
        &mut stdout.lock(),
        &config,
        plan.candidates.len(),
        plan.previously_processed(),
    )?;

    if !config.assume_yes {
        let stdin = io::stdin();
        let accepted = confirm(
            &mut stdin.lock(),
            &mut stdout.lock(),
            "\nProceed with processing?",
        )?;
        if !accepted {
            return Err(Error::Cancelled);
        }
    }

    let token = setup_signal_handler()?;
    let progress = progress_reporter();

    println!("\nProcessing files...");
    let summary = execute(plan, &config, &token, progress)?;
    write_run_summary(&mut stdout.lock(), &summary)?;
    Ok(())
}

// Decide whether to show a progress bar. Show it if stderr is a TTY.
fn progress_reporter() -> Option<Arc<dyn ProgressReporter>> {
    #[cfg(feature = "progress")]
    {
        if atty::is(atty::Stream::Stderr) {
            return Some(Arc::new(IndicatifProgress::new()));
        }
    }
    None
}
