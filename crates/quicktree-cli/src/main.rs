mod commands;
mod logging;

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use commands::Cli;
use dotenv::dotenv;
use quicktree_core::ReportEngine;
use tracing::info;

fn main() -> ExitCode {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    // `_guard` must drop before the process exits so the file layer flushes.
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let config = quicktree_core::config::load_configuration()
        .context("Error loading configuration")?
        .with_extra_patterns(args.ignore);

    if args.print_config {
        println!("Configuration: {:?}", config);
        return Ok(());
    }

    let root = match args.path {
        Some(path) => path,
        None => env::current_dir().context("Error resolving current directory")?,
    };

    let engine = ReportEngine::new(&config)?;
    let report = engine.run(&root)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.text.as_bytes())?;
    stdout.flush()?;

    info!(
        "{} directories, {} files in {}",
        format!("{}", report.directory_count).cyan(),
        format!("{}", report.file_count).cyan(),
        format!("{:.3}s", report.duration.as_secs_f64()).green(),
    );
    if report.truncated {
        info!("Label line truncated: more directories than labels");
    }

    Ok(())
}
