use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;

use heartguard::store::{Algorithm, ModelStore};
use heartguard::tasks::Assessment;
use heartguard::ui::cli::args::{AssessArgs, Cli, Command, OutputFormat};
use heartguard::ui::cli::drivers::InquireDriver;
use heartguard::ui::cli::interactive::run_interactive;
use heartguard::ui::render::{banner, render_failure, render_model_card, render_report};
use heartguard::utils::logging;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init()?;

    tracing::debug!(model_dir = %cli.model_dir.display(), "starting");
    let store = ModelStore::new(&cli.model_dir);

    match cli.command {
        None => {
            let mut assessment = Assessment::new(store);
            let driver = InquireDriver;
            let mut out = io::stdout().lock();
            run_interactive(&mut assessment, &driver, &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Assess(args)) => assess_once(Assessment::new(store), args),
        Some(Command::Models) => {
            list_models(&store)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn assess_once(mut assessment: Assessment, args: AssessArgs) -> Result<ExitCode> {
    let request = args.into_request()?;
    let mut out = io::stdout().lock();

    match assessment.assess(request.algorithm, &request.inputs) {
        Ok(report) => {
            match request.format {
                OutputFormat::Text => writeln!(out, "{}", render_report(&report))?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &report)
                        .context("failed to write report as JSON")?;
                    writeln!(out)?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(error = %e, "assessment failed");
            eprintln!("{}", render_failure(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn list_models(store: &ModelStore) -> Result<()> {
    let mut out = io::stdout().lock();
    for line in banner() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "Model directory: {}\n", store.model_dir().display())?;
    for algorithm in Algorithm::iter() {
        let card = store.card(algorithm);
        writeln!(out, "{}", render_model_card(algorithm, &card))?;
    }
    Ok(())
}
