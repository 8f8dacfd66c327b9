use crate::cli::{Cli, OutputFormat};
use crate::errors::{AppErrors, AppResult};
use crate::services::policies::policy_for;
use crate::services::report_service::{write_csv, write_text};
use crate::services::simulation_service::calculate;
use clap::Parser;
use log::{error, info};
use std::io::{self, Write};

mod cli;
mod consts;
mod errors;
mod models;
mod services;
mod state;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let args = Cli::parse();

    let out = io::stdout();
    let mut handle = out.lock();
    match run(&args, &mut handle) {
        Err(AppErrors::Usage) => {
            // reported on stdout with a zero exit code
            writeln!(handle, "{}", AppErrors::Usage)
                .map_err(|e| AppErrors::Io(format!("write usage: {e}")))?;
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e)
        }
        Ok(()) => Ok(()),
    }
}

/// Validates the arguments, runs the simulation and renders the report to `out`.
pub fn run<W: Write>(args: &Cli, out: &mut W) -> AppResult<()> {
    let scenario = args.scenario()?;
    let policy = policy_for(args.policy);
    let outcome = calculate(&scenario, policy.as_ref())?;

    match args.format {
        OutputFormat::Text => write_text(&outcome, out),
        OutputFormat::Csv => write_csv(&outcome, out),
    }
}
