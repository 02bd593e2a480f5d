use clap::Parser;
use docstat::args::Args;
use docstat::config::Config;
use docstat::{engine, logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.behavior.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match engine::run(&config) {
        Ok(result) => {
            for (source, err) in &result.errors {
                eprintln!("Error processing {source}: {err}");
            }
            if let Err(e) = presentation::emit(&result.reports, &config) {
                eprintln!("Output Error: {e:#}");
                return ExitCode::FAILURE;
            }
            if result.errors.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
