// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::input::InputSource;
use crate::options::{Listings, OutputFormat};
use clap::ValueEnum;
use derive_builder::Builder;
use docstat_core::AnalyzerOptions;
use std::path::PathBuf;

/// Immutable run configuration resolved from the command line.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub inputs: Vec<InputSource>,
    #[builder(default)]
    pub analyzer: AnalyzerOptions,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub listings: Listings,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default)]
    pub strict: bool,
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default)]
    pub verbosity: u8,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.inputs.as_ref().is_none_or(Vec::is_empty) {
            return Err("at least one input is required".to_owned());
        }
        if self.jobs == Some(0) {
            return Err("jobs must be at least 1".to_owned());
        }
        let stdin_reads = self
            .inputs
            .iter()
            .flatten()
            .filter(|input| **input == InputSource::Stdin)
            .count();
        if stdin_reads > 1 {
            return Err("standard input ('-') can only be given once".to_owned());
        }
        let format = self.format.unwrap_or_default();
        if format.is_delimited() && self.listings.is_some_and(Listings::any) {
            return Err(format!(
                "--words, --urls and --rows cannot be combined with --format {}",
                format
                    .to_possible_value()
                    .map_or_else(String::new, |v| v.get_name().to_owned())
            ));
        }
        Ok(())
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut analyzer = AnalyzerOptions {
            count_emoji: args.analysis.emoji,
            first_table_only: args.analysis.first_table_only,
            ..AnalyzerOptions::default()
        };
        if let Some(depth) = args.analysis.max_depth {
            analyzer.max_depth = depth;
        }

        let inputs: Vec<_> = args
            .files
            .iter()
            .map(|p| InputSource::from_path(p))
            .collect();

        let mut builder = ConfigBuilder::default();
        builder
            .inputs(inputs)
            .analyzer(analyzer)
            .format(args.output.format)
            .listings(Listings {
                words: args.output.words,
                urls: args.output.urls,
                rows: args.output.rows,
            })
            .output_path(args.output.output)
            .strict(args.behavior.strict)
            .verbosity(args.behavior.verbose);
        if let Some(jobs) = args.behavior.jobs {
            builder.jobs(jobs);
        }
        builder.build().map_err(|e| AppError::Config(e.to_string()))
    }
}
