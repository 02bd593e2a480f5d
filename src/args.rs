// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "docstat",
    version,
    about = "Word, character, image and link statistics for exported document JSON"
)]
pub struct Args {
    #[command(flatten)]
    pub analysis: AnalysisOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// Document JSON files to analyze (`-` reads standard input)
    #[arg(required = true, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub files: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalysisOptions {
    /// Count emoji and add them to the character totals
    #[arg(long, help_heading = "Analysis")]
    pub emoji: bool,

    /// Analyze only the second row of the first table
    #[arg(long, help_heading = "Analysis")]
    pub first_table_only: bool,

    /// Maximum nesting depth walked before giving up on a document
    #[arg(long, value_parser = parsers::parse_depth, help_heading = "Analysis")]
    pub max_depth: Option<usize>,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// List the extracted words of each document
    #[arg(long, help_heading = "Output")]
    pub words: bool,

    /// List the links of each document
    #[arg(long, help_heading = "Output")]
    pub urls: bool,

    /// List the text of every row of the first table
    #[arg(long, help_heading = "Output")]
    pub rows: bool,

    /// Write the report to a file instead of standard output
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Stop at the first document that fails
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Number of documents analyzed in parallel
    #[arg(long, short = 'j', value_parser = parsers::parse_positive_usize, help_heading = "Behavior")]
    pub jobs: Option<usize>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}
