// src/engine.rs
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::input::InputSource;
use docstat_core::{Analyzer, ExtractedContent, extract};
use rayon::iter::Either;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Analysis of one input document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub source: InputSource,
    #[serde(flatten)]
    pub content: ExtractedContent,
    /// Text of each row of the first table, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<String>>,
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<DocumentReport>,
    pub errors: Vec<(InputSource, AppError)>,
}

/// Analyze every configured input on a dedicated thread pool.
///
/// Reports keep the input order. In strict mode the first failure aborts the
/// run; otherwise failures are collected next to the successful reports.
///
/// # Errors
///
/// Returns an error when the thread pool cannot be built, or in strict mode
/// when any document fails to load or analyze.
pub fn run(config: &Config) -> Result<RunResult> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;
    info!(documents = config.inputs.len(), jobs = config.jobs, "starting analysis");

    pool.install(|| {
        let analyzer = Analyzer::new(config.analyzer);
        let iter = config
            .inputs
            .par_iter()
            .map(|source| process_document(source, &analyzer, config).map_err(|e| (source.clone(), e)));

        if config.strict {
            let reports = iter
                .map(|r| r.map_err(|(_, e)| e))
                .collect::<Result<Vec<_>>>()?;
            return Ok(RunResult {
                reports,
                errors: Vec::new(),
            });
        }

        let (reports, errors): (Vec<_>, Vec<_>) = iter.partition_map(|r| match r {
            Ok(report) => Either::Left(report),
            Err(failure) => Either::Right(failure),
        });
        for (source, err) in &errors {
            warn!(%source, error = %err, "document skipped");
        }
        Ok(RunResult { reports, errors })
    })
}

/// Load and analyze a single document.
///
/// # Errors
///
/// Propagates read, parse and analysis failures for `source`.
pub fn process_document(
    source: &InputSource,
    analyzer: &Analyzer,
    config: &Config,
) -> Result<DocumentReport> {
    let tree = source.load()?;
    let content = analyzer.analyze(&tree).map_err(|e| analyze_error(source, e))?;

    let rows = if config.listings.rows {
        let texts = match content.tables().first() {
            Some(table) => extract::row_texts(table, config.analyzer.max_depth)
                .map_err(|e| analyze_error(source, e))?,
            None => Vec::new(),
        };
        Some(texts)
    } else {
        None
    };
    debug!(%source, words = content.word_count(), "document done");

    Ok(DocumentReport {
        source: source.clone(),
        content,
        rows,
    })
}

fn analyze_error(source: &InputSource, source_err: docstat_core::AnalyzeError) -> AppError {
    AppError::Analyze {
        input: source.to_string(),
        source: source_err,
    }
}
