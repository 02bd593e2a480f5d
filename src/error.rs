// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read '{input}': {source}")]
    Read {
        input: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{input}' is not valid JSON: {source}")]
    Parse {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to analyze '{input}': {source}")]
    Analyze {
        input: String,
        #[source]
        source: docstat_core::AnalyzeError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
