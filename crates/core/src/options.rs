// crates/core/src/options.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default recursion budget for tree walks.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(default)]
pub struct AnalyzerOptions {
    /// Count emoji and add them to the character totals.
    #[builder(default)]
    pub count_emoji: bool,
    /// Restrict text metrics to the second row of the first table.
    #[builder(default)]
    pub first_table_only: bool,
    /// Maximum nesting depth walked before the analysis is aborted.
    #[builder(default = "DEFAULT_MAX_DEPTH")]
    pub max_depth: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            count_emoji: false,
            first_table_only: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
