// Transitive dependencies pull in more than one version of some crates.
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
