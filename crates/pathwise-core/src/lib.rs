//! pathwise-core: adaptive sequencing engine, catalog model, and progress.
//!
//! This crate defines the data model, the catalog seam, and the rule-based
//! engine that rewrites a learner's path after each quiz, plus the
//! bookkeeping and file handling the `pathwise` CLI builds on.

pub mod assign;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod path;
pub mod progress;
pub mod reorder;
pub mod statistics;
