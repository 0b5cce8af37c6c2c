//! Report generation for the tickstat pipeline.
//!
//! This crate provides:
//! - The report accumulator and its delimited-text writer
//! - The end-to-end run orchestrator

pub mod writer;
pub mod pipeline;

pub use writer::{Report, HEADER};
pub use pipeline::{build_report, Pipeline, RunSummary};
