//! Core types and configuration for the tickstat pipeline.
//!
//! This crate provides shared types used across all other crates:
//! - Tick records and update types
//! - Metric names and report records
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
