//! Core components of the `stocknews-rs` crate.
//!
//! This module contains the foundational building blocks shared by the pipeline stages:
//! - The Yahoo [`YfClient`] and its builder.
//! - The primary [`AnalyzerError`] type.
//! - The [`AnalyzerConfig`] passed into the analyzer at construction.

/// The Yahoo client (`YfClient`), builder, and retry configuration.
pub mod client;
/// Analyzer configuration (service endpoint, model, credentials, time zone).
pub mod config;
/// The primary error type (`AnalyzerError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{Backoff, RetryConfig, YfClient, YfClientBuilder};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
