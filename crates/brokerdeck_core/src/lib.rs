//! Core domain library for Brokerdeck (config, models, management API client).

/// Configuration loading and defaults.
pub mod config;
/// Console error types.
pub mod error;
/// Data models for topics, filters, and verification payloads.
pub mod models;
/// Remote filters repository backed by the management REST API.
pub mod repository;

pub use config::Config;
pub use error::ConsoleError;
pub use repository::{FiltersRepository, HttpFiltersRepository};
