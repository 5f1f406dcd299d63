//! Data models for subscription filters and filter verification.

/// Message filter definitions, opaque beyond their type discriminator.
pub mod filter;
/// Verification request/response payloads for the debugging endpoint.
pub mod verification;
