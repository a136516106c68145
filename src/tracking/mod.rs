//! Per-key tracking of available models and account spend.
//!
//! This module is the local reconciliation layer:
//! - Persists one JSON record per API key, named by a key-derived hash
//! - Reports models that appeared since the previous check
//! - Keeps a deduplicated, capped spend history
//! - Lists every tracked key for multi-key overviews

pub mod models;
pub mod registry;
pub mod spend;
pub mod store;
pub mod timestamp;
pub mod types;
