//! Local tracking of CBORG models and spend per API key.

pub mod api_client;
pub mod app;
pub mod config;
pub mod data_paths;
pub mod identity;
pub mod logging;
pub mod tracking;
