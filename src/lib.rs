//! Single-shot trigger for the drive-index cron endpoint.
//!
//! Reads the cron secret and site base URL from the environment, issues one
//! authenticated GET request to the fixed cron path, and hands the response
//! body back verbatim. No retries, no scheduling; an external job scheduler
//! is expected to invoke the binary.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod errors;

pub use client::TriggerClient;
pub use client::TriggerClientBuilder;

pub use config::ConfigError;
pub use config::TriggerConfig;

pub use endpoint::DRIVE_INDEX_PATH;
pub use endpoint::trigger_url;

pub use errors::TriggerError;
