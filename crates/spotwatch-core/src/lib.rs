// Public fallible APIs in this crate share one concrete error contract
// (`SpotwatchError`). Repeating per-function `# Errors` boilerplate obscures
// behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod band;
pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod models;
pub mod pushover;
pub mod qrz;
pub mod report;

pub use client::SpotWatch;
pub use config::Config;
pub use error::{Result, SpotwatchError};
