//! Shared pieces of the bitcalc client binaries.
//!
//! - [`config`]: layered client configuration (defaults, TOML file, flags)
//! - [`render`]: text and JSON output for evaluations and their traces

#![deny(missing_docs, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod config;
pub mod render;
