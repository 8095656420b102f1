//! Logger initialization for binaries built on this crate.
//!
//! The library itself only talks to the `log` facade; `env_logger` is wired
//! up here so every front end configures it the same way.

mod init;

pub use init::{init_logging, LoggingConfig};
