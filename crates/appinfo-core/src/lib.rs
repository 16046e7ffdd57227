//! appinfo core: transport-agnostic configuration, counters, and error types.
//!
//! This crate holds everything the HTTP layer reads from: the environment
//! snapshot taken once at startup, the per-instance request counter, and the
//! error surface shared with the service crate. It carries no HTTP or runtime
//! dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `AppInfoError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod env;
pub mod error;

pub use counter::RequestCounter;
pub use env::EnvConfig;
/// Shared result type.
pub use error::{AppInfoError, Result};
