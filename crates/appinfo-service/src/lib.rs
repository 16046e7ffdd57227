//! App info service library entry.
//!
//! This crate wires the environment snapshot, the request counter, and the
//! route handlers into an axum router. It is consumed by the binary
//! (`main.rs`) and by integration tests, which drive the router directly.

pub mod app_state;
pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod server;
