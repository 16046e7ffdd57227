//! Route handlers.
//!
//! - `/`       : static service metadata
//! - `/health` : liveness with a fresh UTC timestamp
//! - `/info`   : instance/environment details with placeholders
//! - `/config` : configuration summary, secrets reduced to presence flags
//! - `/secret` : the secret message, or 500 when it is not configured
//! - `/stats`  : per-instance request counter

pub mod env;
pub mod meta;
pub mod stats;

/// Paths advertised by `/`, in order.
pub const ENDPOINTS: [&str; 5] = ["/health", "/info", "/config", "/secret", "/stats"];
