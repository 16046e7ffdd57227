//! Top-level facade crate for the app info service.
//!
//! Re-exports the core types and the service library so users can depend on a single crate.

pub mod core {
    pub use appinfo_core::*;
}

pub mod service {
    pub use appinfo_service::*;
}
