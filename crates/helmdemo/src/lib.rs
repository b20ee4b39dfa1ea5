//! Top-level facade crate for helmdemo.
//!
//! Re-exports the metrics core and the server library so users can depend on a single crate.

pub mod core {
    pub use helmdemo_core::*;
}

pub mod server {
    pub use helmdemo_server::*;
}
