//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: one-time logging
//! initialization and assertions over the JSON error contract.

pub mod error_body;
pub mod logging;
