//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: one-time logging
//! setup and assertions over the JSON error body contract.

pub mod error_body;
pub mod logging;
