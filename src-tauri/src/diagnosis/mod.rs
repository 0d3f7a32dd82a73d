//! Client side of the remote log analysis service.

pub mod client;
pub mod types;

pub use client::DiagnosisClient;
pub use types::*;
