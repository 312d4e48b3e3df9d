//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod brief_sink;
pub mod correlation;
pub mod submission_log;
