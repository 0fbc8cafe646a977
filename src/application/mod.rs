//! Application layer (use-cases, policies).
//!
//! Orchestrates domain rules and storage for the front ends without
//! depending on how results are displayed.

pub mod service;

pub use service::{DeskService, DirectorySnapshot};
