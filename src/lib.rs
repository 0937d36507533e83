//! FAIRWAY — personal golf round tracker
//!
//! Library crate exposing the handicap engine, round statistics, storage
//! and reporting for use by integration tests and the binary entry point.

pub mod config;
pub mod types;
pub mod handicap;
pub mod stats;
pub mod storage;
pub mod report;
