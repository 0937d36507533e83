//! Integration tests for the public FAIRWAY API.

mod memory_store;
mod properties;
mod scorecard;
