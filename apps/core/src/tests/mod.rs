//! Test Module
//!
//! ## Test Categories
//! - `mocks`: Substitute completion clients and sleepers
//! - `brain_tests`: Intent priority, role extraction, sanitization properties
//! - `client_tests`: HTTP contract, retry and backoff of the completion client
//! - `responder_tests`: Response assembly for every intent, with and without the network
//! - `session_tests`: Transcript persistence

pub mod mocks;
pub mod brain_tests;
pub mod session_tests;
