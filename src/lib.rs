//! Test Evidence Server library.
//!
//! Stores test reports, the test cases within them, evidence for each case and
//! per-report summaries, and exposes them over a small HTTP API.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
