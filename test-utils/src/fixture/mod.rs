//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures here are upstream API payloads as `serde_json::Value`, used to drive the
//! ingestion worker and the API client tests without a live upstream.

pub mod clan;
pub mod war_payload;
