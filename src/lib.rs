//! # League Archive
//!
//! Historical statistics for a multi-season head-to-head fantasy league.
//!
//! ## Architecture
//!
//! - **models**: Relations (players, seasons, results, matchups) and output structures
//! - **storage**: JSONL data directory and snapshot loading
//! - **calculate**: The statistics engine (records, leaderboards, rivalries, streaks)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
