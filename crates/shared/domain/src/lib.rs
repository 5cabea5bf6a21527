//! # Domain Models
//!
//! Pure data for the Deep Ocean site with minimal dependencies (`serde`, `strum`).
//! No I/O and no rendering here, only values and the small helpers that belong to them.

pub mod config;
pub mod content;
pub mod routes;
pub mod theme;
