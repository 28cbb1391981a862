//! Builds a per-day calendar feature table for the 2022-2025 window:
//! US federal holiday flag, day of week, and academic break flag,
//! written out as CSV.

pub mod breaks;
pub mod calendar;
pub mod error;
pub mod features;
pub mod output;
