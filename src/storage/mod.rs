//! Storage layer for league rows
//!
//! A local SQLite copy of the five league tables, organized into:
//! - `models`: Load/import containers
//! - `schema`: Database connection and schema management
//! - `queries`: Upserts and per-league loaders
//!
//! Stat lines and ranks are stored as JSON text; everything else gets a
//! column of its own.

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::{ImportSummary, LeagueData};
pub use schema::StatsDatabase;
