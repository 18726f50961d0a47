//! Type-safe wrappers for league data identifiers and stat categories.

pub mod ids;
pub mod stat;

pub use ids::{GameId, LeagueId, PlayerId, TeamId};
pub use stat::StatKey;
