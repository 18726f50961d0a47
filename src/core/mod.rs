//! Entity resolution for the league data tables
//!
//! - `matching`: the team/player name resolution chain
//! - `cache`: a memoizing resolver built on an LRU cache

pub mod cache;
pub mod matching;

// Re-export commonly used items for convenience
pub use cache::TeamResolver;
pub use matching::{
    display_team_name, find_player, match_player, match_team, match_team_fuzzy, normalize_name,
    resolve_team, MatchMode, MatchRule, TeamMatch,
};
