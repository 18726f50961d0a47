//! Aggregations over league rows
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, and equal inputs always produce equally ordered outputs.
//! - `standings`: won/lost records from completed games
//! - `leaders`: top-N season averages with sample-size gates
//! - `highs`: single-game records
//! - `attributes`: age and height normalization
//! - `audit`: name coverage and duplicate-name report
//! - `compare`: head-to-head player comparison
//! - `schedule`: completed/upcoming split and per-player row joins

pub mod attributes;
pub mod audit;
pub mod compare;
pub mod highs;
pub mod leaders;
pub mod schedule;
pub mod standings;

pub use attributes::{calculate_age, calculate_age_today, normalize_height, parse_date};
pub use audit::{audit_entity_coverage, audit_player_coverage, CoverageAudit};
pub use compare::{compare_players, CategoryComparison, Edge};
pub use highs::{season_high, top_n_single_game_performances};
pub use leaders::{
    assign_ranks, top_n_by_category, LeaderboardQuery, MinAttempts, DEFAULT_MIN_GAMES, DEFAULT_TOP_N,
};
pub use schedule::{find_average_row, player_game_log, split_schedule, Schedule};
pub use standings::{compute_standings, find_tied_games, find_unresolved_games, StandingsRow};

/// Highest `n` items by value. The sort is stable, so equal values keep the
/// order in which `items` produced them.
pub(crate) fn top_n_desc<'a, T>(items: impl Iterator<Item = (&'a T, f64)>, n: usize) -> Vec<&'a T> {
    let mut ranked: Vec<(&'a T, f64)> = items.collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(n).map(|(item, _)| item).collect()
}
