//! Command implementations for the hoops-stats CLI

pub mod audit;
pub mod common;
pub mod compare;
pub mod highs;
pub mod import;
pub mod leaders;
pub mod player;
pub mod resolve;
pub mod schedule;
pub mod standings;

#[cfg(test)]
mod tests;

use crate::{LeagueId, Result, StatsError, LEAGUE_ID_ENV_VAR};

/// `league_id` when given, otherwise `$HOOPS_STATS_LEAGUE_ID`.
///
/// An unset variable is `MissingLeagueId`; a set but malformed one is
/// `InvalidLeagueId`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) if !raw.trim().is_empty() => raw.parse::<LeagueId>(),
        _ => Err(StatsError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}
