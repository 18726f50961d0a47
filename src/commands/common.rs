//! Common utilities and helper functions shared across commands.

use serde::Serialize;
use tracing::debug;

use crate::{
    cli::types::StatKey,
    storage::{LeagueData, StatsDatabase},
    LeagueId, Result, StatsError,
};

use super::resolve_league_id;

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub league_id: LeagueId,
    pub data: LeagueData,
}

impl CommandContext {
    /// Resolve the league and load its rows from the default database
    pub fn new(league_id: Option<LeagueId>) -> Result<Self> {
        let league_id = resolve_league_id(league_id)?;
        let db = StatsDatabase::new()?;
        Self::from_database(league_id, &db)
    }

    /// Load a league's rows from an already open database
    pub fn from_database(league_id: LeagueId, db: &StatsDatabase) -> Result<Self> {
        let data = db.load_league(league_id)?;
        if data.is_empty() {
            return Err(StatsError::NoData);
        }
        debug!(%league_id, "command context ready");
        Ok(Self { league_id, data })
    }
}

/// Pretty-print `value` as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One decimal for averages and percentages, no decimals for whole numbers
pub fn format_stat(key: StatKey, value: f64) -> String {
    if key.is_percentage() {
        format!("{value:.1}%")
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// `value` or a dash when absent
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
