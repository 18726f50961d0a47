//! Data models for the storage layer

use crate::{
    cli::types::LeagueId,
    core::normalize_name,
    model::{AverageRow, Game, GameRow, Player, Team},
};
use serde::{Deserialize, Serialize};

/// Every row stored for one league, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueData {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub game_rows: Vec<GameRow>,
    #[serde(default)]
    pub averages: Vec<AverageRow>,
}

impl LeagueData {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
            && self.players.is_empty()
            && self.games.is_empty()
            && self.game_rows.is_empty()
            && self.averages.is_empty()
    }

    /// Keep only rows belonging to `league`
    pub fn retain_league(&mut self, league: LeagueId) {
        self.teams.retain(|t| t.league_id == league);
        self.players.retain(|p| p.league_id == league);
        self.games.retain(|g| g.league_id == league);
        self.game_rows.retain(|r| r.league_id == league);
        self.averages.retain(|a| a.league_id == league);
    }
}

/// Row counts written by one import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub teams: usize,
    pub players: usize,
    pub games: usize,
    pub game_rows: usize,
    pub averages: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.teams + self.players + self.games + self.game_rows + self.averages
    }
}

/// Natural key of a game row within its game: player id, else player
/// name, else team.
pub(crate) fn game_row_key(row: &GameRow) -> String {
    if let Some(id) = row.player_id {
        return format!("p:{id}");
    }
    if let Some(name) = row.player_name.as_deref().filter(|n| !n.trim().is_empty()) {
        return format!("n:{}", normalize_name(name));
    }
    match (row.team_id, row.team_name.as_deref()) {
        (Some(id), _) => format!("t:{id}"),
        (None, Some(name)) => format!("tn:{}", normalize_name(name)),
        (None, None) => "anon".to_string(),
    }
}

/// Natural key of an averages row within its league
pub(crate) fn average_row_key(row: &AverageRow) -> String {
    match row.player_id {
        Some(id) => format!("p:{id}"),
        None => format!("n:{}", normalize_name(&row.player_name)),
    }
}
