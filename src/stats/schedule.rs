//! Schedule views and per-player joins.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;

use super::attributes::parse_date;
use crate::{
    cli::types::{LeagueId, PlayerId},
    core::match_player,
    model::{AverageRow, Game, GameRow, Player},
};

#[derive(Debug, Clone, Default, Serialize)]
pub struct Schedule<'a> {
    /// In input order.
    pub completed: Vec<&'a Game>,
    /// Soonest first; undated games last.
    pub upcoming: Vec<&'a Game>,
}

/// Split a league's games into completed and upcoming.
///
/// Upcoming games are ordered by date, then round. Games with the same key
/// keep their input order.
pub fn split_schedule(games: &[Game], league: LeagueId) -> Schedule<'_> {
    let (completed, mut upcoming): (Vec<&Game>, Vec<&Game>) = games
        .iter()
        .filter(|g| g.league_id == league)
        .partition(|g| g.is_completed());

    upcoming.sort_by_key(|g| {
        let date = g.date.as_deref().and_then(parse_date);
        (date.is_none(), date, g.round.unwrap_or(u32::MAX))
    });

    Schedule {
        completed,
        upcoming,
    }
}

/// Whether a row belongs to `player`: by id when the row has one, otherwise
/// by name.
fn row_belongs_to(player: &Player, row_player_id: Option<PlayerId>, row_name: Option<&str>) -> bool {
    match row_player_id {
        Some(id) => id == player.player_id,
        None => row_name.is_some_and(|name| match_player(&player.name, name)),
    }
}

/// A player's game rows, most recent first. Undated rows go last.
pub fn player_game_log<'a>(player: &Player, rows: &'a [GameRow]) -> Vec<&'a GameRow> {
    let mut log: Vec<(&GameRow, Option<NaiveDate>)> = rows
        .iter()
        .filter(|r| r.league_id == player.league_id)
        .filter(|r| row_belongs_to(player, r.player_id, r.player_name.as_deref()))
        .map(|r| (r, r.game_date.as_deref().and_then(parse_date)))
        .collect();

    log.sort_by_key(|(_, date)| (date.is_none(), Reverse(*date)));
    log.into_iter().map(|(row, _)| row).collect()
}

/// The averages row for `player`, joined the same way as the game log.
pub fn find_average_row<'a>(player: &Player, rows: &'a [AverageRow]) -> Option<&'a AverageRow> {
    rows.iter()
        .filter(|r| r.league_id == player.league_id)
        .find(|r| row_belongs_to(player, r.player_id, Some(&r.player_name)))
}
