//! Leaders command implementation

use serde::Serialize;
use std::fmt::Write as _;

use crate::{
    cli::{types::StatKey, CommonArgs},
    core::display_team_name,
    stats::{assign_ranks, LeaderboardQuery, MinAttempts},
    PlayerId, Result,
};

use super::common::{format_stat, or_dash, print_json, CommandContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderEntry {
    /// Position on this leaderboard.
    pub position: usize,
    /// Rank among every player with a value, supplied or derived.
    pub league_rank: Option<u32>,
    pub player_id: Option<PlayerId>,
    pub player_name: String,
    pub team: Option<String>,
    pub games_played: u32,
    pub value: f64,
}

/// Parameters for the leaders command
#[derive(Debug, Clone)]
pub struct LeadersParams {
    pub common: CommonArgs,
    pub category: StatKey,
    pub top: usize,
    pub min_games: u32,
    pub min_attempts: Option<u32>,
}

/// Handle the leaders command
pub fn handle_leaders(params: LeadersParams) -> Result<()> {
    let mut query = LeaderboardQuery::new(params.category)
        .top(params.top)
        .min_games(params.min_games);
    if let Some(threshold) = params.min_attempts {
        query = query.min_attempts(MinAttempts::for_category(params.category, threshold)?);
    }

    let ctx = CommandContext::new(params.common.league_id)?;
    let entries = build_leaderboard(&ctx, &query);

    if params.common.json {
        return print_json(&entries);
    }
    if entries.is_empty() {
        println!("No qualifying players for {}", params.category);
        return Ok(());
    }
    print!("{}", render_leaderboard(params.category, &entries));
    Ok(())
}

/// Run `query` over the league's averages, with team names canonicalized
pub fn build_leaderboard(ctx: &CommandContext, query: &LeaderboardQuery) -> Vec<LeaderEntry> {
    let mut rows = ctx.data.averages.clone();
    assign_ranks(&mut rows, query.category);

    query
        .run(&rows)
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| {
            Some(LeaderEntry {
                position: i + 1,
                league_rank: row.rank(query.category),
                player_id: row.player_id,
                player_name: row.player_name.clone(),
                team: row
                    .team_name
                    .as_deref()
                    .map(|raw| display_team_name(raw, &ctx.data.teams, Some(ctx.league_id)).to_string()),
                games_played: row.games_played,
                value: row.value(query.category)?,
            })
        })
        .collect()
}

pub fn render_leaderboard(category: StatKey, entries: &[LeaderEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<26} {:<20} {:>3} {:>8}",
        "#", "Player", "Team", "GP", category.column()
    );
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>3}  {:<26} {:<20} {:>3} {:>8}",
            entry.position,
            entry.player_name,
            or_dash(entry.team.as_deref()),
            entry.games_played,
            format_stat(category, entry.value)
        );
    }
    out
}
