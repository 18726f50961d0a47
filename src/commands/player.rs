//! Player profile command implementation

use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt::Write as _;

use crate::{
    cli::{types::StatKey, CommonArgs},
    core::find_player,
    model::{AverageRow, GameRow, Player},
    stats::{
        attributes::{player_age, player_height_cm},
        find_average_row, player_game_log,
    },
    Result, StatsError,
};

use super::common::{format_stat, or_dash, print_json, CommandContext};

/// Categories shown in the text profile.
const PROFILE_STATS: [StatKey; 6] = [
    StatKey::Points,
    StatKey::Rebounds,
    StatKey::Assists,
    StatKey::Steals,
    StatKey::Blocks,
    StatKey::FieldGoalPct,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub player: Player,
    pub team: Option<String>,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub averages: Option<AverageRow>,
    pub recent_games: Vec<GameRow>,
}

/// Handle the player command
pub fn handle_player(common: CommonArgs, name: &str, games: usize) -> Result<()> {
    let ctx = CommandContext::new(common.league_id)?;
    let profile = build_profile(&ctx, name, games, Local::now().date_naive())?;

    if common.json {
        return print_json(&profile);
    }
    print!("{}", render_profile(&profile));
    Ok(())
}

/// Look up `name` and gather its derived attributes and rows as of `today`
pub fn build_profile(
    ctx: &CommandContext,
    name: &str,
    games: usize,
    today: NaiveDate,
) -> Result<PlayerProfile> {
    let data = &ctx.data;
    let player = find_player(name, &data.players, Some(ctx.league_id)).ok_or_else(|| {
        StatsError::PlayerNotFound {
            name: name.to_string(),
        }
    })?;

    let team = player.current_team_id.and_then(|id| {
        data.teams
            .iter()
            .find(|t| t.team_id == id && t.league_id == player.league_id)
            .map(|t| t.display_name().to_string())
    });

    Ok(PlayerProfile {
        player: player.clone(),
        team,
        age: player_age(player, today),
        height_cm: player_height_cm(player),
        averages: find_average_row(player, &data.averages).cloned(),
        recent_games: player_game_log(player, &data.game_rows)
            .into_iter()
            .take(games)
            .cloned()
            .collect(),
    })
}

pub fn render_profile(profile: &PlayerProfile) -> String {
    let mut out = String::new();
    let player = &profile.player;
    let _ = writeln!(
        out,
        "{} #{} ({})",
        player.name,
        or_dash(player.jersey_number),
        or_dash(profile.team.as_deref())
    );
    let _ = writeln!(
        out,
        "Age: {}  Height: {}",
        or_dash(profile.age),
        or_dash(profile.height_cm.map(|h| format!("{h:.0} cm")))
    );

    if let Some(avg) = &profile.averages {
        let line: Vec<String> = PROFILE_STATS
            .iter()
            .filter_map(|&key| Some(format!("{} {}", key, format_stat(key, avg.value(key)?))))
            .collect();
        let _ = writeln!(out, "Averages ({} GP): {}", avg.games_played, line.join("  "));
    }

    if !profile.recent_games.is_empty() {
        let _ = writeln!(out, "Recent games:");
        for row in &profile.recent_games {
            let _ = writeln!(
                out,
                "  {:<10} {:<8} {} pts",
                or_dash(row.game_date.as_deref()),
                row.game_id.as_str(),
                or_dash(row.value(StatKey::Points))
            );
        }
    }
    out
}
