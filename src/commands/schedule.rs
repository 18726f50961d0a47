//! Schedule command implementation

use std::fmt::Write as _;

use crate::{
    cli::CommonArgs,
    core::display_team_name,
    model::{Game, Team},
    stats::split_schedule,
    LeagueId, Result,
};

use super::common::{or_dash, print_json, CommandContext};

/// Handle the schedule command
pub fn handle_schedule(common: CommonArgs, upcoming_only: bool) -> Result<()> {
    let ctx = CommandContext::new(common.league_id)?;
    let mut schedule = split_schedule(&ctx.data.games, ctx.league_id);
    if upcoming_only {
        schedule.completed.clear();
    }

    if common.json {
        return print_json(&schedule);
    }

    let mut out = String::new();
    if !upcoming_only {
        let _ = writeln!(out, "Completed ({})", schedule.completed.len());
        for game in &schedule.completed {
            render_game(&mut out, game, &ctx.data.teams, ctx.league_id);
        }
    }
    let _ = writeln!(out, "Upcoming ({})", schedule.upcoming.len());
    for game in &schedule.upcoming {
        render_game(&mut out, game, &ctx.data.teams, ctx.league_id);
    }
    print!("{out}");
    Ok(())
}

fn render_game(out: &mut String, game: &Game, teams: &[Team], league: LeagueId) {
    let name = |raw: Option<&str>| {
        raw.map(|r| display_team_name(r, teams, Some(league)).to_string())
    };
    let score = match game.final_score() {
        Some((home, away)) => format!("{home}-{away}"),
        None => "vs".to_string(),
    };
    let _ = writeln!(
        out,
        "  {:<10} R{:<3} {:>20} {:^7} {:<20}",
        or_dash(game.date.as_deref()),
        or_dash(game.round),
        or_dash(name(game.home_team.as_deref())),
        score,
        or_dash(name(game.away_team.as_deref()))
    );
}
