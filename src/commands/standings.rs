//! Standings command implementation

use std::fmt::Write as _;

use crate::{
    cli::CommonArgs,
    stats::{compute_standings, find_tied_games, find_unresolved_games, StandingsRow},
    Game, Result,
};

use super::common::{print_json, CommandContext};

/// Handle the standings command
pub fn handle_standings(common: CommonArgs) -> Result<()> {
    let ctx = CommandContext::new(common.league_id)?;
    let rows = compute_standings(&ctx.data.games, &ctx.data.teams);

    if common.json {
        return print_json(&rows);
    }

    print!("{}", render_standings(&rows));
    let tied = find_tied_games(&ctx.data.games);
    if !tied.is_empty() {
        println!(
            "\n{} completed game(s) with equal scores were not counted as wins or losses",
            tied.len()
        );
    }
    let unresolved = find_unresolved_games(&ctx.data.games, &ctx.data.teams);
    if let Some(note) = unresolved_note(&unresolved) {
        println!("\n{note}");
    }
    Ok(())
}

/// Footnote naming completed games that did not count, if any.
pub fn unresolved_note(games: &[&Game]) -> Option<String> {
    if games.is_empty() {
        return None;
    }
    let ids: Vec<&str> = games.iter().map(|g| g.game_id.as_str()).collect();
    Some(format!(
        "{} completed game(s) left out, a side did not resolve to a distinct team: {}",
        games.len(),
        ids.join(", ")
    ))
}

/// Plain-text league table, one line per team
pub fn render_standings(rows: &[StandingsRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<28} {:>3} {:>3} {:>3} {:>5} {:>5} {:>5} {:>6}",
        "#", "Team", "GP", "W", "L", "PF", "PA", "+/-", "Pct"
    );
    for (i, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<28} {:>3} {:>3} {:>3} {:>5} {:>5} {:>+5} {:>5.1}%",
            i + 1,
            row.team_name,
            row.games_played,
            row.wins,
            row.losses,
            row.points_for,
            row.points_against,
            row.points_diff,
            row.win_pct
        );
    }
    out
}
