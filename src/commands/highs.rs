//! Season highs command implementation

use serde::Serialize;
use std::fmt::Write as _;

use crate::{
    cli::{types::StatKey, CommonArgs},
    core::display_team_name,
    stats::top_n_single_game_performances,
    GameId, Result,
};

use super::common::{format_stat, or_dash, print_json, CommandContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighEntry {
    pub position: usize,
    pub game_id: GameId,
    pub game_date: Option<String>,
    pub player_name: Option<String>,
    pub team: Option<String>,
    pub value: f64,
}

/// Handle the highs command
pub fn handle_highs(common: CommonArgs, category: StatKey, top: usize) -> Result<()> {
    let ctx = CommandContext::new(common.league_id)?;
    let entries = build_highs(&ctx, category, top);

    if common.json {
        return print_json(&entries);
    }
    if entries.is_empty() {
        println!("No game rows record {}", category);
        return Ok(());
    }

    let mut out = String::new();
    for entry in &entries {
        let _ = writeln!(
            out,
            "{:>3}  {:>8}  {:<26} {:<20} {:<10} {}",
            entry.position,
            format_stat(category, entry.value),
            or_dash(entry.player_name.as_deref()),
            or_dash(entry.team.as_deref()),
            or_dash(entry.game_date.as_deref()),
            entry.game_id
        );
    }
    print!("{out}");
    Ok(())
}

pub fn build_highs(ctx: &CommandContext, category: StatKey, top: usize) -> Vec<HighEntry> {
    top_n_single_game_performances(&ctx.data.game_rows, category, top)
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| {
            Some(HighEntry {
                position: i + 1,
                game_id: row.game_id.clone(),
                game_date: row.game_date.clone(),
                player_name: row.player_name.clone(),
                team: row
                    .team_name
                    .as_deref()
                    .map(|raw| display_team_name(raw, &ctx.data.teams, Some(ctx.league_id)).to_string()),
                value: row.value(category)?,
            })
        })
        .collect()
}
