//! Resolve command implementation

use serde::Serialize;

use crate::{
    cli::CommonArgs,
    core::{resolve_team, MatchMode, MatchRule},
    model::Team,
    Result,
};

use super::common::{print_json, CommandContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub query: String,
    pub team: Option<Team>,
    pub rule: Option<MatchRule>,
}

/// Handle the resolve command
pub fn handle_resolve(common: CommonArgs, name: &str, fuzzy: bool) -> Result<()> {
    let ctx = CommandContext::new(common.league_id)?;
    let resolution = build_resolution(&ctx, name, fuzzy);

    if common.json {
        return print_json(&resolution);
    }
    match (&resolution.team, resolution.rule) {
        (Some(team), Some(rule)) => println!(
            "✓ \"{}\" -> {} (id {}, matched by {:?})",
            name, team.team_name, team.team_id, rule
        ),
        _ => println!("✗ \"{}\" does not match any team in league {}", name, ctx.league_id),
    }
    Ok(())
}

pub fn build_resolution(ctx: &CommandContext, name: &str, fuzzy: bool) -> Resolution {
    let mode = if fuzzy {
        MatchMode::Fallback
    } else {
        MatchMode::Strict
    };
    let found = resolve_team(name, &ctx.data.teams, Some(ctx.league_id), mode);
    Resolution {
        query: name.to_string(),
        team: found.map(|m| m.team.clone()),
        rule: found.map(|m| m.rule),
    }
}
