//! Audit command implementation

use serde::Serialize;
use std::fmt::Write as _;

use crate::{
    cli::CommonArgs,
    stats::{
        audit::{player_names_in_use, team_names_in_use},
        audit_entity_coverage, audit_player_coverage, find_tied_games, find_unresolved_games,
        CoverageAudit,
    },
    GameId, LeagueId, Result,
};

use super::common::{print_json, CommandContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub league_id: LeagueId,
    pub teams: CoverageAudit,
    pub players: CoverageAudit,
    /// Completed games with equal scores.
    pub tied_games: Vec<GameId>,
    /// Completed games left out of standings.
    pub unresolved_games: Vec<GameId>,
}

/// Handle the audit command
pub fn handle_audit(common: CommonArgs) -> Result<()> {
    let ctx = CommandContext::new(common.league_id)?;
    let report = build_audit(&ctx);

    if common.json {
        return print_json(&report);
    }
    print!("{}", render_audit(&report));
    Ok(())
}

pub fn build_audit(ctx: &CommandContext) -> AuditReport {
    let scope = Some(ctx.league_id);
    let data = &ctx.data;

    let team_names = team_names_in_use(&data.games, &data.game_rows);
    let player_names = player_names_in_use(&data.game_rows, &data.averages);

    AuditReport {
        league_id: ctx.league_id,
        teams: audit_entity_coverage(&team_names, &data.teams, scope),
        players: audit_player_coverage(&player_names, &data.players, scope),
        tied_games: find_tied_games(&data.games)
            .into_iter()
            .map(|g| g.game_id.clone())
            .collect(),
        unresolved_games: find_unresolved_games(&data.games, &data.teams)
            .into_iter()
            .map(|g| g.game_id.clone())
            .collect(),
    }
}

pub fn render_audit(report: &AuditReport) -> String {
    let mut out = String::new();
    render_section(&mut out, "Team names", &report.teams);
    render_section(&mut out, "Player names", &report.players);
    if !report.tied_games.is_empty() {
        let ids: Vec<&str> = report.tied_games.iter().map(GameId::as_str).collect();
        let _ = writeln!(out, "Games with equal scores: {}", ids.join(", "));
    }
    if !report.unresolved_games.is_empty() {
        let ids: Vec<&str> = report.unresolved_games.iter().map(GameId::as_str).collect();
        let _ = writeln!(out, "Games left out of standings: {}", ids.join(", "));
    }
    out
}

fn render_section(out: &mut String, title: &str, audit: &CoverageAudit) {
    let _ = writeln!(
        out,
        "{title}: {} covered, {} uncovered",
        audit.covered.len(),
        audit.uncovered.len()
    );
    for name in &audit.uncovered {
        let _ = writeln!(out, "  ✗ {name}");
    }
    for pair in &audit.potential_duplicates {
        let _ = writeln!(out, "  ? \"{}\" / \"{}\"", pair.first, pair.second);
    }
}
