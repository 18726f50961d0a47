//! Compare command implementation

use serde::Serialize;
use std::fmt::Write as _;

use crate::{
    cli::{types::StatKey, CommonArgs},
    core::{find_player, match_player},
    model::AverageRow,
    stats::{
        compare::{tally, DEFAULT_COMPARISON},
        compare_players, find_average_row, CategoryComparison, Edge,
    },
    Result, StatsError,
};

use super::common::{format_stat, or_dash, print_json, CommandContext};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    pub categories: Vec<CategoryComparison>,
    pub left_leads: usize,
    pub right_leads: usize,
}

/// Handle the compare command
pub fn handle_compare(
    common: CommonArgs,
    left: &str,
    right: &str,
    categories: Option<Vec<StatKey>>,
) -> Result<()> {
    let ctx = CommandContext::new(common.league_id)?;
    let categories = categories.unwrap_or_else(|| DEFAULT_COMPARISON.to_vec());
    let report = build_comparison(&ctx, left, right, &categories)?;

    if common.json {
        return print_json(&report);
    }
    print!("{}", render_comparison(&report));
    Ok(())
}

pub fn build_comparison(
    ctx: &CommandContext,
    left: &str,
    right: &str,
    categories: &[StatKey],
) -> Result<ComparisonReport> {
    let l = averages_for(ctx, left)?;
    let r = averages_for(ctx, right)?;
    let comparisons = compare_players(&l.stats, &r.stats, categories);
    let (left_leads, right_leads) = tally(&comparisons);

    Ok(ComparisonReport {
        left: l.player_name.clone(),
        right: r.player_name.clone(),
        categories: comparisons,
        left_leads,
        right_leads,
    })
}

/// Averages row for `name`: through the players table when the name is
/// known there, otherwise by the name on the averages row itself.
fn averages_for<'a>(ctx: &'a CommandContext, name: &str) -> Result<&'a AverageRow> {
    let data = &ctx.data;
    find_player(name, &data.players, Some(ctx.league_id))
        .and_then(|player| find_average_row(player, &data.averages))
        .or_else(|| {
            data.averages
                .iter()
                .filter(|a| a.league_id == ctx.league_id)
                .find(|a| match_player(&a.player_name, name))
        })
        .ok_or_else(|| StatsError::PlayerNotFound {
            name: name.to_string(),
        })
}

pub fn render_comparison(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:>10} {:>10}", "", report.left, report.right);
    for c in &report.categories {
        let marker = match c.edge {
            Edge::Left => "<",
            Edge::Right => ">",
            Edge::Even => "=",
            Edge::Unavailable => " ",
        };
        let _ = writeln!(
            out,
            "{:<8} {:>10} {:>10}  {marker}",
            c.category.column(),
            or_dash(c.left.map(|v| format_stat(c.category, v))),
            or_dash(c.right.map(|v| format_stat(c.category, v)))
        );
    }
    let _ = writeln!(
        out,
        "Categories led: {} {} - {} {}",
        report.left, report.left_leads, report.right_leads, report.right
    );
    out
}
