//! Name coverage audit.
//!
//! Reports which team and player strings used across the game and averages
//! tables resolve to a canonical record, and which pairs of distinct strings
//! look like spellings of the same name. The duplicate report is a hint for
//! whoever maintains `name_variations`, not a merge decision.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;

use crate::{
    cli::types::LeagueId,
    core::{find_player, normalize_name, MatchMode, TeamResolver},
    model::{AverageRow, Game, GameRow, Player, Team},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateReason {
    /// Identical once whitespace is removed (case-insensitive).
    Whitespace,
    /// One is a case-insensitive substring of the other.
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicatePair {
    pub first: String,
    pub second: String,
    pub reason: DuplicateReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageAudit {
    pub covered: Vec<String>,
    pub uncovered: Vec<String>,
    pub potential_duplicates: Vec<DuplicatePair>,
}

/// Trimmed, non-empty names in first-seen order, without repeats.
pub fn distinct_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref().trim();
            (!name.is_empty() && seen.insert(name.to_string())).then(|| name.to_string())
        })
        .collect()
}

/// Partition team names by whether strict matching resolves them.
///
/// `scope` restricts candidates to one league; `None` checks against every
/// team.
pub fn audit_entity_coverage(
    names_in_use: &[String],
    teams: &[Team],
    scope: Option<LeagueId>,
) -> CoverageAudit {
    let names = distinct_names(names_in_use);
    let resolver = TeamResolver::new(teams);
    let resolved: Vec<bool> = names
        .par_iter()
        .map(|name| resolver.resolve(name, scope, MatchMode::Strict).is_some())
        .collect();

    partition(names, &resolved)
}

/// Partition player names by whether any player in scope matches them.
pub fn audit_player_coverage(
    names_in_use: &[String],
    players: &[Player],
    scope: Option<LeagueId>,
) -> CoverageAudit {
    let names = distinct_names(names_in_use);
    let resolved: Vec<bool> = names
        .par_iter()
        .map(|name| find_player(name, players, scope).is_some())
        .collect();

    partition(names, &resolved)
}

/// Pairs of distinct names that probably denote the same entity.
///
/// Pairs are reported once, `first` preceding `second` in input order.
pub fn potential_duplicates(names: &[String]) -> Vec<DuplicatePair> {
    let keyed: Vec<(String, String)> = names
        .iter()
        .map(|n| (normalize_name(n), compact(n)))
        .collect();
    let keyed = &keyed;

    (0..names.len())
        .into_par_iter()
        .flat_map_iter(move |i| {
            (i + 1..names.len()).filter_map(move |j| {
                let reason = duplicate_reason(&keyed[i], &keyed[j])?;
                Some(DuplicatePair {
                    first: names[i].clone(),
                    second: names[j].clone(),
                    reason,
                })
            })
        })
        .collect()
}

/// Every home/away name in `games` plus every team name in `rows`.
pub fn team_names_in_use(games: &[Game], rows: &[GameRow]) -> Vec<String> {
    let from_games = games
        .iter()
        .flat_map(|g| [g.home_team.as_deref(), g.away_team.as_deref()])
        .flatten();
    let from_rows = rows.iter().filter_map(|r| r.team_name.as_deref());
    distinct_names(from_games.chain(from_rows))
}

/// Every player name in game rows and averages.
pub fn player_names_in_use(rows: &[GameRow], averages: &[AverageRow]) -> Vec<String> {
    let from_rows = rows.iter().filter_map(|r| r.player_name.as_deref());
    let from_averages = averages.iter().map(|a| a.player_name.as_str());
    distinct_names(from_rows.chain(from_averages))
}

fn partition(names: Vec<String>, resolved: &[bool]) -> CoverageAudit {
    let mut audit = CoverageAudit {
        potential_duplicates: potential_duplicates(&names),
        ..CoverageAudit::default()
    };
    for (name, ok) in names.into_iter().zip(resolved) {
        if *ok {
            audit.covered.push(name);
        } else {
            audit.uncovered.push(name);
        }
    }
    audit
}

/// `a` and `b` are `(normalized, compact)` keys of two names.
fn duplicate_reason(a: &(String, String), b: &(String, String)) -> Option<DuplicateReason> {
    let (lower_a, compact_a) = a;
    let (lower_b, compact_b) = b;
    if compact_a == compact_b {
        return Some(DuplicateReason::Whitespace);
    }
    let contains = !lower_a.is_empty()
        && !lower_b.is_empty()
        && (lower_a.contains(lower_b.as_str()) || lower_b.contains(lower_a.as_str()));
    contains.then_some(DuplicateReason::Substring)
}

fn compact(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
