//! Best-effort entity resolution over denormalized name columns.
//!
//! Game and stats tables reference teams and players by free text rather
//! than by foreign key, so resolution is a priority chain of rules tried in
//! a fixed order:
//!
//! 1. exact `team_name`
//! 2. exact `short_name`
//! 3. exact entry of `name_variations`
//! 4. (fallback mode only) normalized substring containment, either direction
//!
//! The first rule that matches any candidate wins and lower rules are not
//! consulted. Within a rule, candidates are tried in input order, so a tie
//! goes to whichever team the caller listed first.
//!
//! Not finding a match is a normal outcome, reported as `None`.

use crate::{
    cli::types::LeagueId,
    model::{Player, Team},
};
use serde::Serialize;

/// Trim, lowercase and collapse internal whitespace runs to one space.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether the substring rule is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Exact, short name and alias rules only.
    Strict,
    /// Strict rules, then substring containment.
    Fallback,
}

impl MatchMode {
    pub fn rules(&self) -> &'static [MatchRule] {
        match self {
            MatchMode::Strict => &MatchRule::STRICT,
            MatchMode::Fallback => &MatchRule::FALLBACK,
        }
    }
}

/// One step of the resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    TeamName,
    ShortName,
    Variation,
    Substring,
}

impl MatchRule {
    pub const STRICT: [MatchRule; 3] = [
        MatchRule::TeamName,
        MatchRule::ShortName,
        MatchRule::Variation,
    ];
    pub const FALLBACK: [MatchRule; 4] = [
        MatchRule::TeamName,
        MatchRule::ShortName,
        MatchRule::Variation,
        MatchRule::Substring,
    ];

    /// `query` is trimmed; `normalized` is its [`normalize_name`] form.
    fn matches(&self, query: &str, normalized: &str, team: &Team) -> bool {
        match self {
            MatchRule::TeamName => team.team_name.trim() == query,
            MatchRule::ShortName => team
                .short_name
                .as_deref()
                .is_some_and(|short| short.trim() == query),
            MatchRule::Variation => team.variations().any(|v| v == query),
            MatchRule::Substring => {
                std::iter::once(team.team_name.as_str())
                    .chain(team.short_name.as_deref())
                    .map(normalize_name)
                    .filter(|candidate| !candidate.is_empty())
                    .any(|candidate| {
                        candidate.contains(normalized) || normalized.contains(candidate.as_str())
                    })
            }
        }
    }
}

/// A resolved team together with its position in the candidate slice and
/// the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamMatch<'a> {
    pub team: &'a Team,
    pub index: usize,
    pub rule: MatchRule,
}

/// Run the resolution chain.
///
/// `scope`, when given, is a hard filter on `league_id`. Without it every
/// team is a candidate, which is only appropriate when the league is
/// genuinely unknown.
pub fn resolve_team<'a>(
    query: &str,
    teams: &'a [Team],
    scope: Option<LeagueId>,
    mode: MatchMode,
) -> Option<TeamMatch<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let normalized = normalize_name(query);

    mode.rules().iter().find_map(|rule| {
        teams
            .iter()
            .enumerate()
            .filter(|(_, team)| scope.map_or(true, |league| team.league_id == league))
            .find(|(_, team)| rule.matches(query, &normalized, team))
            .map(|(index, team)| TeamMatch {
                team,
                index,
                rule: *rule,
            })
    })
}

/// Strict resolution: exact name, short name or alias.
pub fn match_team<'a>(query: &str, teams: &'a [Team], scope: Option<LeagueId>) -> Option<&'a Team> {
    resolve_team(query, teams, scope, MatchMode::Strict).map(|m| m.team)
}

/// Strict resolution followed by substring containment.
pub fn match_team_fuzzy<'a>(
    query: &str,
    teams: &'a [Team],
    scope: Option<LeagueId>,
) -> Option<&'a Team> {
    resolve_team(query, teams, scope, MatchMode::Fallback).map(|m| m.team)
}

/// Canonical display name for a raw team string, or the raw string itself
/// when it does not resolve.
pub fn display_team_name<'a>(raw: &'a str, teams: &'a [Team], scope: Option<LeagueId>) -> &'a str {
    match match_team_fuzzy(raw, teams, scope) {
        Some(team) => team.display_name(),
        None => raw,
    }
}

/// Join predicate for player rows that share no id.
///
/// True when the raw strings are equal or their normalized forms are.
pub fn match_player(name_a: &str, name_b: &str) -> bool {
    name_a == name_b || normalize_name(name_a) == normalize_name(name_b)
}

/// First player in scope whose name matches.
pub fn find_player<'a>(
    name: &str,
    players: &'a [Player],
    scope: Option<LeagueId>,
) -> Option<&'a Player> {
    if name.trim().is_empty() {
        return None;
    }
    players
        .iter()
        .filter(|p| scope.map_or(true, |league| p.league_id == league))
        .find(|p| match_player(&p.name, name))
}
