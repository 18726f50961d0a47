//! League standings from completed games.

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    cli::types::{LeagueId, TeamId},
    core::{MatchMode, TeamResolver},
    model::{Game, Team},
};

/// Won/lost record and point differential for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub league_id: LeagueId,
    pub team_name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub points_diff: i64,
    /// 0-100; zero when no games were played.
    pub win_pct: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    games_played: u32,
    wins: u32,
    losses: u32,
    points_for: u32,
    points_against: u32,
}

impl Accumulator {
    fn record(&mut self, scored: u32, allowed: u32) {
        self.games_played += 1;
        self.points_for += scored;
        self.points_against += allowed;
        // Strictly greater only: an equal score is neither a win nor a loss.
        if scored > allowed {
            self.wins += 1;
        } else if scored < allowed {
            self.losses += 1;
        }
    }
}

/// Compute standings for `teams` from the completed subset of `games`.
///
/// Every team gets a row, including teams without a completed game. Rows are
/// ordered by wins, then point differential, both descending; the sort is
/// stable so equal records keep the order of `teams`.
///
/// A side is resolved by `home_team_id`/`away_team_id` when present and by
/// strict, league-scoped name matching otherwise. Games with an unresolved
/// side are skipped with a warning; [`find_unresolved_games`] lists them. A game with equal final scores counts
/// toward games played and points but credits neither a win nor a loss.
pub fn compute_standings(games: &[Game], teams: &[Team]) -> Vec<StandingsRow> {
    let resolver = TeamResolver::new(teams);
    let mut accumulators = vec![Accumulator::default(); teams.len()];

    for game in games {
        let Some((home_score, away_score)) = game.final_score() else {
            continue;
        };

        let (home, away) = match resolve_sides(&resolver, game) {
            Sides::Resolved(home, away) => (home, away),
            Sides::Unresolved => {
                warn!(
                    game_id = %game.game_id,
                    home = ?game.home_team,
                    away = ?game.away_team,
                    "skipping completed game with an unresolved team"
                );
                continue;
            }
            Sides::SameTeam => {
                warn!(game_id = %game.game_id, "skipping game where a team plays itself");
                continue;
            }
        };
        if home_score == away_score {
            warn!(
                game_id = %game.game_id,
                score = home_score,
                "completed game has equal scores; counted as neither win nor loss"
            );
        }

        accumulators[home].record(home_score, away_score);
        accumulators[away].record(away_score, home_score);
    }

    let mut rows: Vec<StandingsRow> = teams
        .iter()
        .zip(accumulators)
        .map(|(team, acc)| StandingsRow {
            team_id: team.team_id,
            league_id: team.league_id,
            team_name: team.team_name.clone(),
            games_played: acc.games_played,
            wins: acc.wins,
            losses: acc.losses,
            points_for: acc.points_for,
            points_against: acc.points_against,
            points_diff: acc.points_for as i64 - acc.points_against as i64,
            win_pct: win_pct(acc.wins, acc.games_played),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.points_diff.cmp(&a.points_diff))
    });
    debug!(teams = rows.len(), "standings computed");
    rows
}

/// Completed games that [`compute_standings`] leaves out: a side that does
/// not resolve to a team of the game's league, or both sides resolving to
/// the same team.
pub fn find_unresolved_games<'a>(games: &'a [Game], teams: &[Team]) -> Vec<&'a Game> {
    let resolver = TeamResolver::new(teams);
    games
        .iter()
        .filter(|g| g.is_completed())
        .filter(|g| !matches!(resolve_sides(&resolver, g), Sides::Resolved(..)))
        .collect()
}

/// Completed games whose final scores are equal.
pub fn find_tied_games(games: &[Game]) -> Vec<&Game> {
    games.iter().filter(|g| g.is_tied()).collect()
}

/// `wins / games_played * 100`, or 0 for a team without games.
pub fn win_pct(wins: u32, games_played: u32) -> f64 {
    if games_played == 0 {
        0.0
    } else {
        wins as f64 / games_played as f64 * 100.0
    }
}

enum Sides {
    Resolved(usize, usize),
    Unresolved,
    SameTeam,
}

fn resolve_sides(resolver: &TeamResolver<'_>, game: &Game) -> Sides {
    let home = resolve_side(
        resolver,
        game.league_id,
        game.home_team_id,
        game.home_team.as_deref(),
    );
    let away = resolve_side(
        resolver,
        game.league_id,
        game.away_team_id,
        game.away_team.as_deref(),
    );
    match (home, away) {
        (Some(home), Some(away)) if home == away => Sides::SameTeam,
        (Some(home), Some(away)) => Sides::Resolved(home, away),
        _ => Sides::Unresolved,
    }
}

fn resolve_side(
    resolver: &TeamResolver<'_>,
    league: LeagueId,
    team_id: Option<TeamId>,
    team_name: Option<&str>,
) -> Option<usize> {
    match team_id {
        Some(id) => resolver
            .teams()
            .iter()
            .position(|t| t.league_id == league && t.team_id == id),
        None => resolver
            .resolve(team_name?, Some(league), MatchMode::Strict)
            .map(|m| m.index),
    }
}
