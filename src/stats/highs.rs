//! Season highs: the best single-game performances.
//!
//! Unlike leaderboards there is no games-played gate; one big night is
//! enough to qualify.

use serde::Serialize;

use super::top_n_desc;
use crate::{cli::types::StatKey, model::GameRow};

/// Top `n` game rows by `category`, highest first. Rows without the value
/// are skipped; equal values keep their input order.
pub fn top_n_single_game_performances(
    rows: &[GameRow],
    category: StatKey,
    n: usize,
) -> Vec<&GameRow> {
    top_n_desc(
        rows.iter()
            .filter_map(|row| row.value(category).map(|v| (row, v))),
        n,
    )
}

/// The single best row for `category`.
pub fn season_high(rows: &[GameRow], category: StatKey) -> Option<&GameRow> {
    top_n_single_game_performances(rows, category, 1)
        .into_iter()
        .next()
}

#[derive(Debug, Clone, Serialize)]
pub struct SeasonHigh<'a> {
    pub category: StatKey,
    pub value: f64,
    pub row: &'a GameRow,
}

/// One record per category that has at least one value.
pub fn season_highs<'a>(rows: &'a [GameRow], categories: &[StatKey]) -> Vec<SeasonHigh<'a>> {
    categories
        .iter()
        .filter_map(|&category| {
            let row = season_high(rows, category)?;
            Some(SeasonHigh {
                category,
                value: row.value(category)?,
                row,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::{GameId, LeagueId},
        model::StatLine,
    };

    fn row(game: &str, player: &str, stats: &[(StatKey, f64)]) -> GameRow {
        GameRow {
            game_id: GameId::new(game),
            league_id: LeagueId::new(1),
            player_id: None,
            player_name: Some(player.to_string()),
            team_id: None,
            team_name: None,
            game_date: None,
            stats: stats.iter().copied().collect::<StatLine>(),
        }
    }

    #[test]
    fn test_top_single_games() {
        let rows = vec![
            row("G1", "A", &[(StatKey::Points, 31.0)]),
            row("G1", "B", &[]),
            row("G2", "A", &[(StatKey::Points, 44.0)]),
            row("G2", "C", &[(StatKey::Points, 31.0)]),
        ];
        let top = top_n_single_game_performances(&rows, StatKey::Points, 3);
        let picked: Vec<(&str, &str)> = top
            .iter()
            .map(|r| (r.game_id.as_str(), r.player_name.as_deref().unwrap_or("")))
            .collect();
        assert_eq!(picked, vec![("G2", "A"), ("G1", "A"), ("G2", "C")]);
    }

    #[test]
    fn test_zero_values_still_count() {
        let rows = vec![row("G1", "A", &[(StatKey::Steals, 0.0)])];
        assert_eq!(top_n_single_game_performances(&rows, StatKey::Steals, 5).len(), 1);
    }

    #[test]
    fn test_season_high_and_highs() {
        let rows = vec![
            row("G1", "A", &[(StatKey::Rebounds, 12.0), (StatKey::Assists, 3.0)]),
            row("G2", "B", &[(StatKey::Rebounds, 15.0)]),
        ];
        let best = season_high(&rows, StatKey::Rebounds).unwrap();
        assert_eq!(best.player_name.as_deref(), Some("B"));

        let highs = season_highs(&rows, &[StatKey::Rebounds, StatKey::Assists, StatKey::Blocks]);
        assert_eq!(highs.len(), 2);
        assert_eq!(highs[1].category, StatKey::Assists);
        assert_eq!(highs[1].value, 3.0);

        assert!(season_high(&[], StatKey::Points).is_none());
    }
}
