//! Integration tests for the SQLite store and JSON import

use hoops_stats::{
    commands::import::{import_into, ImportParams},
    stats::{compute_standings, season_high, top_n_by_category},
    storage::*,
    GameId, LeagueId, StatKey,
};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn fixture_files(dir: &TempDir) -> ImportParams {
    ImportParams {
        teams: Some(write_json(
            dir,
            "teams.json",
            r#"[
                {"team_id": 1, "league_id": 1, "team_name": "Hapoel Tel Aviv",
                 "short_name": "Hapoel TA", "name_variations": "HTA|Hapoel T.A."},
                {"team_id": 2, "league_id": 1, "team_name": "Maccabi Haifa"},
                {"team_id": 3, "league_id": 2, "team_name": "Elitzur Netanya"}
            ]"#,
        )),
        players: Some(write_json(
            dir,
            "players.json",
            r#"[
                {"player_id": 10, "league_id": 1, "name": "Avi Cohen",
                 "current_team_id": 1, "date_of_birth": "1995/03/10",
                 "height": "1.98", "jersey_number": "7"}
            ]"#,
        )),
        games: Some(write_json(
            dir,
            "games.json",
            r#"[
                {"code": "G1", "league_id": 1, "home_team": "HTA",
                 "away_team": "Maccabi Haifa", "home_score": 88, "away_score": "80"},
                {"gameid": 2, "league_id": 1, "home_team": "Maccabi Haifa",
                 "away_team": "Hapoel TA", "home_score": 70, "away_score": 75},
                {"game_id": "G3", "league_id": 1, "home_team": "Hapoel Tel Aviv",
                 "away_team": "Maccabi Haifa", "home_score": null, "date": "2024-03-01"}
            ]"#,
        )),
        game_rows: Some(write_json(
            dir,
            "game_rows.json",
            r#"[
                {"game_id": "G1", "league_id": 1, "player_id": 10,
                 "player_name": "Avi Cohen", "team_name": "HTA",
                 "pts": "31", "fg_pct": "55.5%", "plus_minus": 12}
            ]"#,
        )),
        averages: Some(write_json(
            dir,
            "averages.json",
            r#"[
                {"league_id": 1, "player_name": "Avi Cohen", "games_played": "2",
                 "points": 22.5, "reb": null, "pts_rank": 1}
            ]"#,
        )),
        league_id: None,
        replace: false,
    }
}

#[test]
fn test_file_backed_database_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("stats.db");

    {
        let mut db = StatsDatabase::open(&path).unwrap();
        let summary = import_into(&mut db, &fixture_files(&dir)).unwrap();
        assert_eq!(summary.teams, 3);
        assert_eq!(summary.games, 3);
    }

    let db = StatsDatabase::open(&path).unwrap();
    let data = db.load_league(LeagueId::new(1)).unwrap();
    assert_eq!(data.teams.len(), 2);
    assert_eq!(data.players[0].jersey_number, Some(7));

    let ids: Vec<&str> = data.games.iter().map(|g| g.game_id.as_str()).collect();
    assert_eq!(ids, vec!["G1", "2", "G3"]);
    assert!(!data.games[2].is_completed());

    let row = &data.game_rows[0];
    assert_eq!(row.value(StatKey::Points), Some(31.0));
    assert_eq!(row.value(StatKey::FieldGoalPct), Some(55.5));

    let avg = &data.averages[0];
    assert_eq!(avg.games_played, 2);
    assert_eq!(avg.value(StatKey::Points), Some(22.5));
    assert_eq!(avg.value(StatKey::Rebounds), None);
    assert_eq!(avg.rank(StatKey::Points), Some(1));
}

#[test]
fn test_imported_league_produces_standings() {
    let dir = TempDir::new().unwrap();
    let mut db = StatsDatabase::new_in_memory().unwrap();
    import_into(&mut db, &fixture_files(&dir)).unwrap();

    let data = db.load_league(LeagueId::new(1)).unwrap();
    let rows = compute_standings(&data.games, &data.teams);

    assert_eq!(rows[0].team_name, "Hapoel Tel Aviv");
    assert_eq!((rows[0].wins, rows[0].losses), (2, 0));
    assert_eq!(rows[0].points_diff, 13);
    assert_eq!((rows[1].wins, rows[1].losses), (0, 2));
}

#[test]
fn test_import_filters_to_league() {
    let dir = TempDir::new().unwrap();
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let params = ImportParams {
        league_id: Some(LeagueId::new(2)),
        ..fixture_files(&dir)
    };

    let summary = import_into(&mut db, &params).unwrap();
    assert_eq!(summary.total(), 1);
    assert_eq!(db.league_ids().unwrap(), vec![LeagueId::new(2)]);
}

#[test]
fn test_import_replace_clears_league_first() {
    let dir = TempDir::new().unwrap();
    let mut db = StatsDatabase::new_in_memory().unwrap();
    import_into(&mut db, &fixture_files(&dir)).unwrap();

    let params = ImportParams {
        games: Some(write_json(
            &dir,
            "games_v2.json",
            r#"[{"id": "G9", "league_id": 1, "home_team": "HTA", "away_team": "Maccabi Haifa"}]"#,
        )),
        league_id: Some(LeagueId::new(1)),
        replace: true,
        ..ImportParams::default()
    };
    import_into(&mut db, &params).unwrap();

    let data = db.load_league(LeagueId::new(1)).unwrap();
    assert!(data.teams.is_empty());
    assert_eq!(data.games.len(), 1);
    assert_eq!(data.games[0].game_id, GameId::new("G9"));
    assert_eq!(db.load_teams(LeagueId::new(2)).unwrap().len(), 1);
}

#[test]
fn test_import_rejects_game_without_key() {
    let dir = TempDir::new().unwrap();
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let params = ImportParams {
        games: Some(write_json(
            &dir,
            "bad_games.json",
            r#"[{"league_id": 1, "home_team": "A", "away_team": "B"}]"#,
        )),
        ..ImportParams::default()
    };

    assert!(import_into(&mut db, &params).is_err());
}

#[test]
fn test_import_missing_file_is_io_error() {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let params = ImportParams {
        teams: Some(PathBuf::from("/definitely/not/here/teams.json")),
        ..ImportParams::default()
    };

    assert!(matches!(
        import_into(&mut db, &params),
        Err(hoops_stats::StatsError::Io(_))
    ));
}

#[test]
fn test_flat_rows_feed_leaderboard_and_highs() {
    let dir = TempDir::new().unwrap();
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let params = ImportParams {
        game_rows: Some(write_json(
            &dir,
            "flat_game_rows.json",
            r#"[
                {"game_id": "G1", "league_id": 1, "player_name": "X", "team_name": "A", "pts": 44},
                {"game_id": "G2", "league_id": 1, "player_name": "Y", "team_name": "B", "pts": "19"}
            ]"#,
        )),
        averages: Some(write_json(
            &dir,
            "flat_averages.json",
            r#"[
                {"league_id": 1, "player_name": "X", "pts": 20, "games_played": 10, "pts_rank": 1},
                {"league_id": 1, "player_name": "Y", "pts": 25, "games_played": 2, "pts_rank": 2}
            ]"#,
        )),
        ..ImportParams::default()
    };
    import_into(&mut db, &params).unwrap();

    let data = db.load_league(LeagueId::new(1)).unwrap();
    assert_eq!(data.averages[0].rank(StatKey::Points), Some(1));
    assert_eq!(data.averages[1].rank(StatKey::Points), Some(2));

    let top = top_n_by_category(&data.averages, StatKey::Points, 10, 5, None);
    let names: Vec<&str> = top.iter().map(|r| r.player_name.as_str()).collect();
    assert_eq!(names, vec!["X"]);

    let best = season_high(&data.game_rows, StatKey::Points).unwrap();
    assert_eq!(best.player_name.as_deref(), Some("X"));
    assert_eq!(best.value(StatKey::Points), Some(44.0));
}

#[test]
fn test_nested_stats_rows_still_import() {
    let dir = TempDir::new().unwrap();
    let mut db = StatsDatabase::new_in_memory().unwrap();
    let params = ImportParams {
        averages: Some(write_json(
            &dir,
            "nested_averages.json",
            r#"[{"league_id": 1, "player_name": "Avi Cohen", "games_played": 3,
                 "stats": {"ast": "6.5"}, "ranks": {"ast": 2}}]"#,
        )),
        ..ImportParams::default()
    };
    import_into(&mut db, &params).unwrap();

    let avg = &db.load_averages(LeagueId::new(1)).unwrap()[0];
    assert_eq!(avg.value(StatKey::Assists), Some(6.5));
    assert_eq!(avg.rank(StatKey::Assists), Some(2));
}
