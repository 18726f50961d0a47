//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{GameId, LeagueId, PlayerId, StatKey, TeamId};
use crate::model::{AverageRow, Game, GameRow, Measure, Player, StatLine, Team};

fn create_test_db() -> StatsDatabase {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let mut db = StatsDatabase { conn };
    db.initialize_schema().unwrap();
    db
}

fn team(id: u32, league: u32, name: &str) -> Team {
    Team {
        team_id: TeamId::new(id),
        league_id: LeagueId::new(league),
        team_name: name.to_string(),
        short_name: None,
        name_variations: None,
        bg_color: None,
        text_color: None,
    }
}

fn game(id: &str, score: Option<(u32, u32)>) -> Game {
    Game {
        game_id: GameId::new(id),
        league_id: LeagueId::new(1),
        home_team: Some("A".to_string()),
        away_team: Some("B".to_string()),
        home_team_id: Some(TeamId::new(1)),
        away_team_id: Some(TeamId::new(2)),
        home_score: score.map(|s| s.0),
        away_score: score.map(|s| s.1),
        date: Some("2024-01-05".to_string()),
        round: Some(1),
    }
}

fn sample_data() -> LeagueData {
    LeagueData {
        teams: vec![team(1, 1, "A"), team(2, 1, "B"), team(3, 2, "Other League")],
        players: vec![Player {
            player_id: PlayerId::new(7),
            league_id: LeagueId::new(1),
            name: "Avi Cohen".to_string(),
            current_team_id: Some(TeamId::new(1)),
            date_of_birth: Some("1995/03/10".to_string()),
            height: Some(Measure::Number(198.0)),
            jersey_number: Some(5),
        }],
        games: vec![game("G1", Some((80, 70))), game("G2", None)],
        game_rows: vec![GameRow {
            game_id: GameId::new("G1"),
            league_id: LeagueId::new(1),
            player_id: Some(PlayerId::new(7)),
            player_name: Some("Avi Cohen".to_string()),
            team_id: Some(TeamId::new(1)),
            team_name: Some("A".to_string()),
            game_date: Some("2024-01-05".to_string()),
            stats: StatLine::new()
                .with(StatKey::Points, 22.0)
                .with(StatKey::FieldGoalPct, 50.0),
        }],
        averages: vec![AverageRow {
            league_id: LeagueId::new(1),
            player_id: None,
            player_name: "Avi Cohen".to_string(),
            team_name: Some("A".to_string()),
            games_played: 4,
            stats: StatLine::new().with(StatKey::Points, 18.5),
            ranks: [(StatKey::Points, 3)].into_iter().collect(),
        }],
    }
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
}

#[test]
fn test_schema_is_idempotent() {
    let mut db = create_test_db();
    assert!(db.initialize_schema().is_ok());
}

#[test]
fn test_import_and_load_league() {
    let mut db = create_test_db();
    let data = sample_data();

    let summary = db.import(&data).unwrap();
    assert_eq!(summary.teams, 3);
    assert_eq!(summary.total(), 8);

    let loaded = db.load_league(LeagueId::new(1)).unwrap();
    assert_eq!(loaded.teams.len(), 2);
    assert_eq!(loaded.players, data.players);
    assert_eq!(loaded.games, data.games);
    assert_eq!(loaded.game_rows, data.game_rows);
    assert_eq!(loaded.averages, data.averages);

    let other = db.load_league(LeagueId::new(2)).unwrap();
    assert_eq!(other.teams.len(), 1);
    assert!(other.games.is_empty());
}

#[test]
fn test_upsert_keeps_load_order() {
    let mut db = create_test_db();
    db.upsert_team(&team(1, 1, "A")).unwrap();
    db.upsert_team(&team(2, 1, "B")).unwrap();
    db.upsert_team(&team(1, 1, "A Renamed")).unwrap();

    let teams = db.load_teams(LeagueId::new(1)).unwrap();
    let names: Vec<&str> = teams.iter().map(|t| t.team_name.as_str()).collect();
    assert_eq!(names, vec!["A Renamed", "B"]);
}

#[test]
fn test_upsert_game_records_final_score() {
    let mut db = create_test_db();
    db.upsert_game(&game("G2", None)).unwrap();
    db.upsert_game(&game("G2", Some((90, 88)))).unwrap();

    let games = db.load_games(LeagueId::new(1)).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].final_score(), Some((90, 88)));
}

#[test]
fn test_game_rows_keyed_by_name_when_id_missing() {
    let mut db = create_test_db();
    let mut row = sample_data().game_rows.remove(0);
    row.player_id = None;
    db.upsert_game_row(&row).unwrap();

    row.player_name = Some("  avi   COHEN ".to_string());
    row.stats = StatLine::new().with(StatKey::Points, 30.0);
    db.upsert_game_row(&row).unwrap();

    let rows = db.load_game_rows(LeagueId::new(1)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value(StatKey::Points), Some(30.0));
}

#[test]
fn test_clear_league() {
    let mut db = create_test_db();
    db.import(&sample_data()).unwrap();

    let deleted = db.clear_league(LeagueId::new(1)).unwrap();
    assert_eq!(deleted, 7);
    assert!(db.load_league(LeagueId::new(1)).unwrap().is_empty());
    assert_eq!(db.league_ids().unwrap(), vec![LeagueId::new(2)]);
}

#[test]
fn test_league_ids() {
    let mut db = create_test_db();
    assert!(db.league_ids().unwrap().is_empty());
    db.import(&sample_data()).unwrap();
    assert_eq!(
        db.league_ids().unwrap(),
        vec![LeagueId::new(1), LeagueId::new(2)]
    );
}

#[test]
fn test_text_height_survives_storage() {
    let mut db = create_test_db();
    let mut player = sample_data().players.remove(0);
    player.height = Some(Measure::Text("198 cm".to_string()));
    db.upsert_player(&player).unwrap();

    let players = db.load_players(LeagueId::new(1)).unwrap();
    assert_eq!(players[0].height, Some(Measure::Text("198 cm".to_string())));
}
