//! Tests for command handlers

use super::*;
use crate::{
    cli::types::{GameId, PlayerId, StatKey, TeamId},
    model::{AverageRow, Game, GameRow, Measure, Player, StatLine, Team},
    stats::{Edge, LeaderboardQuery},
    storage::{LeagueData, StatsDatabase},
};
use chrono::NaiveDate;
use common::CommandContext;

const LEAGUE: LeagueId = LeagueId(1);

fn team(id: u32, name: &str, short: Option<&str>, variations: Option<&str>) -> Team {
    Team {
        team_id: TeamId::new(id),
        league_id: LEAGUE,
        team_name: name.to_string(),
        short_name: short.map(str::to_string),
        name_variations: variations.map(str::to_string),
        bg_color: None,
        text_color: None,
    }
}

fn game(id: &str, home: &str, away: &str, score: Option<(u32, u32)>) -> Game {
    Game {
        game_id: GameId::new(id),
        league_id: LEAGUE,
        home_team: Some(home.to_string()),
        away_team: Some(away.to_string()),
        home_team_id: None,
        away_team_id: None,
        home_score: score.map(|s| s.0),
        away_score: score.map(|s| s.1),
        date: None,
        round: None,
    }
}

fn average(name: &str, team: &str, gp: u32, stats: StatLine) -> AverageRow {
    AverageRow {
        league_id: LEAGUE,
        player_id: None,
        player_name: name.to_string(),
        team_name: Some(team.to_string()),
        games_played: gp,
        stats,
        ranks: Default::default(),
    }
}

fn league_data() -> LeagueData {
    LeagueData {
        teams: vec![
            team(1, "Hapoel Tel Aviv", Some("Hapoel TA"), Some("HTA")),
            team(2, "Maccabi Haifa", None, None),
        ],
        players: vec![Player {
            player_id: PlayerId::new(10),
            league_id: LEAGUE,
            name: "Avi Cohen".to_string(),
            current_team_id: Some(TeamId::new(1)),
            date_of_birth: Some("1995/03/10".to_string()),
            height: Some(Measure::Number(1.98)),
            jersey_number: Some(7),
        }],
        games: vec![
            game("G1", "HTA", "Maccabi Haifa", Some((88, 80))),
            game("G2", "Maccabi Haifa", "Hapoel TA", Some((75, 75))),
            game("G3", "Hapoel Tel Aviv", "Maccabi Haifa", None),
        ],
        game_rows: vec![
            GameRow {
                game_id: GameId::new("G1"),
                league_id: LEAGUE,
                player_id: Some(PlayerId::new(10)),
                player_name: Some("Avi Cohen".to_string()),
                team_id: None,
                team_name: Some("HTA".to_string()),
                game_date: Some("2024-01-05".to_string()),
                stats: StatLine::new().with(StatKey::Points, 31.0),
            },
            GameRow {
                game_id: GameId::new("G1"),
                league_id: LEAGUE,
                player_id: None,
                player_name: Some("Yossi Levi".to_string()),
                team_id: None,
                team_name: Some("Maccabi H.".to_string()),
                game_date: Some("2024-01-05".to_string()),
                stats: StatLine::new().with(StatKey::Points, 24.0),
            },
        ],
        averages: vec![
            average(
                "Avi Cohen",
                "HTA",
                2,
                StatLine::new()
                    .with(StatKey::Points, 22.5)
                    .with(StatKey::Turnovers, 3.0),
            ),
            average(
                "Yossi Levi",
                "Maccabi Haifa",
                2,
                StatLine::new()
                    .with(StatKey::Points, 19.0)
                    .with(StatKey::Turnovers, 1.5),
            ),
            average("Bench Guy", "Maccabi Haifa", 1, StatLine::new().with(StatKey::Points, 0.0)),
        ],
    }
}

fn context() -> CommandContext {
    let mut db = StatsDatabase::new_in_memory().unwrap();
    db.import(&league_data()).unwrap();
    CommandContext::from_database(LEAGUE, &db).unwrap()
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[test]
    fn test_resolve_league_id_from_option() {
        let result = resolve_league_id(Some(LeagueId::new(12345)));
        assert_eq!(result.unwrap().as_u32(), 12345);
    }

    #[test]
    fn test_resolve_league_id_env_handling() {
        std::env::remove_var(LEAGUE_ID_ENV_VAR);
        match resolve_league_id(None) {
            Err(StatsError::MissingLeagueId { env_var }) => {
                assert_eq!(env_var, LEAGUE_ID_ENV_VAR);
            }
            other => panic!("Expected MissingLeagueId error, got {:?}", other),
        }

        std::env::set_var(LEAGUE_ID_ENV_VAR, " 54321 ");
        assert_eq!(resolve_league_id(None).unwrap().as_u32(), 54321);

        // An explicit id wins over the environment.
        assert_eq!(resolve_league_id(Some(LeagueId::new(3))).unwrap().as_u32(), 3);

        std::env::set_var(LEAGUE_ID_ENV_VAR, "not_a_number");
        assert!(matches!(
            resolve_league_id(None),
            Err(StatsError::InvalidLeagueId(_))
        ));

        std::env::remove_var(LEAGUE_ID_ENV_VAR);
    }

    #[test]
    fn test_context_for_empty_league_is_no_data() {
        let db = StatsDatabase::new_in_memory().unwrap();
        assert!(matches!(
            CommandContext::from_database(LeagueId::new(99), &db),
            Err(StatsError::NoData)
        ));
    }

    #[test]
    fn test_standings_render() {
        let ctx = context();
        let rows = crate::stats::compute_standings(&ctx.data.games, &ctx.data.teams);
        assert_eq!(rows[0].team_name, "Hapoel Tel Aviv");
        assert_eq!(rows[0].wins, 1);
        assert_eq!(rows[0].games_played, 2);

        let text = standings::render_standings(&rows);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Hapoel Tel Aviv"));
        assert!(text.contains("+8"));
    }

    #[test]
    fn test_standings_report_games_left_out() {
        let mut data = league_data();
        data.games.push(game("G4", "Hapoel TA", "Ironi Nes Ziona", Some((90, 85))));
        let mut db = StatsDatabase::new_in_memory().unwrap();
        db.import(&data).unwrap();
        let ctx = CommandContext::from_database(LEAGUE, &db).unwrap();

        let skipped = crate::stats::find_unresolved_games(&ctx.data.games, &ctx.data.teams);
        let note = standings::unresolved_note(&skipped).unwrap();
        assert!(note.starts_with("1 completed game(s) left out"));
        assert!(note.ends_with("G4"));
        assert_eq!(standings::unresolved_note(&[]), None);

        let report = audit::build_audit(&ctx);
        assert_eq!(report.unresolved_games, vec![GameId::new("G4")]);
        assert!(audit::render_audit(&report).contains("Games left out of standings: G4"));
    }

    #[test]
    fn test_leaderboard_canonicalizes_teams_and_skips_zeros() {
        let ctx = context();
        let entries = leaders::build_leaderboard(&ctx, &LeaderboardQuery::new(StatKey::Points));

        let names: Vec<&str> = entries.iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, vec!["Avi Cohen", "Yossi Levi"]);
        assert_eq!(entries[0].team.as_deref(), Some("Hapoel TA"));
        assert_eq!(entries[0].league_rank, Some(1));
        assert_eq!(entries[1].position, 2);
    }

    #[test]
    fn test_leaderboard_min_games() {
        let ctx = context();
        let query = LeaderboardQuery::new(StatKey::Points).min_games(3);
        assert!(leaders::build_leaderboard(&ctx, &query).is_empty());
    }

    #[test]
    fn test_highs() {
        let ctx = context();
        let entries = highs::build_highs(&ctx, StatKey::Points, 10);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, 31.0);
        assert_eq!(entries[0].team.as_deref(), Some("Hapoel TA"));
        // Unresolved names are shown as given.
        assert_eq!(entries[1].team.as_deref(), Some("Maccabi H."));
    }

    #[test]
    fn test_audit_report() {
        let ctx = context();
        let report = audit::build_audit(&ctx);

        assert_eq!(report.teams.uncovered, vec!["Maccabi H.".to_string()]);
        assert!(report.teams.covered.contains(&"HTA".to_string()));
        assert_eq!(
            report.players.uncovered,
            vec!["Yossi Levi".to_string(), "Bench Guy".to_string()]
        );
        assert_eq!(report.tied_games, vec![GameId::new("G2")]);
        assert!(report.unresolved_games.is_empty());

        let text = audit::render_audit(&report);
        assert!(text.contains("✗ Maccabi H."));
        assert!(text.contains("Games with equal scores: G2"));
    }

    #[test]
    fn test_player_profile() {
        let ctx = context();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let profile = player::build_profile(&ctx, "  avi cohen ", 5, today).unwrap();

        assert_eq!(profile.player.player_id, PlayerId::new(10));
        assert_eq!(profile.team.as_deref(), Some("Hapoel TA"));
        assert_eq!(profile.age, Some(28));
        assert_eq!(profile.height_cm, Some(198.0));
        assert_eq!(profile.averages.as_ref().map(|a| a.games_played), Some(2));
        assert_eq!(profile.recent_games.len(), 1);

        let text = player::render_profile(&profile);
        assert!(text.starts_with("Avi Cohen #7 (Hapoel TA)"));
    }

    #[test]
    fn test_player_not_found() {
        let ctx = context();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        match player::build_profile(&ctx, "Nobody", 5, today) {
            Err(StatsError::PlayerNotFound { name }) => assert_eq!(name, "Nobody"),
            other => panic!("Expected PlayerNotFound, got {:?}", other.map(|p| p.player)),
        }
    }

    #[test]
    fn test_compare_falls_back_to_averages_names() {
        let ctx = context();
        let report = compare::build_comparison(
            &ctx,
            "Avi Cohen",
            "yossi levi",
            &[StatKey::Points, StatKey::Turnovers, StatKey::Assists],
        )
        .unwrap();

        let edges: Vec<Edge> = report.categories.iter().map(|c| c.edge).collect();
        assert_eq!(edges, vec![Edge::Left, Edge::Right, Edge::Unavailable]);
        assert_eq!((report.left_leads, report.right_leads), (1, 1));
        assert_eq!(report.right, "Yossi Levi");
    }

    #[test]
    fn test_resolve() {
        let ctx = context();
        let strict = resolve::build_resolution(&ctx, "Haifa", false);
        assert!(strict.team.is_none());

        let fuzzy = resolve::build_resolution(&ctx, "Haifa", true);
        assert_eq!(fuzzy.team.map(|t| t.team_id), Some(TeamId::new(2)));
        assert_eq!(fuzzy.rule, Some(crate::core::MatchRule::Substring));
    }
}
