//! Basketball League Statistics Library
//!
//! Standings, leaderboards, season highs and name reconciliation over the
//! row-oriented tables a basketball league site keeps: teams, players,
//! games, per-game box score rows and season averages.
//!
//! ## Features
//!
//! - **Entity Matching**: Resolve free-text team names through exact name, short name,
//!   alias and (optionally) substring rules, always scoped to one league
//! - **Standings**: Won/lost records and point differentials from completed games
//! - **Leaderboards**: Top-N season averages with games-played and attempts gates
//! - **Season Highs**: Best single-game performances per category
//! - **Player Attributes**: Age from inconsistently formatted birth dates, height in cm
//! - **Coverage Audit**: Names that resolve to nothing, and names that look like duplicates
//! - **Database Storage**: Local SQLite copy of the league tables
//!
//! ## Quick Start
//!
//! ```rust
//! use hoops_stats::{stats::compute_standings, Game, GameId, LeagueId, Team, TeamId};
//!
//! let league = LeagueId::new(1);
//! let team = |id, name: &str| Team {
//!     team_id: TeamId::new(id),
//!     league_id: league,
//!     team_name: name.to_string(),
//!     short_name: None,
//!     name_variations: None,
//!     bg_color: None,
//!     text_color: None,
//! };
//! let teams = vec![team(1, "A"), team(2, "B")];
//! let games = vec![Game {
//!     game_id: GameId::new("G1"),
//!     league_id: league,
//!     home_team: Some("A".to_string()),
//!     away_team: Some("B".to_string()),
//!     home_team_id: None,
//!     away_team_id: None,
//!     home_score: Some(80),
//!     away_score: Some(70),
//!     date: None,
//!     round: None,
//! }];
//!
//! let standings = compute_standings(&games, &teams);
//! assert_eq!(standings[0].team_name, "A");
//! assert_eq!(standings[0].points_diff, 10);
//! ```
//!
//! ## Environment Configuration
//!
//! Set the league ID to avoid passing it in every command:
//! ```bash
//! export HOOPS_STATS_LEAGUE_ID=1
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod model;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{GameId, LeagueId, PlayerId, StatKey, TeamId};
pub use error::{Result, StatsError};
pub use model::{AverageRow, Game, GameRow, Measure, Player, StatLine, Team};

pub const LEAGUE_ID_ENV_VAR: &str = "HOOPS_STATS_LEAGUE_ID";
pub const DB_PATH_ENV_VAR: &str = "HOOPS_STATS_DB";
