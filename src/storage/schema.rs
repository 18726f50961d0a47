//! Database schema and connection management

use crate::{error::StatsError, DB_PATH_ENV_VAR};
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Local store for league rows
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open the default database and ensure tables exist
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open (or create) a database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening stats database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, mostly for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// `$HOOPS_STATS_DB` when set, otherwise `<cache dir>/hoops-stats/stats.db`
    pub fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let cache_dir = cache_dir().ok_or_else(|| StatsError::Storage {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("hoops-stats").join("stats.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS teams (
                league_id INTEGER NOT NULL,
                team_id INTEGER NOT NULL,
                team_name TEXT NOT NULL,
                short_name TEXT,
                name_variations TEXT,
                bg_color TEXT,
                text_color TEXT,
                PRIMARY KEY (league_id, team_id)
            );

            CREATE TABLE IF NOT EXISTS players (
                league_id INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                current_team_id INTEGER,
                date_of_birth TEXT,
                height TEXT,
                jersey_number INTEGER,
                PRIMARY KEY (league_id, player_id)
            );

            CREATE TABLE IF NOT EXISTS games (
                league_id INTEGER NOT NULL,
                game_id TEXT NOT NULL,
                home_team TEXT,
                away_team TEXT,
                home_team_id INTEGER,
                away_team_id INTEGER,
                home_score INTEGER,
                away_score INTEGER,
                date TEXT,
                round INTEGER,
                PRIMARY KEY (league_id, game_id)
            );

            CREATE TABLE IF NOT EXISTS game_rows (
                league_id INTEGER NOT NULL,
                game_id TEXT NOT NULL,
                row_key TEXT NOT NULL,
                player_id INTEGER,
                player_name TEXT,
                team_id INTEGER,
                team_name TEXT,
                game_date TEXT,
                stats TEXT NOT NULL,
                PRIMARY KEY (league_id, game_id, row_key)
            );

            CREATE TABLE IF NOT EXISTS averages (
                league_id INTEGER NOT NULL,
                row_key TEXT NOT NULL,
                player_id INTEGER,
                player_name TEXT NOT NULL,
                team_name TEXT,
                games_played INTEGER NOT NULL,
                stats TEXT NOT NULL,
                ranks TEXT NOT NULL,
                PRIMARY KEY (league_id, row_key)
            );

            CREATE INDEX IF NOT EXISTS idx_game_rows_player
             ON game_rows(league_id, player_id);",
        )?;

        Ok(())
    }
}
