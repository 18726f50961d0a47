//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{LeagueId, StatKey};

use crate::stats::{DEFAULT_MIN_GAMES, DEFAULT_TOP_N};

/// Arguments shared by every read command
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// League ID (or set `HOOPS_STATS_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "hoops-stats", about = "Basketball league standings, leaders and records")]
pub struct HoopsStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load league rows from JSON files into the local database.
    ///
    /// Each file holds a JSON array of rows for one table. Rows already
    /// present under the same key are updated.
    Import {
        #[clap(long)]
        teams: Option<PathBuf>,

        #[clap(long)]
        players: Option<PathBuf>,

        #[clap(long)]
        games: Option<PathBuf>,

        #[clap(long)]
        game_rows: Option<PathBuf>,

        #[clap(long)]
        averages: Option<PathBuf>,

        /// Only import rows for this league.
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Delete the league's stored rows before importing (requires a league).
        #[clap(long)]
        replace: bool,
    },

    /// League table computed from completed games.
    Standings {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Season-average leaders for one category.
    Leaders {
        #[clap(flatten)]
        common: CommonArgs,

        /// Stat category, e.g. `pts`, `reb`, `fg_pct`.
        #[clap(long, short)]
        category: StatKey,

        #[clap(long, short = 'n', default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Minimum games played to qualify.
        #[clap(long, default_value_t = DEFAULT_MIN_GAMES)]
        min_games: u32,

        /// Minimum attempts (percentage categories only).
        #[clap(long)]
        min_attempts: Option<u32>,
    },

    /// Best single-game performances for one category.
    Highs {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long, short)]
        category: StatKey,

        #[clap(long, short = 'n', default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Report team and player names that do not resolve to a known record.
    Audit {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Completed and upcoming games.
    Schedule {
        #[clap(flatten)]
        common: CommonArgs,

        /// Show only upcoming games.
        #[clap(long)]
        upcoming: bool,
    },

    /// Player profile: age, height, team, averages and recent games.
    Player {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long)]
        name: String,

        /// Number of recent games to show.
        #[clap(long, default_value_t = 5)]
        games: usize,
    },

    /// Compare two players' season averages.
    Compare {
        #[clap(flatten)]
        common: CommonArgs,

        #[clap(long)]
        left: String,

        #[clap(long)]
        right: String,

        /// Categories to compare (repeatable); defaults to the usual box score.
        #[clap(long = "category", short = 'c')]
        categories: Option<Vec<StatKey>>,
    },

    /// Resolve a free-text team name against the league's teams.
    Resolve {
        #[clap(flatten)]
        common: CommonArgs,

        name: String,

        /// Allow substring matches when nothing matches exactly.
        #[clap(long)]
        fuzzy: bool,
    },
}
