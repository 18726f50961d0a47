//! Row types as they arrive from the league data tables.
//!
//! These mirror the hosted backend's `teams`, `players`, `games`,
//! `game_stats` and `averages` tables. All of them are read-only inputs to
//! the matching and aggregation code; nothing here owns persistence.

pub mod numeric;


use crate::cli::types::{GameId, LeagueId, PlayerId, StatKey, TeamId};
use numeric::{coerce_number, coerce_u32, de_opt_u32, de_u32_or_zero};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Separators accepted inside a team's `name_variations` column.
pub const NAME_VARIATION_DELIMITERS: [char; 2] = ['|', ','];

/// Canonical team record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub league_id: LeagueId,
    pub team_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_variations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl Team {
    /// Alternate spellings, trimmed, in stored order. Empty entries are skipped.
    pub fn variations(&self) -> impl Iterator<Item = &str> + '_ {
        self.name_variations
            .as_deref()
            .unwrap_or("")
            .split(NAME_VARIATION_DELIMITERS)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Short name when one is set, otherwise the full name.
    pub fn display_name(&self) -> &str {
        match self.short_name.as_deref().map(str::trim) {
            Some(short) if !short.is_empty() => short,
            _ => &self.team_name,
        }
    }
}

/// A raw measurement that may be a number or text with a number in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Number(value)
    }
}

impl From<i32> for Measure {
    fn from(value: i32) -> Self {
        Measure::Number(value as f64)
    }
}

impl From<u32> for Measure {
    fn from(value: u32) -> Self {
        Measure::Number(value as f64)
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Measure::Text(value.to_string())
    }
}

impl From<String> for Measure {
    fn from(value: String) -> Self {
        Measure::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub league_id: LeagueId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_team_id: Option<TeamId>,
    /// Stored as text; formats vary between tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Meters or centimeters, depending on who entered it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Measure>,
    #[serde(
        default,
        deserialize_with = "de_opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub jersey_number: Option<u32>,
}

/// Counting and shooting stats keyed by category.
///
/// Deserializes from a flat JSON object. Keys that are not a known category
/// are ignored and values are coerced leniently (see [`numeric`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatLine(BTreeMap<StatKey, f64>);

impl StatLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StatKey) -> Option<f64> {
        self.0.get(&key).copied()
    }

    pub fn set(&mut self, key: StatKey, value: f64) {
        self.0.insert(key, value);
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: StatKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(StatKey, f64)> for StatLine {
    fn from_iter<I: IntoIterator<Item = (StatKey, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for StatLine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, Value> = Deserialize::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(column, value)| {
                let key = column.parse::<StatKey>().ok()?;
                Some((key, coerce_number(&value)?))
            })
            .collect())
    }
}

/// A scheduled or played game.
///
/// `game_id` is the canonical key. Rows keyed by `code`, `gameid` or `id`
/// are accepted on input and folded into it, in that order of preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    pub game_id: GameId,
    pub league_id: LeagueId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team_id: Option<TeamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team_id: Option<TeamId>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
}

impl Game {
    /// Both scores recorded. Gates every win/loss and leaderboard computation.
    pub fn is_completed(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    /// `(home, away)` when the game is completed.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        Some((self.home_score?, self.away_score?))
    }

    /// Completed with equal scores; never valid in basketball.
    pub fn is_tied(&self) -> bool {
        matches!(self.final_score(), Some((home, away)) if home == away)
    }
}

#[derive(Deserialize)]
struct RawGame {
    #[serde(default)]
    game_id: Option<GameId>,
    #[serde(default)]
    code: Option<GameId>,
    #[serde(default)]
    gameid: Option<GameId>,
    #[serde(default)]
    id: Option<GameId>,
    league_id: LeagueId,
    #[serde(default)]
    home_team: Option<String>,
    #[serde(default)]
    away_team: Option<String>,
    #[serde(default)]
    home_team_id: Option<TeamId>,
    #[serde(default)]
    away_team_id: Option<TeamId>,
    #[serde(default, deserialize_with = "de_opt_u32")]
    home_score: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_u32")]
    away_score: Option<u32>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, deserialize_with = "de_opt_u32")]
    round: Option<u32>,
}

impl TryFrom<RawGame> for Game {
    type Error = String;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let game_id = raw
            .game_id
            .or(raw.code)
            .or(raw.gameid)
            .or(raw.id)
            .filter(|id| !id.as_str().is_empty())
            .ok_or_else(|| "game row has no game_id, code, gameid or id".to_string())?;

        Ok(Game {
            game_id,
            league_id: raw.league_id,
            home_team: raw.home_team,
            away_team: raw.away_team,
            home_team_id: raw.home_team_id,
            away_team_id: raw.away_team_id,
            home_score: raw.home_score,
            away_score: raw.away_score,
            date: raw.date,
            round: raw.round,
        })
    }
}

/// One player's (or one team's) box score line for a single game.
///
/// Source rows are flat: stat columns such as `pts` or `3pm` sit next to the
/// identifying columns. A nested `"stats": {...}` object is also accepted and
/// top-level columns win over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGameRow")]
pub struct GameRow {
    pub game_id: GameId,
    pub league_id: LeagueId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_date: Option<String>,
    pub stats: StatLine,
}

impl GameRow {
    pub fn value(&self, key: StatKey) -> Option<f64> {
        self.stats.get(key)
    }
}

/// Season averages for one player, precomputed upstream.
///
/// Like [`GameRow`], stat columns are read from the top level. A
/// `<column>_rank` column (`pts_rank`, `3pm_rank`) becomes an entry in
/// `ranks`. Nested `stats` and `ranks` objects are merged underneath.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAverageRow")]
pub struct AverageRow {
    pub league_id: LeagueId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    pub player_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    pub games_played: u32,
    pub stats: StatLine,
    /// Externally computed ranks, when the source provides them.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub ranks: BTreeMap<StatKey, u32>,
}

impl AverageRow {
    pub fn value(&self, key: StatKey) -> Option<f64> {
        self.stats.get(key)
    }

    pub fn rank(&self, key: StatKey) -> Option<u32> {
        self.ranks.get(&key).copied()
    }
}

#[derive(Deserialize)]
struct RawGameRow {
    game_id: GameId,
    league_id: LeagueId,
    #[serde(default)]
    player_id: Option<PlayerId>,
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    team_id: Option<TeamId>,
    #[serde(default)]
    team_name: Option<String>,
    #[serde(default)]
    game_date: Option<String>,
    #[serde(default)]
    stats: Option<StatLine>,
    #[serde(flatten)]
    columns: BTreeMap<String, Value>,
}

impl From<RawGameRow> for GameRow {
    fn from(raw: RawGameRow) -> Self {
        let (stats, _) = split_columns(raw.stats.unwrap_or_default(), raw.columns);
        GameRow {
            game_id: raw.game_id,
            league_id: raw.league_id,
            player_id: raw.player_id,
            player_name: raw.player_name,
            team_id: raw.team_id,
            team_name: raw.team_name,
            game_date: raw.game_date,
            stats,
        }
    }
}

#[derive(Deserialize)]
struct RawAverageRow {
    league_id: LeagueId,
    #[serde(default)]
    player_id: Option<PlayerId>,
    player_name: String,
    #[serde(default)]
    team_name: Option<String>,
    #[serde(default, deserialize_with = "de_u32_or_zero")]
    games_played: u32,
    #[serde(default)]
    stats: Option<StatLine>,
    #[serde(default)]
    ranks: Option<BTreeMap<String, Value>>,
    #[serde(flatten)]
    columns: BTreeMap<String, Value>,
}

impl From<RawAverageRow> for AverageRow {
    fn from(raw: RawAverageRow) -> Self {
        let mut ranks: BTreeMap<StatKey, u32> = raw
            .ranks
            .unwrap_or_default()
            .iter()
            .filter_map(|(column, value)| {
                let column = column.to_ascii_lowercase();
                let key = column.strip_suffix("_rank").unwrap_or(column.as_str());
                Some((key.parse::<StatKey>().ok()?, coerce_u32(value)?))
            })
            .collect();

        let (stats, flat_ranks) = split_columns(raw.stats.unwrap_or_default(), raw.columns);
        ranks.extend(flat_ranks);

        AverageRow {
            league_id: raw.league_id,
            player_id: raw.player_id,
            player_name: raw.player_name,
            team_name: raw.team_name,
            games_played: raw.games_played,
            stats,
            ranks,
        }
    }
}

/// Sort leftover flat columns into stat values and `<column>_rank` ranks,
/// layered over `base`. Columns that are neither, or whose value does not
/// coerce, are dropped.
fn split_columns(
    mut base: StatLine,
    columns: BTreeMap<String, Value>,
) -> (StatLine, BTreeMap<StatKey, u32>) {
    let mut ranks = BTreeMap::new();

    for (column, value) in columns {
        let column = column.to_ascii_lowercase();
        if let Some(prefix) = column.strip_suffix("_rank") {
            if let (Ok(key), Some(rank)) = (prefix.parse::<StatKey>(), coerce_u32(&value)) {
                ranks.insert(key, rank);
            }
        } else if let (Ok(key), Some(n)) = (column.parse::<StatKey>(), coerce_number(&value)) {
            base.set(key, n);
        }
    }

    (base, ranks)
}
