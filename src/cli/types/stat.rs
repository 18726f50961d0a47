//! Basketball stat categories.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single statistical column as it appears in game and averages tables.
///
/// Every key has a stable column name (`pts`, `fg_pct`, ...), which is what
/// serde and `Display` use. Parsing also accepts a few long-form aliases.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::StatKey;
///
/// let key: StatKey = "fg_pct".parse().unwrap();
/// assert_eq!(key, StatKey::FieldGoalPct);
/// assert!(key.is_percentage());
/// assert_eq!(key.attempts_key(), Some(StatKey::FieldGoalsAttempted));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum StatKey {
    #[serde(rename = "pts")]
    Points,
    #[serde(rename = "reb")]
    Rebounds,
    #[serde(rename = "oreb")]
    OffensiveRebounds,
    #[serde(rename = "dreb")]
    DefensiveRebounds,
    #[serde(rename = "ast")]
    Assists,
    #[serde(rename = "stl")]
    Steals,
    #[serde(rename = "blk")]
    Blocks,
    #[serde(rename = "to")]
    Turnovers,
    #[serde(rename = "pf")]
    Fouls,
    #[serde(rename = "min")]
    Minutes,
    #[serde(rename = "eff")]
    Efficiency,
    #[serde(rename = "fgm")]
    FieldGoalsMade,
    #[serde(rename = "fga")]
    FieldGoalsAttempted,
    #[serde(rename = "fg_pct")]
    FieldGoalPct,
    #[serde(rename = "3pm")]
    ThreePointersMade,
    #[serde(rename = "3pa")]
    ThreePointersAttempted,
    #[serde(rename = "3p_pct")]
    ThreePointPct,
    #[serde(rename = "ftm")]
    FreeThrowsMade,
    #[serde(rename = "fta")]
    FreeThrowsAttempted,
    #[serde(rename = "ft_pct")]
    FreeThrowPct,
}

impl StatKey {
    pub const ALL: [StatKey; 20] = [
        StatKey::Points,
        StatKey::Rebounds,
        StatKey::OffensiveRebounds,
        StatKey::DefensiveRebounds,
        StatKey::Assists,
        StatKey::Steals,
        StatKey::Blocks,
        StatKey::Turnovers,
        StatKey::Fouls,
        StatKey::Minutes,
        StatKey::Efficiency,
        StatKey::FieldGoalsMade,
        StatKey::FieldGoalsAttempted,
        StatKey::FieldGoalPct,
        StatKey::ThreePointersMade,
        StatKey::ThreePointersAttempted,
        StatKey::ThreePointPct,
        StatKey::FreeThrowsMade,
        StatKey::FreeThrowsAttempted,
        StatKey::FreeThrowPct,
    ];

    /// Column name used in source tables and JSON.
    pub fn column(&self) -> &'static str {
        match self {
            StatKey::Points => "pts",
            StatKey::Rebounds => "reb",
            StatKey::OffensiveRebounds => "oreb",
            StatKey::DefensiveRebounds => "dreb",
            StatKey::Assists => "ast",
            StatKey::Steals => "stl",
            StatKey::Blocks => "blk",
            StatKey::Turnovers => "to",
            StatKey::Fouls => "pf",
            StatKey::Minutes => "min",
            StatKey::Efficiency => "eff",
            StatKey::FieldGoalsMade => "fgm",
            StatKey::FieldGoalsAttempted => "fga",
            StatKey::FieldGoalPct => "fg_pct",
            StatKey::ThreePointersMade => "3pm",
            StatKey::ThreePointersAttempted => "3pa",
            StatKey::ThreePointPct => "3p_pct",
            StatKey::FreeThrowsMade => "ftm",
            StatKey::FreeThrowsAttempted => "fta",
            StatKey::FreeThrowPct => "ft_pct",
        }
    }

    /// Percentage stats keep legitimate zero values on leaderboards.
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            StatKey::FieldGoalPct | StatKey::ThreePointPct | StatKey::FreeThrowPct
        )
    }

    /// The attempts column a percentage stat is gated on.
    pub fn attempts_key(&self) -> Option<StatKey> {
        match self {
            StatKey::FieldGoalPct => Some(StatKey::FieldGoalsAttempted),
            StatKey::ThreePointPct => Some(StatKey::ThreePointersAttempted),
            StatKey::FreeThrowPct => Some(StatKey::FreeThrowsAttempted),
            _ => None,
        }
    }

    /// Categories where a smaller number is the better one.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, StatKey::Turnovers | StatKey::Fouls)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl FromStr for StatKey {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        let parsed = match key.as_str() {
            "pts" | "points" => StatKey::Points,
            "reb" | "rebounds" | "total_rebounds" => StatKey::Rebounds,
            "oreb" | "offensive_rebounds" => StatKey::OffensiveRebounds,
            "dreb" | "defensive_rebounds" => StatKey::DefensiveRebounds,
            "ast" | "assists" => StatKey::Assists,
            "stl" | "steals" => StatKey::Steals,
            "blk" | "blocks" => StatKey::Blocks,
            "to" | "tov" | "turnovers" => StatKey::Turnovers,
            "pf" | "fouls" => StatKey::Fouls,
            "min" | "minutes" => StatKey::Minutes,
            "eff" | "efficiency" => StatKey::Efficiency,
            "fgm" | "field_goals_made" => StatKey::FieldGoalsMade,
            "fga" | "field_goals_attempted" => StatKey::FieldGoalsAttempted,
            "fg_pct" | "fg%" | "field_goal_percentage" => StatKey::FieldGoalPct,
            "3pm" | "three_pointers_made" => StatKey::ThreePointersMade,
            "3pa" | "three_pointers_attempted" => StatKey::ThreePointersAttempted,
            "3p_pct" | "3pt_pct" | "3p%" | "three_point_percentage" => StatKey::ThreePointPct,
            "ftm" | "free_throws_made" => StatKey::FreeThrowsMade,
            "fta" | "free_throws_attempted" => StatKey::FreeThrowsAttempted,
            "ft_pct" | "ft%" | "free_throw_percentage" => StatKey::FreeThrowPct,
            _ => {
                return Err(StatsError::UnknownStatKey {
                    key: s.to_string(),
                })
            }
        };
        Ok(parsed)
    }
}
