//! League leaders over season averages.

use serde::Serialize;

use super::top_n_desc;
use crate::{
    cli::types::StatKey,
    error::{Result, StatsError},
    model::AverageRow,
};

/// Rows returned when the caller does not say otherwise.
pub const DEFAULT_TOP_N: usize = 10;
/// Minimum games played to appear on a leaderboard by default.
pub const DEFAULT_MIN_GAMES: u32 = 1;

/// Attempt-volume gate for percentage categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinAttempts {
    pub attempts_key: StatKey,
    pub threshold: u32,
}

impl MinAttempts {
    pub fn new(attempts_key: StatKey, threshold: u32) -> Self {
        Self {
            attempts_key,
            threshold,
        }
    }

    /// Gate on the attempts column that belongs to `category`.
    pub fn for_category(category: StatKey, threshold: u32) -> Result<Self> {
        let attempts_key = category
            .attempts_key()
            .ok_or_else(|| StatsError::InvalidAttemptsFilter {
                key: category.to_string(),
            })?;
        Ok(Self::new(attempts_key, threshold))
    }

    /// A row without the attempts column counts as zero attempts.
    fn admits(&self, row: &AverageRow) -> bool {
        row.value(self.attempts_key).unwrap_or(0.0) >= self.threshold as f64
    }
}

/// Leaderboard request with the usual defaults.
///
/// ```rust
/// use hoops_stats::{stats::leaders::LeaderboardQuery, StatKey};
///
/// let query = LeaderboardQuery::new(StatKey::Points).top(5).min_games(3);
/// assert_eq!(query.n, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeaderboardQuery {
    pub category: StatKey,
    pub n: usize,
    pub min_games: u32,
    pub min_attempts: Option<MinAttempts>,
}

impl LeaderboardQuery {
    pub fn new(category: StatKey) -> Self {
        Self {
            category,
            n: DEFAULT_TOP_N,
            min_games: DEFAULT_MIN_GAMES,
            min_attempts: None,
        }
    }

    pub fn top(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn min_games(mut self, min_games: u32) -> Self {
        self.min_games = min_games;
        self
    }

    pub fn min_attempts(mut self, min_attempts: MinAttempts) -> Self {
        self.min_attempts = Some(min_attempts);
        self
    }

    pub fn run<'a>(&self, rows: &'a [AverageRow]) -> Vec<&'a AverageRow> {
        top_n_by_category(
            rows,
            self.category,
            self.n,
            self.min_games,
            self.min_attempts,
        )
    }
}

/// Top `n` rows by `category`, highest first.
///
/// Rows are dropped when the value is missing, when it is exactly zero for a
/// non-percentage category, when `games_played < min_games`, or when they
/// fall short of `min_attempts`. Equal values keep their input order.
pub fn top_n_by_category(
    rows: &[AverageRow],
    category: StatKey,
    n: usize,
    min_games: u32,
    min_attempts: Option<MinAttempts>,
) -> Vec<&AverageRow> {
    let eligible = rows.iter().filter_map(|row| {
        let value = row.value(category)?;
        if value == 0.0 && !category.is_percentage() {
            return None;
        }
        if row.games_played < min_games {
            return None;
        }
        if let Some(gate) = &min_attempts {
            if !gate.admits(row) {
                return None;
            }
        }
        Some((row, value))
    });

    top_n_desc(eligible, n)
}

/// Fill in missing `category` ranks.
///
/// Uses competition ranking (1, 2, 2, 4) over every row that has a value,
/// highest value first. Ranks already supplied by the source are kept as is.
/// Returns how many ranks were filled in.
pub fn assign_ranks(rows: &mut [AverageRow], category: StatKey) -> usize {
    let mut values: Vec<f64> = rows.iter().filter_map(|r| r.value(category)).collect();
    values.sort_by(|a, b| b.total_cmp(a));

    let mut filled = 0;
    for row in rows.iter_mut() {
        if row.rank(category).is_some() {
            continue;
        }
        let Some(value) = row.value(category) else {
            continue;
        };
        let higher = values.partition_point(|v| *v > value);
        row.ranks.insert(category, higher as u32 + 1);
        filled += 1;
    }
    filled
}
