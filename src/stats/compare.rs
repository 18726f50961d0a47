//! Side-by-side player comparison.

use serde::Serialize;

use crate::{cli::types::StatKey, model::StatLine};

/// Categories shown when the caller does not choose.
pub const DEFAULT_COMPARISON: [StatKey; 9] = [
    StatKey::Points,
    StatKey::Rebounds,
    StatKey::Assists,
    StatKey::Steals,
    StatKey::Blocks,
    StatKey::Turnovers,
    StatKey::FieldGoalPct,
    StatKey::ThreePointPct,
    StatKey::FreeThrowPct,
];

/// Which side is ahead in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Left,
    Right,
    Even,
    /// One side has no value for the category.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryComparison {
    pub category: StatKey,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub edge: Edge,
}

/// Compare two stat lines category by category, in the order given.
///
/// Turnovers and fouls count in favor of the lower number.
pub fn compare_players(
    left: &StatLine,
    right: &StatLine,
    categories: &[StatKey],
) -> Vec<CategoryComparison> {
    categories
        .iter()
        .map(|&category| {
            let l = left.get(category);
            let r = right.get(category);
            let edge = match (l, r) {
                (Some(a), Some(b)) => edge_for(category, a, b),
                _ => Edge::Unavailable,
            };
            CategoryComparison {
                category,
                left: l,
                right: r,
                edge,
            }
        })
        .collect()
}

/// Number of categories each side leads: `(left, right)`.
pub fn tally(comparisons: &[CategoryComparison]) -> (usize, usize) {
    comparisons.iter().fold((0, 0), |(l, r), c| match c.edge {
        Edge::Left => (l + 1, r),
        Edge::Right => (l, r + 1),
        Edge::Even | Edge::Unavailable => (l, r),
    })
}

fn edge_for(category: StatKey, a: f64, b: f64) -> Edge {
    if (a - b).abs() < f64::EPSILON {
        return Edge::Even;
    }
    let left_higher = a > b;
    if left_higher != category.lower_is_better() {
        Edge::Left
    } else {
        Edge::Right
    }
}
