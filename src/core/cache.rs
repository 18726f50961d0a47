//! Memoized team resolution.
//!
//! Aggregation resolves the same handful of team strings once per row, and
//! the coverage audit resolves every distinct name in the league. The
//! resolver keeps recent answers in an in-memory LRU cache keyed by
//! `(scope, trimmed query, mode)`. It borrows the team slice, so a cached
//! answer can never outlive or disagree with the teams it was computed from.

use lru::LruCache;
use std::{
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard},
};
use tracing::trace;

use super::matching::{resolve_team, MatchMode, MatchRule, TeamMatch};
use crate::{cli::types::LeagueId, model::Team};

/// Default number of memoized lookups.
pub const RESOLVER_CACHE_CAPACITY: usize = 512;

/// Cache key for a single resolution request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolveCacheKey {
    pub scope: Option<LeagueId>,
    pub query: String,
    pub mode: MatchMode,
}

/// Team resolver over a fixed candidate list with an LRU memo in front.
///
/// Safe to share between threads; the cache sits behind a mutex.
pub struct TeamResolver<'a> {
    teams: &'a [Team],
    cache: Mutex<LruCache<ResolveCacheKey, Option<(usize, MatchRule)>>>,
}

impl<'a> TeamResolver<'a> {
    pub fn new(teams: &'a [Team]) -> Self {
        Self::with_capacity(teams, RESOLVER_CACHE_CAPACITY)
    }

    /// A zero capacity falls back to the default.
    pub fn with_capacity(teams: &'a [Team], capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(RESOLVER_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            teams,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn teams(&self) -> &'a [Team] {
        self.teams
    }

    /// Same result as [`resolve_team`], memoized.
    pub fn resolve(
        &self,
        query: &str,
        scope: Option<LeagueId>,
        mode: MatchMode,
    ) -> Option<TeamMatch<'a>> {
        let key = ResolveCacheKey {
            scope,
            query: query.trim().to_string(),
            mode,
        };

        if let Some(cached) = self.lock().get(&key).copied() {
            trace!(query = %key.query, "team resolver cache hit");
            return cached.map(|(index, rule)| TeamMatch {
                team: &self.teams[index],
                index,
                rule,
            });
        }

        let found = resolve_team(&key.query, self.teams, scope, mode);
        self.lock().put(key, found.map(|m| (m.index, m.rule)));
        found
    }

    /// Strict resolution, team only.
    pub fn resolve_strict(&self, query: &str, scope: Option<LeagueId>) -> Option<&'a Team> {
        self.resolve(query, scope, MatchMode::Strict).map(|m| m.team)
    }

    /// Number of memoized lookups currently held.
    pub fn cached_len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<ResolveCacheKey, Option<(usize, MatchRule)>>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
