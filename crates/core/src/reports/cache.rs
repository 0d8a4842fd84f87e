//! Report result caching using Moka.
//!
//! Report generation for a closed period is deterministic, so results can
//! be reused until invalidated or expired. The cache is an explicit,
//! injected collaborator with a bounded capacity and TTL; callers that want
//! fresh numbers simply bypass it.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use metalgest_shared::config::CacheConfig;
use metalgest_shared::types::Currency;
use moka::sync::Cache;

use super::error::ReportError;
use super::types::DreReport;
use crate::fiscal::ReportPeriod;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache key: one report per period and currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportKey {
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Reporting currency.
    pub currency: Currency,
}

impl ReportKey {
    /// Builds the key for a period and currency.
    #[must_use]
    pub fn new(period: ReportPeriod, currency: Currency) -> Self {
        Self {
            period_start: period.start,
            period_end: period.end,
            currency,
        }
    }
}

/// TTL-bounded cache for composed reports.
///
/// Thread-safe and suitable for concurrent access.
#[derive(Clone)]
pub struct ReportCache {
    cache: Cache<ReportKey, Arc<DreReport>>,
}

impl ReportCache {
    /// Creates a cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and TTL.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Creates a cache from application configuration.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(config.max_entries, config.ttl_secs)
    }

    /// Returns the cached report for the key, if any.
    #[must_use]
    pub fn get(&self, key: &ReportKey) -> Option<Arc<DreReport>> {
        self.cache.get(key)
    }

    /// Returns the cached report or computes, stores, and returns it.
    ///
    /// # Errors
    ///
    /// Propagates the builder's error; nothing is cached on failure.
    pub fn get_or_build<F>(&self, key: ReportKey, build: F) -> Result<Arc<DreReport>, ReportError>
    where
        F: FnOnce() -> Result<DreReport, ReportError>,
    {
        if let Some(report) = self.cache.get(&key) {
            return Ok(report);
        }

        let report = Arc::new(build()?);
        self.cache.insert(key, Arc::clone(&report));
        Ok(report)
    }

    /// Invalidates the entry for a key.
    pub fn invalidate(&self, key: &ReportKey) {
        self.cache.invalidate(key);
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka expires entries in the background; calling this explicitly
    /// reclaims memory sooner and makes `entry_count` exact in tests.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new()
    }
}
