//! Response cache over SQLite.
//!
//! One row per key, stamped with the save time; a row older than one hour
//! reads as a miss. Stale rows are left in place, the next write for the
//! key overwrites them. The store is fail-open in both directions: every
//! lookup problem collapses to `Miss` and a failed write is logged and
//! dropped, so cache trouble can never fail a request.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::warn;

const FRESHNESS_WINDOW_SECONDS: i64 = 60 * 60;

/// Outcome of a cache lookup. Unavailability is not distinguishable from
/// absence on purpose; callers only ever branch on hit-or-not.
pub enum CacheLookup<T> {
    Hit(T),
    Miss,
}

pub struct CacheStore {
    pool: Option<SqlitePool>,
}

impl CacheStore {
    pub async fn connect(database_path: &str) -> Result<Self> {
        // sqlite creates a missing file but not a missing directory.
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create cache directory {}", parent.display()))?;
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{database_path}"))
            .context("Invalid cache database path")?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        // One connection: SQLite has a single writer anyway, and it keeps
        // `:memory:` databases coherent across queries in tests.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("Failed to connect to cache database")?;

        let store = Self { pool: Some(pool) };
        store.migrate().await?;

        Ok(store)
    }

    /// A store with no backing database. Every `get` misses and every
    /// `set` is a no-op, which is exactly how a broken backend behaves.
    pub fn disconnected() -> Self {
        Self { pool: None }
    }

    pub fn pool(&self) -> Option<&SqlitePool> {
        self.pool.as_ref()
    }

    async fn migrate(&self) -> Result<()> {
        let Some(pool) = &self.pool else { return Ok(()) };
        let migration_sql = include_str!("../../migrations/001_init.sql");
        // Execute each statement separately (sqlx doesn't support multiple statements in one call)
        for statement in migration_sql.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed)
                    .execute(pool)
                    .await
                    .with_context(|| format!("Failed to execute migration: {trimmed}"))?;
            }
        }
        Ok(())
    }

    /// Returns the stored value only if it was saved within the last hour.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> CacheLookup<T> {
        let Some(pool) = &self.pool else {
            return CacheLookup::Miss;
        };

        let row = match sqlx::query("SELECT data, saved_at FROM cache WHERE key = ?")
            .bind(key)
            .fetch_optional(pool)
            .await
        {
            Ok(Some(row)) => row,
            Ok(None) => return CacheLookup::Miss,
            Err(e) => {
                warn!(key, error = %e, "Cache lookup failed — treating as miss");
                return CacheLookup::Miss;
            }
        };

        let saved_at: String = row.get("saved_at");
        let saved_at = match DateTime::parse_from_rfc3339(&saved_at) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(e) => {
                warn!(key, error = %e, "Unparseable cache timestamp — treating as miss");
                return CacheLookup::Miss;
            }
        };

        if Utc::now() - saved_at >= Duration::seconds(FRESHNESS_WINDOW_SECONDS) {
            return CacheLookup::Miss;
        }

        let data: String = row.get("data");
        match serde_json::from_str(&data) {
            Ok(value) => CacheLookup::Hit(value),
            Err(e) => {
                warn!(key, error = %e, "Undeserializable cache payload — treating as miss");
                CacheLookup::Miss
            }
        }
    }

    /// Upserts the value under `key`, stamping the save time to now.
    /// Failures never reach the caller.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let Some(pool) = &self.pool else { return };

        let data = match serde_json::to_string(value) {
            Ok(data) => data,
            Err(e) => {
                warn!(key, error = %e, "Cache payload serialization failed — skipping write");
                return;
            }
        };

        let result = sqlx::query(
            "INSERT INTO cache (key, data, saved_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET data = excluded.data, saved_at = excluded.saved_at",
        )
        .bind(key)
        .bind(data)
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await;

        if let Err(e) = result {
            warn!(key, error = %e, "Cache write failed — response served uncached");
        }
    }
}
