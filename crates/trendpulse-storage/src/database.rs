// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All writes are serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use tracing::debug;

use trendpulse_core::TrendpulseError;

/// Handle to the SQLite database.
///
/// Wraps a single `tokio_rusqlite::Connection`; every query module accepts
/// `&Database` and calls through `connection().call()`, which serializes all
/// closures on one background thread and eliminates SQLITE_BUSY errors under
/// concurrent access.
#[derive(Debug)]
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path`, apply PRAGMAs, and run all
    /// pending migrations.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, TrendpulseError> {
        // `open` fails with a plain rusqlite error; only `call` sites yield
        // the tokio-rusqlite wrapper that `map_tr_err` expects.
        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(TrendpulseError::storage)?;

        // PRAGMAs and migrations run on the single writer thread. The
        // migration result rides inside the call result so refinery errors
        // keep their own type instead of being shoehorned into rusqlite's.
        conn.call(move |conn| {
            if wal_mode {
                conn.execute_batch(
                    "PRAGMA journal_mode=WAL;
                     PRAGMA synchronous=NORMAL;",
                )?;
            }
            conn.execute_batch("PRAGMA foreign_keys=ON;")?;
            Ok(crate::migrations::run_migrations(conn))
        })
        .await
        .map_err(map_tr_err)??;

        debug!(path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL and flush pending writes.
    pub async fn close(&self) -> Result<(), TrendpulseError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the workspace error type.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> TrendpulseError {
    TrendpulseError::Storage {
        source: Box::new(e),
    }
}
