// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Streak record queries.

use rusqlite::params;

use trendpulse_core::TrendpulseError;

use crate::database::Database;
use crate::models::{self, StreakRecord, UserId};

/// Get the streak record for a user, if one exists.
pub async fn get_progress(
    db: &Database,
    user_id: &UserId,
) -> Result<Option<StreakRecord>, TrendpulseError> {
    let user_id = user_id.clone();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, current_streak, highest_streak, last_updated
                 FROM progress WHERE user_id = ?1",
            )?;
            let result = stmt.query_row(params![user_id.0], |row| {
                let raw_ts: String = row.get(3)?;
                Ok(StreakRecord {
                    user_id: UserId(row.get(0)?),
                    current_streak: row.get(1)?,
                    highest_streak: row.get(2)?,
                    last_updated: models::decode_ts(3, &raw_ts)?,
                })
            });
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert or replace the streak record for a user.
///
/// Last-write-wins: concurrent read-modify-write cycles for the same user
/// can lose an update at this layer.
pub async fn upsert_progress(db: &Database, record: &StreakRecord) -> Result<(), TrendpulseError> {
    let record = record.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO progress (user_id, current_streak, highest_streak, last_updated)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(user_id) DO UPDATE SET
                     current_streak = excluded.current_streak,
                     highest_streak = excluded.highest_streak,
                     last_updated = excluded.last_updated",
                params![
                    record.user_id.0,
                    record.current_streak,
                    record.highest_streak,
                    models::encode_ts(&record.last_updated),
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
