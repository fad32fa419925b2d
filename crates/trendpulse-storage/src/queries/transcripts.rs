// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat transcript queries. Append-only.

use rusqlite::params;

use trendpulse_core::TrendpulseError;

use crate::database::Database;
use crate::models::{self, ChatTranscriptEntry, UserId};

/// Append one transcript entry.
pub async fn append_entry(
    db: &Database,
    entry: &ChatTranscriptEntry,
) -> Result<(), TrendpulseError> {
    let entry = entry.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO transcripts (user_id, query, response, timestamp)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    entry.user_id.0,
                    entry.query,
                    entry.response,
                    models::encode_ts(&entry.timestamp),
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get all transcript entries for a user in chronological order.
pub async fn list_for_user(
    db: &Database,
    user_id: &UserId,
) -> Result<Vec<ChatTranscriptEntry>, TrendpulseError> {
    let user_id = user_id.clone();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, query, response, timestamp
                 FROM transcripts WHERE user_id = ?1
                 ORDER BY timestamp ASC, id ASC",
            )?;
            let rows = stmt.query_map(params![user_id.0], |row| {
                let raw_ts: String = row.get(3)?;
                Ok(ChatTranscriptEntry {
                    user_id: UserId(row.get(0)?),
                    query: row.get(1)?,
                    response: row.get(2)?,
                    timestamp: models::decode_ts(3, &raw_ts)?,
                })
            })?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
