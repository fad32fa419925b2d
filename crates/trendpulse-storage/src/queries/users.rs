// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User account queries.

use rusqlite::params;

use trendpulse_core::TrendpulseError;

use crate::database::Database;
use crate::models::{self, UserAccount, UserId};

/// Insert a new account. The UNIQUE constraint on `email` makes a duplicate
/// insert fail; callers check for existing accounts first to report a clean
/// validation error.
pub async fn insert_user(db: &Database, account: &UserAccount) -> Result<(), TrendpulseError> {
    let account = account.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO users (user_id, email, password_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    account.user_id.0,
                    account.email,
                    account.password_hash,
                    models::encode_ts(&account.created_at),
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Look up an account by email.
pub async fn find_by_email(
    db: &Database,
    email: &str,
) -> Result<Option<UserAccount>, TrendpulseError> {
    let email = email.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, email, password_hash, created_at
                 FROM users WHERE email = ?1",
            )?;
            let result = stmt.query_row(params![email], |row| {
                let raw_ts: String = row.get(3)?;
                Ok(UserAccount {
                    user_id: UserId(row.get(0)?),
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                    created_at: models::decode_ts(3, &raw_ts)?,
                })
            });
            match result {
                Ok(account) => Ok(Some(account)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}
