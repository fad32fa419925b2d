// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily streak tracking.
//!
//! A user's streak counts consecutive days with a successful engagement.
//! The update rule is idempotent within a calendar day: a second successful
//! update on the same UTC day leaves the counters unchanged. A failed day
//! resets the current streak to zero; the high-water mark is never lowered.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use tracing::debug;

use trendpulse_core::{ProgressStore, StreakRecord, TrendpulseError, UserId};

/// True when both timestamps fall on the same UTC calendar date.
fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    let (a, b) = (a.date_naive(), b.date_naive());
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Apply one engagement report to a record in place.
///
/// Rules, in order:
/// - success on a new day: current streak rises by one, high-water mark
///   follows if exceeded;
/// - failure (any day): current streak resets to zero;
/// - success on the same day as the last update: counters unchanged.
///
/// `last_updated` moves to `now` unconditionally, including on same-day
/// repeats. A consequence is that a failure report stamps the day, so a
/// later success that same day does not increment.
pub fn apply_update(record: &mut StreakRecord, success: bool, now: DateTime<Utc>) {
    if success {
        if !same_day(record.last_updated, now) {
            record.current_streak += 1;
            if record.current_streak > record.highest_streak {
                record.highest_streak = record.current_streak;
            }
        }
    } else {
        record.current_streak = 0;
    }
    record.last_updated = now;
}

/// Streak read and update operations over a [`ProgressStore`].
///
/// The read-modify-write here is not transactional; concurrent updates for
/// the same user are last-write-wins at the store.
pub struct ProgressTracker {
    store: Arc<dyn ProgressStore>,
}

impl ProgressTracker {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }

    /// Fetch the user's streak record, creating a zeroed one on first contact.
    ///
    /// The fresh record is persisted before being returned, so a subsequent
    /// read observes the same record.
    pub async fn get_or_create(&self, user_id: &UserId) -> Result<StreakRecord, TrendpulseError> {
        if let Some(record) = self.store.get(user_id).await? {
            return Ok(record);
        }
        let record = StreakRecord::new(user_id.clone(), Utc::now());
        debug!(user_id = %user_id, "creating streak record on first contact");
        self.store.upsert(&record).await?;
        Ok(record)
    }

    /// Record one engagement report and return the updated record.
    pub async fn update(
        &self,
        user_id: &UserId,
        success: bool,
    ) -> Result<StreakRecord, TrendpulseError> {
        self.update_at(user_id, success, Utc::now()).await
    }

    /// As [`update`](Self::update), with an explicit clock for tests.
    pub async fn update_at(
        &self,
        user_id: &UserId,
        success: bool,
        now: DateTime<Utc>,
    ) -> Result<StreakRecord, TrendpulseError> {
        let mut record = match self.store.get(user_id).await? {
            Some(record) => record,
            None => StreakRecord::new(user_id.clone(), now),
        };
        apply_update(&mut record, success, now);
        self.store.upsert(&record).await?;
        debug!(
            user_id = %user_id,
            success,
            current = record.current_streak,
            highest = record.highest_streak,
            "streak updated"
        );
        Ok(record)
    }
}
