// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `trendpulse-core::types` for use across
//! component boundaries. This module re-exports them for convenience within
//! the storage crate, plus the row-level timestamp codec.

use chrono::{DateTime, SecondsFormat, Utc};

pub use trendpulse_core::types::{ChatTranscriptEntry, StreakRecord, UserAccount, UserId};

/// Encode a timestamp as RFC 3339 UTC text with millisecond precision,
/// e.g. `2026-01-01T00:00:00.000Z`. Lexicographic order equals chronological
/// order, which the transcript index relies on.
pub(crate) fn encode_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Decode a stored timestamp, mapping parse failures onto a rusqlite
/// column-conversion error so row closures can use `?`.
pub(crate) fn decode_ts(idx: usize, raw: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
