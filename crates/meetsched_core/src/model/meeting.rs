//! Meeting and membership domain records.
//!
//! # Responsibility
//! - Define the two canonical records of the scheduling store.
//! - Provide the date shape check used for boundary diagnostics.
//!
//! # Invariants
//! - `id` values are system-assigned, unique and never reused.
//! - A membership references exactly one existing meeting.
//! - Records are immutable after creation; there is no update path.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Stable identifier for a meeting.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Backed by the SQLite AUTOINCREMENT rowid, so values are monotonic and
/// never reused after deletion.
pub type MeetingId = i64;

/// Stable identifier for a participant membership row.
pub type MembershipId = i64;

static ISO_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date shape regex"));

/// A scheduled event with a title and a calendar date.
///
/// The date is free text by contract: any string is accepted and stored
/// unchanged. Chronological ordering of query results relies on the date
/// being shaped `YYYY-MM-DD`; see [`is_iso_date_shape`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// System-assigned stable id.
    pub id: MeetingId,
    /// Free text; not required to be unique across meetings.
    pub title: String,
    /// Calendar date as ISO-8601 `YYYY-MM-DD` text (expected, not enforced).
    pub date: String,
}

/// The association of one participant name to one meeting.
///
/// There is no standalone participant entity; a participant is just a name
/// string scoped to a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// System-assigned stable id.
    pub id: MembershipId,
    /// Owning meeting; rows are deleted together with it.
    pub meeting_id: MeetingId,
    /// Free text, matched exactly and case-sensitively by queries.
    pub name: String,
}

/// Returns whether `value` has the `YYYY-MM-DD` shape.
///
/// Shape only: `2024-13-99` passes. The store accepts any date string, so
/// this check feeds a warn-level diagnostic rather than a rejection — a
/// non-ISO date sorts lexicographically, not chronologically, in schedule
/// queries.
pub fn is_iso_date_shape(value: &str) -> bool {
    ISO_DATE_SHAPE.is_match(value)
}
