//! Domain model for meetings and participant memberships.
//!
//! # Responsibility
//! - Define the canonical records used by core business logic.
//!
//! # Invariants
//! - Every meeting is identified by a stable `MeetingId` that is never
//!   reused, even after cancellation.
//! - Memberships never outlive their owning meeting.

pub mod meeting;
