//! Core domain logic for the meeting scheduling store.
//! This crate is the single source of truth for scheduling invariants.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::meeting::{Meeting, MeetingId, Membership, MembershipId};
pub use repo::meeting_repo::{
    MeetingRepository, NewMeeting, RepoError, RepoResult, SqliteMeetingRepository,
};
pub use service::scheduler_service::SchedulerService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
