//! Scheduling use-case service.
//!
//! # Responsibility
//! - Expose the four operations of the scheduling store as text-returning
//!   calls: schedule, schedule_for, cancel, today.
//! - Delegate persistence to the repository and "today" to the injected
//!   clock.
//!
//! # Invariants
//! - Not-found outcomes are normal results rendered as text, never `Err`.
//! - Only storage faults propagate as `Err`; they are not retried.
//! - Input strings are accepted as-is; a non-ISO date is stored unchanged
//!   and only reported through a warn-level log event.

use crate::clock::Clock;
use crate::model::meeting::is_iso_date_shape;
use crate::repo::meeting_repo::{MeetingRepository, NewMeeting, RepoResult};
use log::{info, warn};

/// Use-case service wrapper for the four scheduling operations.
pub struct SchedulerService<R: MeetingRepository, C: Clock> {
    repo: R,
    clock: C,
}

impl<R: MeetingRepository, C: Clock> SchedulerService<R, C> {
    /// Creates a service from a repository and a clock source.
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Records a meeting with its participants and returns a confirmation.
    ///
    /// # Contract
    /// - Accepts any strings, including an empty title and an empty
    ///   participant list; no input is rejected.
    /// - The meeting row and all membership rows commit as one unit of work.
    /// - Participant order is preserved in the confirmation text only.
    pub fn schedule(
        &mut self,
        title: &str,
        date: &str,
        participants: &[String],
    ) -> RepoResult<String> {
        if !is_iso_date_shape(date) {
            warn!(
                "event=schedule module=service status=start date_shape=non_iso len={}",
                date.len()
            );
        }

        let request = NewMeeting {
            title: title.to_string(),
            date: date.to_string(),
            participants: participants.to_vec(),
        };
        let meeting_id = self.repo.schedule_meeting(&request)?;

        info!(
            "event=schedule module=service status=ok meeting_id={meeting_id} participant_count={}",
            participants.len()
        );
        Ok(format!(
            "Meeting '{title}' scheduled on {date} with {}.",
            participants.join(", ")
        ))
    }

    /// Lists a participant's meetings, one `{title} on {date}` line per
    /// matching membership row, in ascending date order.
    ///
    /// Exact, case-sensitive name match. Returns the fixed not-found text
    /// when nothing matches.
    pub fn schedule_for(&self, participant: &str) -> RepoResult<String> {
        let meetings = self.repo.meetings_for_participant(participant)?;
        if meetings.is_empty() {
            return Ok(format!("No upcoming meetings found for {participant}."));
        }

        let lines: Vec<String> = meetings
            .iter()
            .map(|meeting| format!("{} on {}", meeting.title, meeting.date))
            .collect();
        Ok(lines.join("\n"))
    }

    /// Cancels the meeting with the given title, removing its memberships in
    /// the same unit of work.
    ///
    /// Duplicate titles resolve to the lowest meeting id. A title with no
    /// match returns the fixed not-found text and mutates nothing, which
    /// also makes a repeated cancel land on the not-found path.
    pub fn cancel(&mut self, title: &str) -> RepoResult<String> {
        let Some(meeting) = self.repo.find_meeting_by_title(title)? else {
            return Ok(format!("No meeting found with title '{title}'."));
        };

        self.repo.cancel_meeting(meeting.id)?;
        info!(
            "event=cancel module=service status=ok meeting_id={}",
            meeting.id
        );
        Ok(format!("Meeting '{title}' has been cancelled."))
    }

    /// Lists the titles of meetings whose stored date equals the clock's
    /// current ISO date, in meeting-id order.
    pub fn today(&self) -> RepoResult<String> {
        let today = self.clock.today_iso();
        let meetings = self.repo.meetings_on(&today)?;
        if meetings.is_empty() {
            return Ok("No meetings scheduled for today.".to_string());
        }

        let mut output = String::from("Today's meetings:");
        for meeting in &meetings {
            output.push('\n');
            output.push_str(&meeting.title);
        }
        Ok(output)
    }
}
