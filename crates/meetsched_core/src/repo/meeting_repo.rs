//! Meeting repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the persistence APIs behind the four scheduling operations.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A meeting and its membership rows are created in one transaction and
//!   deleted in one transaction; orphaned memberships never persist.
//! - Title lookup with duplicate titles resolves to the lowest meeting id.
//! - Date-equality listings are ordered by meeting id ascending.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::meeting::{Meeting, MeetingId, Membership};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEETING_SELECT_SQL: &str = "SELECT id, title, date FROM meetings";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for meeting persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(MeetingId),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "meeting not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Request model for scheduling a meeting with its initial participants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMeeting {
    /// Free text, including empty; no uniqueness requirement.
    pub title: String,
    /// Accepted as opaque text; ISO-8601 `YYYY-MM-DD` expected.
    pub date: String,
    /// Ordered participant names; order is preserved for reporting only.
    pub participants: Vec<String>,
}

/// Repository interface for the scheduling store.
pub trait MeetingRepository {
    /// Creates one meeting row plus one membership row per participant, as a
    /// single unit of work, and returns the assigned meeting id.
    fn schedule_meeting(&mut self, request: &NewMeeting) -> RepoResult<MeetingId>;
    /// Lists meetings having a membership that exactly matches `name`,
    /// ordered by date ascending (string comparison), ties broken by id.
    /// One element per matching membership row, so a name listed twice on a
    /// meeting yields that meeting twice.
    fn meetings_for_participant(&self, name: &str) -> RepoResult<Vec<Meeting>>;
    /// Finds the meeting with the lowest id whose title exactly matches.
    fn find_meeting_by_title(&self, title: &str) -> RepoResult<Option<Meeting>>;
    /// Deletes the meeting and all its membership rows as a single unit of
    /// work. Returns `NotFound` (with nothing deleted) for an unknown id.
    fn cancel_meeting(&mut self, id: MeetingId) -> RepoResult<()>;
    /// Lists meetings whose stored date exactly equals `date`, ordered by id
    /// ascending.
    fn meetings_on(&self, date: &str) -> RepoResult<Vec<Meeting>>;
    /// Lists membership rows of one meeting, ordered by id ascending.
    fn memberships_for_meeting(&self, id: MeetingId) -> RepoResult<Vec<Membership>>;
}

/// SQLite-backed meeting repository.
pub struct SqliteMeetingRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteMeetingRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// Rejects connections that did not go through `db::open_db` bootstrap,
    /// so repository SQL never runs against a missing or stale schema.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        for table in ["meetings", "participants"] {
            if !table_exists(conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }

        Ok(Self { conn })
    }
}

impl MeetingRepository for SqliteMeetingRepository<'_> {
    fn schedule_meeting(&mut self, request: &NewMeeting) -> RepoResult<MeetingId> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO meetings (title, date) VALUES (?1, ?2);",
            params![request.title, request.date],
        )?;
        let meeting_id = tx.last_insert_rowid();

        {
            let mut stmt =
                tx.prepare("INSERT INTO participants (meeting_id, name) VALUES (?1, ?2);")?;
            for name in &request.participants {
                stmt.execute(params![meeting_id, name])?;
            }
        }

        tx.commit()?;
        Ok(meeting_id)
    }

    fn meetings_for_participant(&self, name: &str) -> RepoResult<Vec<Meeting>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.id, m.title, m.date
             FROM meetings m
             JOIN participants p ON p.meeting_id = m.id
             WHERE p.name = ?1
             ORDER BY m.date ASC, m.id ASC;",
        )?;

        let mut rows = stmt.query([name])?;
        let mut meetings = Vec::new();
        while let Some(row) = rows.next()? {
            meetings.push(parse_meeting_row(row)?);
        }

        Ok(meetings)
    }

    fn find_meeting_by_title(&self, title: &str) -> RepoResult<Option<Meeting>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MEETING_SELECT_SQL}
             WHERE title = ?1
             ORDER BY id ASC
             LIMIT 1;"
        ))?;

        let mut rows = stmt.query([title])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_meeting_row(row)?));
        }

        Ok(None)
    }

    fn cancel_meeting(&mut self, id: MeetingId) -> RepoResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM participants WHERE meeting_id = ?1;", [id])?;
        let deleted = tx.execute("DELETE FROM meetings WHERE id = ?1;", [id])?;
        if deleted == 0 {
            // Dropping the transaction rolls back the membership delete.
            return Err(RepoError::NotFound(id));
        }

        tx.commit()?;
        Ok(())
    }

    fn meetings_on(&self, date: &str) -> RepoResult<Vec<Meeting>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MEETING_SELECT_SQL}
             WHERE date = ?1
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query([date])?;
        let mut meetings = Vec::new();
        while let Some(row) = rows.next()? {
            meetings.push(parse_meeting_row(row)?);
        }

        Ok(meetings)
    }

    fn memberships_for_meeting(&self, id: MeetingId) -> RepoResult<Vec<Membership>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, meeting_id, name
             FROM participants
             WHERE meeting_id = ?1
             ORDER BY id ASC;",
        )?;

        let mut rows = stmt.query([id])?;
        let mut memberships = Vec::new();
        while let Some(row) = rows.next()? {
            memberships.push(Membership {
                id: row.get("id")?,
                meeting_id: row.get("meeting_id")?,
                name: row.get("name")?,
            });
        }

        Ok(memberships)
    }
}

fn parse_meeting_row(row: &Row<'_>) -> RepoResult<Meeting> {
    Ok(Meeting {
        id: row.get("id")?,
        title: row.get("title")?,
        date: row.get("date")?,
    })
}

fn table_exists(conn: &Connection, table_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
