//! Command-line probe for the scheduling store.
//!
//! # Responsibility
//! - Drive the four core operations from argv against a database file.
//! - Print each operation's text result unchanged.
//!
//! Stands in for the tool-invocation transport; it adds no semantics of its
//! own.

use meetsched_core::db::open_db;
use meetsched_core::{
    default_log_level, init_logging, SchedulerService, SqliteMeetingRepository, SystemClock,
};
use std::process::ExitCode;

const USAGE: &str = "usage: meetsched <db-path> <command> [args]

commands:
  schedule <title> <date> [participant ...]
  schedule-for <participant>
  cancel <title>
  today";

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [db_path, command, rest @ ..] = args.as_slice() else {
        return Err(USAGE.to_string());
    };

    init_cli_logging(db_path);

    let mut conn =
        open_db(db_path).map_err(|err| format!("failed to open database: {err}"))?;
    let repo = SqliteMeetingRepository::try_new(&mut conn).map_err(|err| err.to_string())?;
    let mut service = SchedulerService::new(repo, SystemClock);

    match (command.as_str(), rest) {
        ("schedule", [title, date, participants @ ..]) => service
            .schedule(title, date, participants)
            .map_err(|err| err.to_string()),
        ("schedule-for", [participant]) => service
            .schedule_for(participant)
            .map_err(|err| err.to_string()),
        ("cancel", [title]) => service.cancel(title).map_err(|err| err.to_string()),
        ("today", []) => service.today().map_err(|err| err.to_string()),
        _ => Err(USAGE.to_string()),
    }
}

/// Routes core log events into a `meetsched-logs` directory next to the
/// database file. Best effort: a probe run stays usable without logging.
fn init_cli_logging(db_path: &str) {
    let log_dir = std::path::absolute(db_path)
        .ok()
        .and_then(|path| path.parent().map(|parent| parent.join("meetsched-logs")));

    let Some(dir) = log_dir.as_ref().and_then(|dir| dir.to_str()) else {
        return;
    };
    if let Err(message) = init_logging(default_log_level(), dir) {
        eprintln!("logging disabled: {message}");
    }
}
