use meetsched_core::db::open_db_in_memory;
use meetsched_core::{FixedClock, SchedulerService, SqliteMeetingRepository};
use rusqlite::Connection;

fn service_at<'conn>(
    conn: &'conn mut Connection,
    today: &str,
) -> SchedulerService<SqliteMeetingRepository<'conn>, FixedClock> {
    let repo = SqliteMeetingRepository::try_new(conn).unwrap();
    SchedulerService::new(repo, FixedClock::new(today))
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn schedule_query_cancel_requery_end_to_end() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    let confirmation = service
        .schedule("Standup", "2024-05-01", &names(&["Alice", "Bob"]))
        .unwrap();
    assert_eq!(
        confirmation,
        "Meeting 'Standup' scheduled on 2024-05-01 with Alice, Bob."
    );

    assert_eq!(
        service.schedule_for("Alice").unwrap(),
        "Standup on 2024-05-01"
    );

    assert_eq!(
        service.cancel("Standup").unwrap(),
        "Meeting 'Standup' has been cancelled."
    );

    assert_eq!(
        service.schedule_for("Alice").unwrap(),
        "No upcoming meetings found for Alice."
    );
}

#[test]
fn schedule_with_empty_participant_list_confirms_with_empty_tail() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    let confirmation = service.schedule("Planning", "2024-06-01", &[]).unwrap();
    assert_eq!(
        confirmation,
        "Meeting 'Planning' scheduled on 2024-06-01 with ."
    );
}

#[test]
fn every_listed_participant_sees_the_meeting() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    let participants = names(&["Alice", "Bob", "Carol"]);
    service
        .schedule("Retro", "2024-07-15", &participants)
        .unwrap();

    for participant in &participants {
        let listing = service.schedule_for(participant).unwrap();
        assert!(
            listing.contains("Retro on 2024-07-15"),
            "{participant} should see the meeting, got: {listing}"
        );
    }
}

#[test]
fn schedule_for_unknown_participant_returns_fixed_not_found_text() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service
        .schedule("Standup", "2024-05-01", &names(&["Alice"]))
        .unwrap();

    let listing = service.schedule_for("Mallory").unwrap();
    assert_eq!(listing, "No upcoming meetings found for Mallory.");
    assert!(!listing.is_empty());
}

#[test]
fn participant_name_match_is_case_sensitive() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service
        .schedule("Standup", "2024-05-01", &names(&["Alice"]))
        .unwrap();

    assert_eq!(
        service.schedule_for("alice").unwrap(),
        "No upcoming meetings found for alice."
    );
}

#[test]
fn schedule_for_lists_meetings_in_ascending_date_order() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service
        .schedule("Later", "2024-09-01", &names(&["Alice"]))
        .unwrap();
    service
        .schedule("Sooner", "2024-02-01", &names(&["Alice"]))
        .unwrap();
    service
        .schedule("Middle", "2024-05-10", &names(&["Alice"]))
        .unwrap();

    assert_eq!(
        service.schedule_for("Alice").unwrap(),
        "Sooner on 2024-02-01\nMiddle on 2024-05-10\nLater on 2024-09-01"
    );
}

#[test]
fn duplicate_membership_produces_one_line_per_row() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service
        .schedule("Standup", "2024-05-01", &names(&["Alice", "Alice"]))
        .unwrap();

    assert_eq!(
        service.schedule_for("Alice").unwrap(),
        "Standup on 2024-05-01\nStandup on 2024-05-01"
    );
}

#[test]
fn cancel_twice_returns_not_found_on_second_call() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service
        .schedule("Standup", "2024-05-01", &names(&["Alice"]))
        .unwrap();

    assert_eq!(
        service.cancel("Standup").unwrap(),
        "Meeting 'Standup' has been cancelled."
    );
    assert_eq!(
        service.cancel("Standup").unwrap(),
        "No meeting found with title 'Standup'."
    );
}

#[test]
fn cancel_unknown_title_mutates_nothing() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service
        .schedule("Standup", "2024-05-01", &names(&["Alice"]))
        .unwrap();

    assert_eq!(
        service.cancel("Offsite").unwrap(),
        "No meeting found with title 'Offsite'."
    );
    assert_eq!(
        service.schedule_for("Alice").unwrap(),
        "Standup on 2024-05-01"
    );
}

#[test]
fn cancel_with_duplicate_titles_removes_lowest_id_only() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service
        .schedule("Sync", "2024-05-01", &names(&["Alice"]))
        .unwrap();
    service
        .schedule("Sync", "2024-06-01", &names(&["Bob"]))
        .unwrap();

    service.cancel("Sync").unwrap();

    assert_eq!(
        service.schedule_for("Alice").unwrap(),
        "No upcoming meetings found for Alice."
    );
    assert_eq!(service.schedule_for("Bob").unwrap(), "Sync on 2024-06-01");
}

#[test]
fn today_with_no_matching_date_returns_fixed_text() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-02");

    service
        .schedule("Standup", "2024-05-01", &names(&["Alice"]))
        .unwrap();

    assert_eq!(service.today().unwrap(), "No meetings scheduled for today.");
}

#[test]
fn today_lists_titles_matching_the_clock_date_in_insertion_order() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service
        .schedule("Standup", "2024-05-01", &names(&["Alice"]))
        .unwrap();
    service.schedule("Offsite", "2024-05-02", &[]).unwrap();
    service.schedule("Review", "2024-05-01", &[]).unwrap();

    assert_eq!(
        service.today().unwrap(),
        "Today's meetings:\nStandup\nReview"
    );
}

#[test]
fn today_repeats_a_title_once_per_insertion() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    service.schedule("Standup", "2024-05-01", &[]).unwrap();
    service.schedule("Standup", "2024-05-01", &[]).unwrap();

    assert_eq!(
        service.today().unwrap(),
        "Today's meetings:\nStandup\nStandup"
    );
}

#[test]
fn non_iso_date_is_accepted_and_stored_unchanged() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    let confirmation = service
        .schedule("Kickoff", "next Tuesday", &names(&["Alice"]))
        .unwrap();
    assert_eq!(
        confirmation,
        "Meeting 'Kickoff' scheduled on next Tuesday with Alice."
    );
    assert_eq!(
        service.schedule_for("Alice").unwrap(),
        "Kickoff on next Tuesday"
    );
}

#[test]
fn empty_title_is_accepted() {
    let mut conn = open_db_in_memory().unwrap();
    let mut service = service_at(&mut conn, "2024-05-01");

    let confirmation = service.schedule("", "2024-05-01", &names(&["Alice"])).unwrap();
    assert_eq!(
        confirmation,
        "Meeting '' scheduled on 2024-05-01 with Alice."
    );

    assert_eq!(
        service.cancel("").unwrap(),
        "Meeting '' has been cancelled."
    );
}
