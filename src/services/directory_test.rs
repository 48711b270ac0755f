use super::*;
use crate::state::test_helpers::{self, dummy_activity, participants_of};

fn small_directory() -> Directory {
    let mut directory = Directory::default();
    directory
        .activities
        .insert("Basketball".into(), dummy_activity(15, &["alex@mergington.edu"]));
    directory
}

// =============================================================================
// enroll
// =============================================================================

#[test]
fn enroll_appends_to_end_of_roster() {
    let mut directory = small_directory();
    let message = enroll(&mut directory, "Basketball", "test@x.edu").unwrap();
    assert_eq!(message, "Signed up test@x.edu for Basketball");
    assert_eq!(
        directory.activities["Basketball"].participants,
        vec!["alex@mergington.edu".to_owned(), "test@x.edu".to_owned()]
    );
}

#[test]
fn enroll_unknown_activity_is_not_found() {
    let mut directory = small_directory();
    let before = directory.clone();
    for name in ["NonExistent", "basketball", "", "Basketball "] {
        assert_eq!(enroll(&mut directory, name, "test@x.edu"), Err(DirectoryError::ActivityNotFound));
    }
    assert_eq!(directory, before);
}

#[test]
fn enroll_twice_conflicts_and_adds_once() {
    let mut directory = small_directory();
    assert!(enroll(&mut directory, "Basketball", "test@x.edu").is_ok());
    assert_eq!(
        enroll(&mut directory, "Basketball", "test@x.edu"),
        Err(DirectoryError::AlreadySignedUp)
    );
    assert_eq!(directory.activities["Basketball"].participants.len(), 2);
}

#[test]
fn enroll_ignores_capacity() {
    let mut directory = Directory::default();
    directory.activities.insert("Tiny".into(), dummy_activity(1, &["a@x.edu"]));
    assert!(enroll(&mut directory, "Tiny", "b@x.edu").is_ok());
    assert_eq!(directory.activities["Tiny"].participants.len(), 2);
}

// =============================================================================
// remove
// =============================================================================

#[test]
fn remove_existing_participant() {
    let mut directory = small_directory();
    let message = remove(&mut directory, "Basketball", "alex@mergington.edu").unwrap();
    assert_eq!(message, "Removed alex@mergington.edu from Basketball");
    assert!(directory.activities["Basketball"].participants.is_empty());
}

#[test]
fn remove_unknown_activity_is_not_found() {
    let mut directory = small_directory();
    assert_eq!(
        remove(&mut directory, "NonExistent", "alex@mergington.edu"),
        Err(DirectoryError::ActivityNotFound)
    );
}

#[test]
fn remove_absent_email_leaves_roster_unchanged() {
    let mut directory = small_directory();
    let before = directory.activities["Basketball"].participants.clone();
    assert_eq!(
        remove(&mut directory, "Basketball", "notsignedup@mergington.edu"),
        Err(DirectoryError::NotSignedUp)
    );
    assert_eq!(directory.activities["Basketball"].participants, before);
}

#[test]
fn remove_preserves_order_of_remaining() {
    let mut directory = Directory::default();
    directory
        .activities
        .insert("Soccer".into(), dummy_activity(22, &["a@x.edu", "b@x.edu", "c@x.edu"]));
    remove(&mut directory, "Soccer", "b@x.edu").unwrap();
    assert_eq!(
        directory.activities["Soccer"].participants,
        vec!["a@x.edu".to_owned(), "c@x.edu".to_owned()]
    );
}

#[test]
fn enroll_then_remove_restores_exact_sequence() {
    let mut directory = Directory::default();
    directory
        .activities
        .insert("Soccer".into(), dummy_activity(22, &["jordan@mergington.edu", "casey@mergington.edu"]));
    let before = directory.clone();

    enroll(&mut directory, "Soccer", "new@x.edu").unwrap();
    remove(&mut directory, "Soccer", "new@x.edu").unwrap();
    assert_eq!(directory, before);
}

#[test]
fn error_messages_are_the_public_details() {
    assert_eq!(DirectoryError::ActivityNotFound.to_string(), "Activity not found");
    assert_eq!(
        DirectoryError::AlreadySignedUp.to_string(),
        "Student already signed up for this activity"
    );
    assert_eq!(
        DirectoryError::NotSignedUp.to_string(),
        "Student is not signed up for this activity"
    );
}

// =============================================================================
// async service
// =============================================================================

#[tokio::test]
async fn list_activities_returns_seeded_snapshot() {
    let state = test_helpers::test_app_state();
    let snapshot = list_activities(&state).await;
    let basketball = &snapshot.activities["Basketball"];
    assert_eq!(basketball.max_participants, 15);
    assert_eq!(basketball.participants, vec!["alex@mergington.edu".to_owned()]);
}

#[tokio::test]
async fn signup_and_unregister_update_shared_state() {
    let state = test_helpers::test_app_state();
    signup(&state, "Basketball", "test@x.edu").await.unwrap();
    assert!(participants_of(&state, "Basketball").await.contains(&"test@x.edu".to_owned()));

    unregister(&state, "Basketball", "test@x.edu").await.unwrap();
    assert_eq!(participants_of(&state, "Basketball").await, vec!["alex@mergington.edu".to_owned()]);
}

#[tokio::test]
async fn unregister_twice_fails_second_time() {
    let state = test_helpers::test_app_state();
    unregister(&state, "Basketball", "alex@mergington.edu").await.unwrap();
    let err = unregister(&state, "Basketball", "alex@mergington.edu").await.unwrap_err();
    assert_eq!(err, DirectoryError::NotSignedUp);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_of_same_email_succeed_once() {
    let state = test_helpers::test_app_state();
    let handles: Vec<_> = (0..32)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move { signup(&state, "Chess Club", "race@x.edu").await })
        })
        .collect();

    let mut ok = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok += 1,
            Err(DirectoryError::AlreadySignedUp) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(conflicts, 31);

    let roster = participants_of(&state, "Chess Club").await;
    assert_eq!(roster.iter().filter(|p| *p == "race@x.edu").count(), 1);
}
