// Copyright (C) 2026 Frontdesk Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account, staff, and session persistence tests.

use super::test_persistence;
use crate::{Persistence, verify_password};
use frontdesk_domain::format_timestamp;
use time::macros::datetime;

#[test]
fn test_account_email_normalized_and_password_hashed() {
    let mut persistence: Persistence = test_persistence();

    let account_id = persistence
        .create_account("Desk@Example.COM", "a sufficiently long password")
        .unwrap();

    let account = persistence
        .get_account_by_email("desk@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(account.account_id, account_id);
    assert_eq!(account.email, "desk@example.com");
    assert_ne!(account.password_hash, "a sufficiently long password");
    assert!(verify_password("a sufficiently long password", &account.password_hash).unwrap());
    assert!(!verify_password("wrong password", &account.password_hash).unwrap());
}

#[test]
fn test_duplicate_account_email_rejected() {
    let mut persistence: Persistence = test_persistence();

    persistence
        .create_account("desk@example.com", "a sufficiently long password")
        .unwrap();
    assert!(
        persistence
            .create_account("DESK@example.com", "another long password")
            .is_err()
    );
}

#[test]
fn test_staff_linked_to_account() {
    let mut persistence: Persistence = test_persistence();

    let account_id = persistence
        .create_account("desk@example.com", "a sufficiently long password")
        .unwrap();
    let staff_id = persistence
        .create_staff(account_id, "desk@example.com", "Ada Obi", "manager")
        .unwrap();

    let by_account = persistence
        .get_staff_by_account(account_id)
        .unwrap()
        .unwrap();
    assert_eq!(by_account.staff_id, staff_id);
    assert_eq!(by_account.full_name, "Ada Obi");

    let by_email = persistence
        .get_staff_by_email("desk@example.com")
        .unwrap()
        .unwrap();
    assert_eq!(by_email.staff_id, staff_id);
}

#[test]
fn test_account_without_staff_record_is_an_orphan() {
    let mut persistence: Persistence = test_persistence();

    let account_id = persistence
        .create_account("orphan@example.com", "a sufficiently long password")
        .unwrap();
    assert!(
        persistence
            .get_staff_by_account(account_id)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_session_round_trip_and_deletion() {
    let mut persistence: Persistence = test_persistence();

    let account_id = persistence
        .create_account("desk@example.com", "a sufficiently long password")
        .unwrap();
    let expires_at = format_timestamp(datetime!(2099-01-01 00:00:00 UTC)).unwrap();
    persistence
        .create_session("token-1", account_id, &expires_at)
        .unwrap();

    let session = persistence
        .get_session_by_token("token-1")
        .unwrap()
        .unwrap();
    assert_eq!(session.account_id, account_id);
    assert_eq!(session.expires_at, expires_at);

    persistence
        .update_session_activity(session.session_id)
        .unwrap();

    persistence.delete_session("token-1").unwrap();
    assert!(persistence.get_session_by_token("token-1").unwrap().is_none());

    // Sign-out is idempotent.
    persistence.delete_session("token-1").unwrap();
}

#[test]
fn test_password_update_replaces_hash() {
    let mut persistence: Persistence = test_persistence();

    let account_id = persistence
        .create_account("desk@example.com", "a sufficiently long password")
        .unwrap();
    persistence
        .update_account_password(account_id, "an even longer new password")
        .unwrap();

    let account = persistence
        .get_account_by_id(account_id)
        .unwrap()
        .unwrap();
    assert!(verify_password("an even longer new password", &account.password_hash).unwrap());
    assert!(!verify_password("a sufficiently long password", &account.password_hash).unwrap());
}
