//! Integration tests for inbox ordering.
//!
//! The repository orders by `created_at DESC, id DESC`. These tests pin the
//! comparator itself: newest first, with insertion order (serial id) as the
//! stable tie-break.

use verdant_integration_tests::{sample_notification, ts};

use verdant_api::models::Notification;

/// The inbox comparator: `created_at DESC, id DESC`.
fn inbox_order(a: &Notification, b: &Notification) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.as_i32().cmp(&a.id.as_i32()))
}

#[test]
fn test_newest_first() {
    let mut inbox = vec![
        sample_notification(1, 7, 1_000),
        sample_notification(2, 7, 3_000),
        sample_notification(3, 7, 2_000),
    ];
    inbox.sort_by(inbox_order);

    let ids: Vec<i32> = inbox.iter().map(|n| n.id.as_i32()).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_created_at_non_increasing() {
    let mut inbox: Vec<Notification> = (1..=20)
        .map(|i| sample_notification(i, 7, i64::from(i % 5) * 100))
        .collect();
    inbox.sort_by(inbox_order);

    for pair in inbox.windows(2) {
        let (Some(newer), Some(older)) = (pair.first(), pair.get(1)) else {
            unreachable!("windows(2) yields pairs");
        };
        assert!(
            newer.created_at >= older.created_at,
            "createdAt must be non-increasing across consecutive elements"
        );
    }
}

#[test]
fn test_ties_fall_back_to_insertion_order() {
    // Identical created_at (a fan-out batch inserted in the same instant):
    // higher serial id means later insertion, so it sorts first
    let mut inbox = vec![
        sample_notification(10, 7, 2_000),
        sample_notification(12, 7, 2_000),
        sample_notification(11, 7, 2_000),
    ];
    inbox.sort_by(inbox_order);

    let ids: Vec<i32> = inbox.iter().map(|n| n.id.as_i32()).collect();
    assert_eq!(ids, vec![12, 11, 10]);

    // Stable across repeated sorts
    let before: Vec<i32> = inbox.iter().map(|n| n.id.as_i32()).collect();
    inbox.sort_by(inbox_order);
    let after: Vec<i32> = inbox.iter().map(|n| n.id.as_i32()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_ordering_ignores_read_state() {
    let mut read_one = sample_notification(1, 7, 5_000);
    read_one.read = true;
    let unread = sample_notification(2, 7, 4_000);

    let mut inbox = vec![unread, read_one];
    inbox.sort_by(inbox_order);

    // Read flag plays no part; strictly newest first
    assert_eq!(inbox.first().map(|n| n.id.as_i32()), Some(1));
    assert_eq!(inbox.first().map(|n| n.created_at), Some(ts(5_000)));
}
