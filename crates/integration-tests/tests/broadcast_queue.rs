//! Integration tests for the new-product broadcast queue.
//!
//! These verify the queue's status vocabulary and the fan-out message
//! format without requiring a running worker or database.

use verdant_api::db::broadcasts::BroadcastStatus;
use verdant_api::services::broadcast::new_product_message;

// =============================================================================
// Broadcast Status Tests
// =============================================================================

#[test]
fn test_broadcast_status_enum_values() {
    // Verify all expected status values exist by using them
    assert!(matches!(BroadcastStatus::Queued, BroadcastStatus::Queued));
    assert!(matches!(BroadcastStatus::Running, BroadcastStatus::Running));
    assert!(matches!(BroadcastStatus::Completed, BroadcastStatus::Completed));
    assert!(matches!(BroadcastStatus::Failed, BroadcastStatus::Failed));
}

#[test]
fn test_broadcast_status_copy() {
    let status = BroadcastStatus::Queued;
    let copied = status; // BroadcastStatus implements Copy
    assert!(matches!(copied, BroadcastStatus::Queued));
    // Verify original still usable (proving it's Copy)
    assert!(matches!(status, BroadcastStatus::Queued));
}

#[test]
fn test_broadcast_status_eq() {
    assert_eq!(BroadcastStatus::Queued, BroadcastStatus::Queued);
    assert_ne!(BroadcastStatus::Queued, BroadcastStatus::Running);
    assert_ne!(BroadcastStatus::Completed, BroadcastStatus::Failed);
}

// =============================================================================
// State Transition Tests (Logical)
// =============================================================================

/// Valid state transitions for a broadcast.
/// Queued -> Running -> Completed
/// Queued -> Running -> Failed
#[test]
fn test_valid_state_transitions() {
    let valid_transitions = [
        (BroadcastStatus::Queued, BroadcastStatus::Running),
        (BroadcastStatus::Running, BroadcastStatus::Completed),
        (BroadcastStatus::Running, BroadcastStatus::Failed),
    ];

    // Just verify the states can be compared (the actual claim/finish logic
    // lives in the repository)
    for (from, to) in valid_transitions {
        assert_ne!(from, to, "Transition should be between different states");
    }
}

#[test]
fn test_terminal_states_are_distinct() {
    // Completed and Failed are terminal; a finished broadcast is never
    // re-claimed because claim_next only selects Queued rows
    assert_ne!(BroadcastStatus::Completed, BroadcastStatus::Failed);
    assert_ne!(BroadcastStatus::Completed, BroadcastStatus::Queued);
    assert_ne!(BroadcastStatus::Failed, BroadcastStatus::Queued);
}

// =============================================================================
// Fan-out Message Format
// =============================================================================

#[test]
fn test_message_matches_inbox_contract() {
    // The UI string-matches this prefix; the format is part of the API
    assert_eq!(
        new_product_message("Golden Beets"),
        "New product available: Golden Beets"
    );
}

#[test]
fn test_message_is_per_product_not_per_user() {
    // Every recipient of one broadcast sees the identical message
    let a = new_product_message("Golden Beets");
    let b = new_product_message("Golden Beets");
    assert_eq!(a, b);
}
