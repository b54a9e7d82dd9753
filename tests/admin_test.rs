//! Unit tests for admin moderation actions: the closed action set, the
//! lock horizon and role derivation.
//!
//! Run with: `cargo test --test admin_test`
use chrono::{Duration, Utc};
use uuid::Uuid;

use oficios_backend::db::admin::{lock_until, role_label};
use oficios_backend::models::users::{AdminAction, AdminActionRequest};

#[test]
fn test_known_actions_deserialize() {
    for (raw, expected) in [
        ("validate", AdminAction::Validate),
        ("lock", AdminAction::Lock),
        ("unlock", AdminAction::Unlock),
        ("delete", AdminAction::Delete),
    ] {
        let request: AdminActionRequest = serde_json::from_value(serde_json::json!({
            "user_id": Uuid::new_v4(),
            "action": raw,
        }))
        .unwrap_or_else(|e| panic!("action {raw} should deserialize: {e}"));
        assert_eq!(request.action, expected);
        assert_eq!(request.lock_days, None);
    }
}

#[test]
fn test_unknown_action_is_rejected() {
    // The action set is closed: anything outside it fails to parse instead
    // of silently doing nothing.
    let result = serde_json::from_value::<AdminActionRequest>(serde_json::json!({
        "user_id": Uuid::new_v4(),
        "action": "ban",
    }));
    assert!(result.is_err());
}

#[test]
fn test_lock_until_honors_day_count() {
    let until = lock_until(Some(5));
    let expected = Utc::now() + Duration::days(5);

    let drift = (until - expected).num_seconds().abs();
    assert!(drift <= 1, "lock expiry drifted {drift}s from now+5d");
}

#[test]
fn test_lock_until_defaults_to_effectively_permanent() {
    let until = lock_until(None);
    assert!(until > Utc::now() + Duration::days(36_000));
}

#[test]
fn test_role_label_precedence() {
    assert_eq!(role_label(true, false, false), "Worker");
    assert_eq!(role_label(false, true, false), "Client");
    assert_eq!(role_label(false, false, true), "Admin");
    assert_eq!(role_label(false, false, false), "Unknown");
    // A user with both detail rows reads as a worker.
    assert_eq!(role_label(true, true, false), "Worker");
    // The admin flag does not shadow a detail row.
    assert_eq!(role_label(true, false, true), "Worker");
}
