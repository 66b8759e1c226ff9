use std::sync::{Arc, Mutex};

use serde_json::json;

use veranda_bridge::{
    Location, LocationCallback, LocationOptions, Position, PositionError, PositionErrorCode,
    TrackingMode,
};
use veranda_remote::RecordingRemote;

#[derive(Default)]
struct RecordingCallback {
    fixes: Mutex<Vec<Position>>,
    failures: Mutex<Vec<PositionError>>,
}

impl RecordingCallback {
    fn fixes(&self) -> Vec<Position> {
        self.fixes.lock().expect("fixes mutex poisoned").clone()
    }

    fn failures(&self) -> Vec<PositionError> {
        self.failures.lock().expect("failures mutex poisoned").clone()
    }
}

impl LocationCallback for RecordingCallback {
    fn on_success(&self, position: &Position) {
        self.fixes
            .lock()
            .expect("fixes mutex poisoned")
            .push(position.clone());
    }

    fn on_error(&self, error: &PositionError) {
        self.failures
            .lock()
            .expect("failures mutex poisoned")
            .push(error.clone());
    }
}

fn location_with_remote() -> (Location, Arc<RecordingRemote>) {
    let remote = Arc::new(RecordingRemote::new());
    (Location::new(remote.clone()), remote)
}

fn fix_payload() -> serde_json::Value {
    json!({ "latitude": 52.52, "longitude": 13.405, "accuracy": 10.0 })
}

#[test]
fn determine_position_requests_a_single_fix() {
    let (mut location, remote) = location_with_remote();

    location.determine_position(LocationOptions::default(), Arc::new(RecordingCallback::default()));

    assert_eq!(remote.property_sets("needsPosition"), vec![json!("ONCE")]);
    assert_eq!(location.tracking_mode(), TrackingMode::Once);
}

#[test]
fn options_are_transmitted_alongside_the_mode_switch() {
    let (mut location, remote) = location_with_remote();
    let options = LocationOptions {
        frequency: 5_000,
        maximum_age: 60_000,
        enable_high_accuracy: true,
    };

    location.watch_position(options, Arc::new(RecordingCallback::default()));

    assert_eq!(remote.property_sets("frequency"), vec![json!(5_000)]);
    assert_eq!(remote.property_sets("maximumAge"), vec![json!(60_000)]);
    assert_eq!(remote.property_sets("highAccuracy"), vec![json!(true)]);
    assert_eq!(
        remote.property_sets("needsPosition"),
        vec![json!("CONTINUOUS")]
    );
}

#[test]
fn a_once_fix_fires_the_callback_and_resets_the_mode() {
    let (mut location, remote) = location_with_remote();
    let callback = Arc::new(RecordingCallback::default());
    location.determine_position(LocationOptions::default(), callback.clone());

    location.notify("LocationUpdate", Some(&fix_payload()));

    assert_eq!(callback.fixes().len(), 1);
    assert_eq!(callback.fixes()[0].latitude, 52.52);
    assert_eq!(location.tracking_mode(), TrackingMode::Never);
    assert_eq!(
        remote.property_sets("needsPosition"),
        vec![json!("ONCE"), json!("NEVER")]
    );

    location.notify("LocationUpdate", Some(&fix_payload()));

    assert_eq!(callback.fixes().len(), 1);
}

#[test]
fn continuous_tracking_keeps_delivering_fixes() {
    let (mut location, _remote) = location_with_remote();
    let callback = Arc::new(RecordingCallback::default());
    location.watch_position(LocationOptions::default(), callback.clone());

    location.notify("LocationUpdate", Some(&fix_payload()));
    location.notify("LocationUpdate", Some(&fix_payload()));

    assert_eq!(callback.fixes().len(), 2);
    assert_eq!(location.tracking_mode(), TrackingMode::Continuous);
}

#[test]
fn the_last_fix_is_retained_for_queries() {
    let (mut location, _remote) = location_with_remote();
    location.watch_position(LocationOptions::default(), Arc::new(RecordingCallback::default()));

    location.notify("LocationUpdate", Some(&fix_payload()));

    let position = location.last_position().expect("fix should be retained");
    assert_eq!(position.longitude, 13.405);
}

#[test]
fn an_error_notification_reaches_the_callback() {
    let (mut location, _remote) = location_with_remote();
    let callback = Arc::new(RecordingCallback::default());
    location.determine_position(LocationOptions::default(), callback.clone());

    location.notify(
        "LocationUpdateError",
        Some(&json!({ "errorCode": "PERMISSION_DENIED", "errorMessage": "denied" })),
    );

    let failures = callback.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].code, PositionErrorCode::PermissionDenied);
    assert_eq!(location.tracking_mode(), TrackingMode::Never);
    assert_eq!(
        location.last_error().expect("failure should be retained").code,
        PositionErrorCode::PermissionDenied
    );
}

#[test]
fn clear_watch_resets_the_mode_and_drops_the_callback() {
    let (mut location, remote) = location_with_remote();
    let callback = Arc::new(RecordingCallback::default());
    location.watch_position(LocationOptions::default(), callback.clone());

    location.clear_watch();
    location.notify("LocationUpdate", Some(&fix_payload()));

    assert!(callback.fixes().is_empty());
    assert_eq!(
        remote.property_sets("needsPosition"),
        vec![json!("CONTINUOUS"), json!("NEVER")]
    );
}

#[test]
fn an_undecodable_fix_is_dropped() {
    let (mut location, _remote) = location_with_remote();
    let callback = Arc::new(RecordingCallback::default());
    location.watch_position(LocationOptions::default(), callback.clone());

    location.notify("LocationUpdate", Some(&json!({ "latitude": "north" })));

    assert!(callback.fixes().is_empty());
    assert!(location.last_position().is_none());
}

#[test]
fn dispose_silences_the_facade() {
    let (mut location, remote) = location_with_remote();
    let callback = Arc::new(RecordingCallback::default());
    location.watch_position(LocationOptions::default(), callback.clone());
    let sets_before = remote.ops().len();

    location.dispose();
    location.notify("LocationUpdate", Some(&fix_payload()));
    location.watch_position(LocationOptions::default(), Arc::new(RecordingCallback::default()));

    assert!(location.is_disposed());
    assert!(callback.fixes().is_empty());
    assert_eq!(remote.ops().len(), sets_before);
}
