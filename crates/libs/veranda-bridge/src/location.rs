use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use veranda_remote::RemoteObject;

/// Channel carrying position fixes from the client.
pub const LOCATION_UPDATE: &str = "LocationUpdate";
/// Channel carrying acquisition failures from the client.
pub const LOCATION_UPDATE_ERROR: &str = "LocationUpdateError";

const NEEDS_POSITION: &str = "needsPosition";
const FREQUENCY: &str = "frequency";
const MAXIMUM_AGE: &str = "maximumAge";
const HIGH_ACCURACY: &str = "highAccuracy";

/// How the client should supply position fixes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackingMode {
    #[default]
    Never,
    Once,
    Continuous,
}

impl TrackingMode {
    fn wire_value(self) -> &'static str {
        match self {
            Self::Never => "NEVER",
            Self::Once => "ONCE",
            Self::Continuous => "CONTINUOUS",
        }
    }
}

/// One position fix reported by the client.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub altitude_accuracy: Option<f64>,
    #[serde(default)]
    pub heading: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    /// Client-side acquisition time, milliseconds since the epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Failure classes a client reports in place of a fix. Codes introduced by
/// newer clients decode as `Unknown`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum PositionErrorCode {
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied,
    #[serde(rename = "POSITION_UNAVAILABLE")]
    PositionUnavailable,
    #[serde(other)]
    Unknown,
}

/// Failure reported by the client in place of a fix.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PositionError {
    #[serde(rename = "errorCode")]
    pub code: PositionErrorCode,
    #[serde(rename = "errorMessage", default)]
    pub message: String,
}

/// Tuning for position acquisition on the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocationOptions {
    /// Update interval while tracking continuously, in milliseconds.
    pub frequency: i32,
    /// Oldest acceptable cached fix, in milliseconds; `-1` accepts any age.
    pub maximum_age: i32,
    pub enable_high_accuracy: bool,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            frequency: 10_000,
            maximum_age: -1,
            enable_high_accuracy: false,
        }
    }
}

/// Receives the outcome of a position request.
pub trait LocationCallback: Send + Sync {
    fn on_success(&self, position: &Position);
    fn on_error(&self, error: &PositionError);
}

/// Position-tracking facade over its own service object.
///
/// A `Once` request is spent by the first fix or failure: the callback is
/// dropped and the client is told to stop supplying positions. Continuous
/// tracking keeps the callback until [`clear_watch`](Self::clear_watch).
pub struct Location {
    remote: Arc<dyn RemoteObject>,
    mode: TrackingMode,
    callback: Option<Arc<dyn LocationCallback>>,
    last_position: Option<Position>,
    last_error: Option<PositionError>,
    disposed: bool,
}

impl Location {
    pub fn new(remote: Arc<dyn RemoteObject>) -> Self {
        Self {
            remote,
            mode: TrackingMode::Never,
            callback: None,
            last_position: None,
            last_error: None,
            disposed: false,
        }
    }

    /// Requests a single fix; `callback` fires at most once.
    pub fn determine_position(
        &mut self,
        options: LocationOptions,
        callback: Arc<dyn LocationCallback>,
    ) {
        self.callback = Some(callback);
        self.switch_mode(TrackingMode::Once, Some(options));
    }

    /// Tracks continuously until [`clear_watch`](Self::clear_watch).
    pub fn watch_position(
        &mut self,
        options: LocationOptions,
        callback: Arc<dyn LocationCallback>,
    ) {
        self.callback = Some(callback);
        self.switch_mode(TrackingMode::Continuous, Some(options));
    }

    /// Stops tracking and drops the stored callback.
    pub fn clear_watch(&mut self) {
        self.callback = None;
        self.switch_mode(TrackingMode::Never, None);
    }

    pub fn tracking_mode(&self) -> TrackingMode {
        self.mode
    }

    /// Most recent fix delivered by the client.
    pub fn last_position(&self) -> Option<&Position> {
        self.last_position.as_ref()
    }

    /// Most recent failure delivered by the client.
    pub fn last_error(&self) -> Option<&PositionError> {
        self.last_error.as_ref()
    }

    /// Marks the facade dead: later notifications are ignored and mode
    /// changes stop transmitting.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.callback = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Inbound entry point for this facade's notifications.
    pub fn notify(&mut self, event: &str, properties: Option<&JsonValue>) {
        if self.disposed {
            return;
        }
        match event {
            LOCATION_UPDATE => self.handle_update(properties),
            LOCATION_UPDATE_ERROR => self.handle_error(properties),
            other => log::warn!("dropping notification for unknown channel {other:?}"),
        }
    }

    fn handle_update(&mut self, properties: Option<&JsonValue>) {
        let Some(position) = decode::<Position>(properties, "position") else {
            return;
        };
        self.last_position = Some(position.clone());
        if let Some(callback) = self.take_delivery_callback() {
            callback.on_success(&position);
        }
    }

    fn handle_error(&mut self, properties: Option<&JsonValue>) {
        let Some(error) = decode::<PositionError>(properties, "position error") else {
            return;
        };
        self.last_error = Some(error.clone());
        if let Some(callback) = self.take_delivery_callback() {
            callback.on_error(&error);
        }
    }

    /// Hands out the callback for one delivery. A `Once` request is spent by
    /// it: the mode resets to `Never` and the callback is dropped.
    fn take_delivery_callback(&mut self) -> Option<Arc<dyn LocationCallback>> {
        match self.mode {
            TrackingMode::Once => {
                self.switch_mode(TrackingMode::Never, None);
                self.callback.take()
            }
            TrackingMode::Continuous => self.callback.clone(),
            TrackingMode::Never => None,
        }
    }

    fn switch_mode(&mut self, mode: TrackingMode, options: Option<LocationOptions>) {
        if self.disposed {
            return;
        }
        if let Some(options) = options {
            self.remote.set_property(FREQUENCY, json!(options.frequency));
            self.remote.set_property(MAXIMUM_AGE, json!(options.maximum_age));
            self.remote
                .set_property(HIGH_ACCURACY, json!(options.enable_high_accuracy));
        }
        if self.mode != mode {
            self.remote
                .set_property(NEEDS_POSITION, json!(mode.wire_value()));
        }
        self.mode = mode;
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    properties: Option<&JsonValue>,
    what: &str,
) -> Option<T> {
    let Some(bag) = properties else {
        log::warn!("location notification without a {what} payload");
        return None;
    };
    match serde_json::from_value(bag.clone()) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            log::warn!("undecodable {what} payload: {err}");
            None
        }
    }
}
