use std::sync::Mutex;

use serde_json::Value as JsonValue;

use crate::object::RemoteObject;
use crate::op::RemoteOp;

/// In-memory [`RemoteObject`] that records every operation in issue order.
///
/// The verification seam for tests across the workspace: assert on the exact
/// operation sequence the way a wire capture would show it.
#[derive(Debug, Default)]
pub struct RecordingRemote {
    ops: Mutex<Vec<RemoteOp>>,
}

impl RecordingRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation issued so far, in order.
    pub fn ops(&self) -> Vec<RemoteOp> {
        self.ops.lock().expect("ops mutex poisoned").clone()
    }

    /// Enable flags of every listen toggle issued for `event`, in order.
    pub fn listen_toggles(&self, event: &str) -> Vec<bool> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                RemoteOp::Listen {
                    event: recorded,
                    enabled,
                } if recorded == event => Some(enabled),
                _ => None,
            })
            .collect()
    }

    /// Parameter bags of every call issued for `method`, in order.
    pub fn calls(&self, method: &str) -> Vec<Option<JsonValue>> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                RemoteOp::Call {
                    method: recorded,
                    parameters,
                } if recorded == method => Some(parameters),
                _ => None,
            })
            .collect()
    }

    /// Values of every transmitted set for `property`, in order.
    pub fn property_sets(&self, property: &str) -> Vec<JsonValue> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                RemoteOp::Set {
                    property: recorded,
                    value,
                } if recorded == property => Some(value),
                _ => None,
            })
            .collect()
    }

    fn record(&self, op: RemoteOp) {
        self.ops.lock().expect("ops mutex poisoned").push(op);
    }
}

impl RemoteObject for RecordingRemote {
    fn listen(&self, event: &str, enabled: bool) {
        self.record(RemoteOp::Listen {
            event: event.to_string(),
            enabled,
        });
    }

    fn call(&self, method: &str, parameters: Option<JsonValue>) {
        self.record(RemoteOp::Call {
            method: method.to_string(),
            parameters,
        });
    }

    fn set_property(&self, name: &str, value: JsonValue) {
        self.record(RemoteOp::Set {
            property: name.to_string(),
            value,
        });
    }
}
