use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value as JsonValue;

use crate::object::RemoteObject;
use crate::op::RemoteOp;

/// Ships operations for one addressable object to the remote peer.
///
/// Fire-and-forget: implementations own queueing and session concerns, and
/// failed transmissions are not retried here.
pub trait Transport: Send + Sync {
    fn deliver(&self, object_id: &str, op: RemoteOp);
}

/// Concrete [`RemoteObject`] bound to an object identifier and a transport.
///
/// Property sets are checked against the last transmitted value per property
/// name, so repeated sets of an unchanged value stay off the wire. The first
/// set of any property always transmits.
pub struct RemoteChannel {
    id: String,
    transport: Arc<dyn Transport>,
    sent_properties: Mutex<HashMap<String, JsonValue>>,
}

impl RemoteChannel {
    pub fn new(id: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            id: id.into(),
            transport,
            sent_properties: Mutex::new(HashMap::new()),
        }
    }

    /// Identifier under which the peer addresses this object.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl RemoteObject for RemoteChannel {
    fn listen(&self, event: &str, enabled: bool) {
        let op = RemoteOp::Listen {
            event: event.to_string(),
            enabled,
        };
        self.transport.deliver(&self.id, op);
    }

    fn call(&self, method: &str, parameters: Option<JsonValue>) {
        let op = RemoteOp::Call {
            method: method.to_string(),
            parameters,
        };
        self.transport.deliver(&self.id, op);
    }

    fn set_property(&self, name: &str, value: JsonValue) {
        let mut sent = self
            .sent_properties
            .lock()
            .expect("sent properties mutex poisoned");
        if sent.get(name) == Some(&value) {
            log::trace!("property {name:?} unchanged on {}, set suppressed", self.id);
            return;
        }
        sent.insert(name.to_string(), value.clone());
        self.transport.deliver(
            &self.id,
            RemoteOp::Set {
                property: name.to_string(),
                value,
            },
        );
    }
}
