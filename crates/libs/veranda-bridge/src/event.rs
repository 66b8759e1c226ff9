use std::hash::Hash;

use serde_json::{Map, Value as JsonValue};

/// An event kind the dispatcher can subscribe on the peer.
///
/// Kinds map 1:1 to case-sensitive channel names on the wire; the set of
/// kinds per family is fixed at compile time.
pub trait EventChannel: Copy + Eq + Hash {
    /// Channel name as it appears on the wire.
    fn channel_name(&self) -> &'static str;
}

/// Application lifecycle events delivered by the client shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppEventType {
    Pause,
    Resume,
}

impl AppEventType {
    pub fn channel_name(self) -> &'static str {
        match self {
            Self::Pause => "Pause",
            Self::Resume => "Resume",
        }
    }

    /// Maps an inbound channel name back to its kind.
    pub fn from_channel_name(name: &str) -> Option<Self> {
        match name {
            "Pause" => Some(Self::Pause),
            "Resume" => Some(Self::Resume),
            _ => None,
        }
    }
}

impl EventChannel for AppEventType {
    fn channel_name(&self) -> &'static str {
        (*self).channel_name()
    }
}

/// Single-channel family for the client's back-navigation gesture.
///
/// Carries no payload; listeners receive a zero-argument signal instead of
/// an event object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BackNavigationChannel;

impl EventChannel for BackNavigationChannel {
    fn channel_name(&self) -> &'static str {
        "BackNavigation"
    }
}

/// Typed view of one inbound lifecycle notification.
///
/// Built per notification and handed to every registered listener during the
/// fan-out; not retained afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct AppEvent {
    event_type: AppEventType,
    properties: Map<String, JsonValue>,
}

impl AppEvent {
    pub(crate) fn new(event_type: AppEventType, properties: Option<&JsonValue>) -> Self {
        let properties = match properties {
            Some(JsonValue::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        Self {
            event_type,
            properties,
        }
    }

    pub fn event_type(&self) -> AppEventType {
        self.event_type
    }

    /// Looks up a payload value by key.
    pub fn property(&self, name: &str) -> Option<&JsonValue> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &Map<String, JsonValue> {
        &self.properties
    }
}

/// Receives decoded lifecycle events.
pub trait AppListener: Send + Sync {
    fn handle_event(&self, event: &AppEvent);
}

/// Receives the payload-less back-navigation signal.
pub trait BackNavigationListener: Send + Sync {
    fn navigated_back(&self);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_payload_decodes_to_event_without_properties() {
        let event = AppEvent::new(AppEventType::Pause, None);

        assert_eq!(event.event_type(), AppEventType::Pause);
        assert!(event.properties().is_empty());
        assert_eq!(event.property("foo"), None);
    }

    #[test]
    fn payload_values_are_reachable_by_key() {
        let bag = json!({ "foo": "bar", "count": 3 });
        let event = AppEvent::new(AppEventType::Resume, Some(&bag));

        assert_eq!(event.property("foo"), Some(&json!("bar")));
        assert_eq!(event.property("count"), Some(&json!(3)));
    }

    #[test]
    fn channel_names_round_trip() {
        for kind in [AppEventType::Pause, AppEventType::Resume] {
            assert_eq!(AppEventType::from_channel_name(kind.channel_name()), Some(kind));
        }
        assert_eq!(AppEventType::from_channel_name("pause"), None);
    }
}
