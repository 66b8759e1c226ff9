use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One outbound operation issued against a remote object.
///
/// This is the unit a [`Transport`](crate::Transport) ships to the peer and
/// the unit [`RecordingRemote`](crate::RecordingRemote) stores for test
/// assertions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
#[non_exhaustive]
pub enum RemoteOp {
    /// Enable or disable delivery of a named notification channel.
    Listen { event: String, enabled: bool },

    /// Invoke a named operation on the peer, with optional named parameters.
    Call {
        method: String,
        parameters: Option<JsonValue>,
    },

    /// Set a named property to a new value.
    Set { property: String, value: JsonValue },
}
